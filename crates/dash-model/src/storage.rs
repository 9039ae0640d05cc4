use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const GIB: u64 = 1024 * 1024 * 1024;

/// Capacity used by the default snapshot (100 GB).
pub const DEFAULT_TOTAL_STORAGE: u64 = 100 * GIB;

/// Bytes reported as used by the default snapshot.
pub const DEFAULT_USED_STORAGE: u64 = 0;

/// One stored object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    /// Opaque identifier (not enforced unique across a snapshot).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Size in bytes.
    pub size: u64,
    /// Classification string, used as MIME type and as a grouping key.
    #[serde(rename = "type")]
    pub file_type: String,
    pub last_modified: DateTime<Utc>,
    /// Full path of the object.
    pub path: String,
}

impl FileRecord {
    /// File extension taken from the name, lowercased.
    pub fn extension(&self) -> Option<String> {
        let (stem, ext) = self.name.rsplit_once('.')?;
        if stem.is_empty() || ext.is_empty() {
            return None;
        }
        Some(ext.to_lowercase())
    }
}

/// Canonical storage aggregate.
///
/// Invariants held by every published snapshot:
/// - `total_storage > 0`
/// - `used_storage <= total_storage`
/// - `storage_by_type` values sum to at most `used_storage`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageSnapshot {
    pub total_storage: u64,
    pub used_storage: u64,
    /// Files in insertion order.
    pub files: Vec<FileRecord>,
    /// Bytes per type label.
    pub storage_by_type: BTreeMap<String, u64>,
    pub last_updated: DateTime<Utc>,
}

impl StorageSnapshot {
    /// The fixed default snapshot, stamped with `now`.
    pub fn default_at(now: DateTime<Utc>) -> Self {
        Self {
            total_storage: DEFAULT_TOTAL_STORAGE,
            used_storage: DEFAULT_USED_STORAGE,
            files: Vec::new(),
            storage_by_type: BTreeMap::new(),
            last_updated: now,
        }
    }

    /// Bytes still available.
    pub fn free_storage(&self) -> u64 {
        self.total_storage.saturating_sub(self.used_storage)
    }

    /// Used storage as a percentage of total (0 when total is 0).
    pub fn usage_percent(&self) -> f64 {
        if self.total_storage == 0 {
            return 0.0;
        }
        self.used_storage as f64 / self.total_storage as f64 * 100.0
    }

    /// Sum of all per-type byte counts.
    pub fn type_total(&self) -> u64 {
        self.storage_by_type
            .values()
            .fold(0, |sum, bytes| sum.saturating_add(*bytes))
    }

    /// Find a file by id.
    pub fn file(&self, id: &str) -> Option<&FileRecord> {
        self.files.iter().find(|file| file.id == id)
    }
}
