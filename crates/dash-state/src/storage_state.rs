//! Canonical storage snapshot container.
//!
//! Every write goes through the same two phases, in this order:
//!
//! 1. proportional correction of `storageByType`
//! 2. validation of the aggregate invariants
//!
//! A write that still fails validation is rejected as a whole and leaves the
//! published snapshot untouched.

use std::collections::BTreeMap;

use chrono::Utc;
use dash_model::{FileRecord, StorageSnapshot};
use dash_validate::{correct_storage_by_type, scale_to_fit, validate_snapshot};
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{Result, StateError};
use crate::observable::{Observable, Subscription};

/// Owner of the current [`StorageSnapshot`].
pub struct StorageState {
    inner: Observable<StorageSnapshot>,
    last_messages: Vec<String>,
}

impl Default for StorageState {
    fn default() -> Self {
        Self::new()
    }
}

impl StorageState {
    /// Create a container holding the default snapshot.
    pub fn new() -> Self {
        Self {
            inner: Observable::new(StorageSnapshot::default_at(Utc::now())),
            last_messages: Vec::new(),
        }
    }

    /// Create a container seeded with `snapshot`, validated like any write.
    pub fn with_snapshot(snapshot: StorageSnapshot) -> Result<Self> {
        let mut state = Self::new();
        state.replace_snapshot(snapshot)?;
        Ok(state)
    }

    /// Observe the snapshot. Called immediately, then after every accepted
    /// write.
    pub fn subscribe(&self, observer: impl FnMut(&StorageSnapshot) + 'static) -> Subscription {
        self.inner.subscribe(observer)
    }

    /// Copy of the current snapshot.
    pub fn snapshot(&self) -> StorageSnapshot {
        self.inner.get().clone()
    }

    /// Advisory messages from the most recent accepted write.
    pub fn last_messages(&self) -> &[String] {
        &self.last_messages
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.subscriber_count()
    }

    /// Replace the snapshot with a loosely-typed candidate.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::InvalidSnapshot`] if the corrected candidate
    /// still violates an aggregate invariant.
    pub fn replace(&mut self, mut candidate: Value) -> Result<()> {
        correct_storage_by_type(&mut candidate);
        self.commit(&candidate)
    }

    /// Replace the snapshot with a typed candidate.
    pub fn replace_snapshot(&mut self, snapshot: StorageSnapshot) -> Result<()> {
        let candidate = serde_json::to_value(snapshot)?;
        self.replace(candidate)
    }

    /// Apply `transform` to a copy of the snapshot and write the result.
    pub fn mutate(&mut self, transform: impl FnOnce(&mut StorageSnapshot)) -> Result<()> {
        let mut draft = self.inner.get().clone();
        transform(&mut draft);
        self.replace_snapshot(draft)
    }

    pub fn set_used_storage(&mut self, bytes: u64) -> Result<()> {
        self.mutate(|s| {
            s.used_storage = bytes;
            s.last_updated = Utc::now();
        })
    }

    pub fn set_total_storage(&mut self, bytes: u64) -> Result<()> {
        self.mutate(|s| {
            s.total_storage = bytes;
            s.last_updated = Utc::now();
        })
    }

    pub fn set_files(&mut self, files: Vec<FileRecord>) -> Result<()> {
        self.mutate(|s| {
            s.files = files;
            s.last_updated = Utc::now();
        })
    }

    /// Append a file.
    pub fn add_file(&mut self, file: FileRecord) -> Result<()> {
        self.mutate(|s| {
            s.files.push(file);
            s.last_updated = Utc::now();
        })
    }

    /// Remove the first file with `id`.
    ///
    /// Returns `Ok(false)` without touching the snapshot (or its timestamp)
    /// when no file matches.
    pub fn remove_file(&mut self, id: &str) -> Result<bool> {
        let Some(index) = self.inner.get().files.iter().position(|f| f.id == id) else {
            debug!(id, "remove_file: no matching file");
            return Ok(false);
        };
        self.mutate(|s| {
            s.files.remove(index);
            s.last_updated = Utc::now();
        })?;
        Ok(true)
    }

    /// Replace the per-type breakdown, scaling it to fit `usedStorage`
    /// first.
    pub fn set_storage_by_type(&mut self, mut by_type: BTreeMap<String, u64>) -> Result<()> {
        scale_to_fit(&mut by_type, self.inner.get().used_storage);
        self.mutate(|s| {
            s.storage_by_type = by_type;
            s.last_updated = Utc::now();
        })
    }

    /// Bump `lastUpdated` without re-validating.
    pub fn touch_timestamp(&mut self) {
        self.inner.update(|s| s.last_updated = Utc::now());
    }

    /// Restore the default snapshot.
    pub fn reset(&mut self) {
        self.last_messages.clear();
        self.inner.set(StorageSnapshot::default_at(Utc::now()));
    }

    fn commit(&mut self, candidate: &Value) -> Result<()> {
        let result = validate_snapshot(candidate);
        match result.normalized {
            Some(snapshot) if result.valid => {
                debug!(
                    files = snapshot.files.len(),
                    used = snapshot.used_storage,
                    total = snapshot.total_storage,
                    "storage snapshot accepted"
                );
                self.last_messages = result.messages;
                self.inner.set(snapshot);
                Ok(())
            }
            _ => {
                warn!(messages = ?result.messages, "storage snapshot rejected");
                Err(StateError::InvalidSnapshot {
                    messages: result.messages,
                })
            }
        }
    }
}
