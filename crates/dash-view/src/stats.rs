//! Aggregate statistics shown on the overview cards.

use chrono::{DateTime, Utc};
use dash_model::StorageSnapshot;

use crate::format::{format_bytes, format_percent, format_timestamp};

/// Usage at or above this percentage is shown as a warning.
pub const WARNING_PERCENT: f64 = 75.0;

/// Usage at or above this percentage is shown as critical.
pub const CRITICAL_PERCENT: f64 = 90.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsageLevel {
    Normal,
    Warning,
    Critical,
}

/// One stat card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: String,
    pub detail: String,
}

/// Statistics derived from a storage snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct StorageStats {
    pub total: u64,
    pub used: u64,
    pub free: u64,
    pub usage_percent: f64,
    pub file_count: usize,
    /// Name and size of the largest file.
    pub largest_file: Option<(String, u64)>,
    pub type_count: usize,
    pub last_updated: DateTime<Utc>,
}

impl StorageStats {
    pub fn from_snapshot(snapshot: &StorageSnapshot) -> Self {
        let largest_file = snapshot
            .files
            .iter()
            .max_by_key(|file| file.size)
            .map(|file| (file.name.clone(), file.size));
        Self {
            total: snapshot.total_storage,
            used: snapshot.used_storage,
            free: snapshot.free_storage(),
            usage_percent: snapshot.usage_percent(),
            file_count: snapshot.files.len(),
            largest_file,
            type_count: snapshot.storage_by_type.len(),
            last_updated: snapshot.last_updated,
        }
    }

    pub fn usage_level(&self) -> UsageLevel {
        if self.usage_percent >= CRITICAL_PERCENT {
            UsageLevel::Critical
        } else if self.usage_percent >= WARNING_PERCENT {
            UsageLevel::Warning
        } else {
            UsageLevel::Normal
        }
    }

    /// Cards in display order.
    pub fn cards(&self) -> Vec<StatCard> {
        let largest = match &self.largest_file {
            Some((name, size)) => format!("Largest: {name} ({})", format_bytes(*size)),
            None => "No files".to_string(),
        };
        vec![
            StatCard {
                title: "Used",
                value: format_bytes(self.used),
                detail: format!("{} of {}", format_percent(self.usage_percent), format_bytes(self.total)),
            },
            StatCard {
                title: "Free",
                value: format_bytes(self.free),
                detail: format!("Updated {}", format_timestamp(&self.last_updated)),
            },
            StatCard {
                title: "Files",
                value: self.file_count.to_string(),
                detail: largest,
            },
            StatCard {
                title: "Types",
                value: self.type_count.to_string(),
                detail: "Tracked categories".to_string(),
            },
        ]
    }
}
