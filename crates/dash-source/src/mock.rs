//! Deterministic example data for offline and demo use.
//!
//! Every call returns the same ids, names, sizes and timestamps.

use std::collections::BTreeMap;

use chrono::{DateTime, TimeZone, Utc};
use dash_model::{FileRecord, StorageSnapshot};
use serde_json::Value;

const MB: u64 = 1024 * 1024;
const GB: u64 = 1024 * MB;

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

fn file(
    id: &str,
    name: &str,
    size: u64,
    file_type: &str,
    last_modified: DateTime<Utc>,
    folder: &str,
) -> FileRecord {
    FileRecord {
        id: id.to_string(),
        name: name.to_string(),
        size,
        file_type: file_type.to_string(),
        last_modified,
        path: format!("/{folder}/{name}"),
    }
}

/// Files in the example snapshot.
pub fn mock_files() -> Vec<FileRecord> {
    vec![
        file(
            "1",
            "Project Proposal.pdf",
            2_621_440,
            "application/pdf",
            at(2024, 1, 15, 10, 30),
            "Documents",
        ),
        file(
            "2",
            "Vacation Photo.jpg",
            4_404_019,
            "image/jpeg",
            at(2024, 1, 14, 16, 45),
            "Pictures",
        ),
        file(
            "3",
            "Quarterly Report.xlsx",
            1_153_434,
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
            at(2024, 1, 13, 9, 15),
            "Documents",
        ),
        file(
            "4",
            "Family Video.mp4",
            524 * MB,
            "video/mp4",
            at(2024, 1, 12, 20, 0),
            "Videos",
        ),
        file(
            "5",
            "Podcast Episode.mp3",
            48 * MB,
            "audio/mpeg",
            at(2024, 1, 11, 7, 20),
            "Music",
        ),
        file(
            "6",
            "Backup.zip",
            2 * GB,
            "application/zip",
            at(2024, 1, 10, 23, 55),
            "Archives",
        ),
        file(
            "7",
            "Design Mockup.png",
            8_912_896,
            "image/png",
            at(2024, 1, 9, 14, 5),
            "Pictures",
        ),
        file(
            "8",
            "notes.txt",
            12_288,
            "text/plain",
            at(2024, 1, 8, 11, 0),
            "Documents",
        ),
    ]
}

/// The example snapshot: 100 GB capacity, 45 GB used.
pub fn mock_snapshot() -> StorageSnapshot {
    StorageSnapshot {
        total_storage: 100 * GB,
        used_storage: 45 * GB,
        files: mock_files(),
        storage_by_type: BTreeMap::from([
            ("Documents".to_string(), 8 * GB),
            ("Images".to_string(), 12 * GB),
            ("Videos".to_string(), 15 * GB),
            ("Audio".to_string(), 5 * GB),
            ("Archives".to_string(), 3 * GB),
            ("Other".to_string(), 2 * GB),
        ]),
        last_updated: at(2024, 1, 15, 12, 0),
    }
}

/// [`mock_snapshot`] in the endpoint's JSON shape.
pub fn mock_payload() -> Value {
    serde_json::to_value(mock_snapshot()).unwrap_or(Value::Null)
}
