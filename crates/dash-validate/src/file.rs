//! File record checks.

use dash_model::FileRecord;
use serde_json::Value;

use crate::util::{byte_count, non_empty_str, timestamp};

/// Check a single file record candidate.
///
/// Returns `true` iff `id`, `name`, `type` and `path` are non-empty
/// strings, `size` is a non-negative number that fits in a `u64` and `lastModified` is a
/// valid RFC 3339 timestamp.
pub fn validate_file_record(candidate: &Value) -> bool {
    parse_file_record(candidate).is_some()
}

/// Convert a file record candidate into a typed record, or `None` if any
/// field constraint fails.
pub fn parse_file_record(candidate: &Value) -> Option<FileRecord> {
    let object = candidate.as_object()?;
    let id = non_empty_str(object.get("id"))?;
    let name = non_empty_str(object.get("name"))?;
    let size = object.get("size").and_then(byte_count)?;
    let file_type = non_empty_str(object.get("type"))?;
    let last_modified = timestamp(object.get("lastModified"))?;
    let path = non_empty_str(object.get("path"))?;

    Some(FileRecord {
        id: id.to_string(),
        name: name.to_string(),
        size,
        file_type: file_type.to_string(),
        last_modified,
        path: path.to_string(),
    })
}
