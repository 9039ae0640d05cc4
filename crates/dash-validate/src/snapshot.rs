//! Snapshot-level validation.
//!
//! Aggregate invariants are strict: any failure rejects the whole candidate.
//! File records are permissive: malformed entries are dropped with an
//! advisory message.

use std::collections::BTreeMap;

use dash_model::StorageSnapshot;
use serde_json::Value;
use tracing::warn;

use crate::file::parse_file_record;
use crate::util::{byte_count, timestamp};

/// Outcome of [`validate_snapshot`].
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationResult {
    /// Whether the aggregate invariants hold.
    pub valid: bool,
    /// Typed snapshot with invalid files removed; `None` when invalid.
    pub normalized: Option<StorageSnapshot>,
    /// Violations (when invalid) or advisories (when valid).
    pub messages: Vec<String>,
}

impl ValidationResult {
    fn rejected(messages: Vec<String>) -> Self {
        Self {
            valid: false,
            normalized: None,
            messages,
        }
    }
}

/// Validate a loosely-typed snapshot candidate.
///
/// Hard checks, each adding its own message:
/// - `totalStorage` is at least one whole byte
/// - `usedStorage` is a non-negative byte count, at most `totalStorage`
/// - `files` is an array
/// - `storageByType` is a flat object of non-negative byte counts whose
///   sum is at most `usedStorage`
///
/// Byte counts are compared after flooring, so the checks hold for the
/// typed snapshot exactly.
/// - `lastUpdated` is an RFC 3339 timestamp
///
/// If all hard checks pass, `files` is filtered through
/// [`validate_file_record`](crate::validate_file_record).
pub fn validate_snapshot(candidate: &Value) -> ValidationResult {
    let Some(object) = candidate.as_object() else {
        return ValidationResult::rejected(vec!["Snapshot must be an object".to_string()]);
    };
    let mut messages = Vec::new();

    let total = object
        .get("totalStorage")
        .and_then(byte_count)
        .filter(|n| *n > 0);
    if total.is_none() {
        messages.push("totalStorage must be a positive finite number".to_string());
    }

    let used = object.get("usedStorage").and_then(byte_count);
    if used.is_none() {
        messages.push("usedStorage must be a non-negative finite number".to_string());
    }

    if let (Some(total), Some(used)) = (total, used)
        && used > total
    {
        messages.push(format!(
            "usedStorage ({used}) cannot exceed totalStorage ({total})"
        ));
    }

    let files = object.get("files").and_then(Value::as_array);
    if files.is_none() {
        messages.push("files must be an array".to_string());
    }

    let by_type = check_storage_by_type(object.get("storageByType"), &mut messages);
    if let (Some(by_type), Some(used)) = (&by_type, used) {
        let sum: u128 = by_type.values().copied().map(u128::from).sum();
        if sum > u128::from(used) {
            messages.push(format!(
                "storageByType total ({sum}) cannot exceed usedStorage ({used})"
            ));
        }
    }

    let last_updated = timestamp(object.get("lastUpdated"));
    if last_updated.is_none() {
        messages.push("lastUpdated must be a valid RFC 3339 timestamp".to_string());
    }

    let (Some(total), Some(used), Some(files), Some(by_type), Some(last_updated)) =
        (total, used, files, by_type, last_updated)
    else {
        return ValidationResult::rejected(messages);
    };
    if !messages.is_empty() {
        return ValidationResult::rejected(messages);
    }

    let records: Vec<_> = files.iter().filter_map(parse_file_record).collect();
    let dropped = files.len() - records.len();
    if dropped > 0 {
        warn!(dropped, "dropping invalid file records from snapshot");
        messages.push(format!("Filtered out {dropped} invalid file item(s)"));
    }

    let normalized = StorageSnapshot {
        total_storage: total,
        used_storage: used,
        files: records,
        storage_by_type: by_type,
        last_updated,
    };

    ValidationResult {
        valid: true,
        normalized: Some(normalized),
        messages,
    }
}

fn check_storage_by_type(
    value: Option<&Value>,
    messages: &mut Vec<String>,
) -> Option<BTreeMap<String, u64>> {
    let Some(map) = value.and_then(Value::as_object) else {
        messages.push("storageByType must be an object".to_string());
        return None;
    };
    let mut checked = BTreeMap::new();
    let mut ok = true;
    for (label, bytes) in map {
        match byte_count(bytes) {
            Some(n) => {
                checked.insert(label.clone(), n);
            }
            None => {
                messages.push(format!(
                    "storageByType.{label} must be a non-negative finite number"
                ));
                ok = false;
            }
        }
    }
    ok.then_some(checked)
}
