//! Proportional correction of per-type usage.
//!
//! Runs before validation so that a breakdown overshooting `usedStorage`
//! is scaled down instead of rejecting the whole snapshot.

use std::collections::BTreeMap;

use serde_json::{Map, Value};
use tracing::debug;

use crate::util::{byte_count, map_sum};

/// Scale `storageByType` in a snapshot candidate to fit `usedStorage`.
///
/// Does nothing unless `usedStorage` is a non-negative number, every
/// breakdown value is a non-negative number, and the breakdown sum is
/// positive and above `usedStorage`. Malformed candidates are left for the
/// validator to report. Returns `true` if values were rewritten.
pub fn correct_storage_by_type(candidate: &mut Value) -> bool {
    let Some(object) = candidate.as_object_mut() else {
        return false;
    };
    let Some(used) = object.get("usedStorage").and_then(byte_count) else {
        return false;
    };
    let Some(Value::Object(by_type)) = object.get_mut("storageByType") else {
        return false;
    };
    scale_map(by_type, used)
}

/// Scale a flat label -> bytes map to fit within `used`.
pub fn scale_to_fit(by_type: &mut BTreeMap<String, u64>, used: u64) -> bool {
    let sum: u128 = by_type.values().copied().map(u128::from).sum();
    if sum == 0 || sum <= u128::from(used) {
        return false;
    }
    debug!(%sum, used, "scaling storage breakdown to fit used storage");
    let used = u128::from(used);
    for value in by_type.values_mut() {
        // Integer arithmetic keeps the floor exact.
        let scaled = u128::from(*value) * used / sum;
        *value = u64::try_from(scaled).unwrap_or(u64::MAX);
    }
    true
}

fn scale_map(by_type: &mut Map<String, Value>, used: u64) -> bool {
    let Some(sum) = map_sum(by_type) else {
        return false;
    };
    if sum == 0 || sum <= u128::from(used) {
        return false;
    }
    debug!(%sum, used, "scaling storage breakdown to fit used storage");
    let used = u128::from(used);
    for value in by_type.values_mut() {
        let current = byte_count(value).map_or(0, u128::from);
        let scaled = current * used / sum;
        *value = Value::from(u64::try_from(scaled).unwrap_or(u64::MAX));
    }
    true
}
