//! Helpers for reading loosely-typed JSON values.

use chrono::{DateTime, Utc};
use serde_json::Value;

/// 2^64 as an `f64`; the first float that does not fit in a `u64`.
const U64_LIMIT: f64 = 18_446_744_073_709_551_616.0;

/// A whole byte count from a non-negative JSON number.
///
/// Integers are read exactly. Fractions are floored. Negative, non-finite
/// and out-of-range numbers are rejected.
pub(crate) fn byte_count(value: &Value) -> Option<u64> {
    if let Some(n) = value.as_u64() {
        return Some(n);
    }
    let n = value.as_f64().filter(|n| n.is_finite() && *n >= 0.0 && *n < U64_LIMIT)?;
    Some(n.floor() as u64)
}

/// A non-empty string field.
pub(crate) fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
}

/// An RFC 3339 timestamp.
pub(crate) fn timestamp(value: Option<&Value>) -> Option<DateTime<Utc>> {
    let raw = value?.as_str()?;
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Sum of a flat label -> bytes map, or `None` if any value is not a
/// valid byte count.
pub(crate) fn map_sum(map: &serde_json::Map<String, Value>) -> Option<u128> {
    map.values()
        .map(|value| byte_count(value).map(u128::from))
        .sum()
}
