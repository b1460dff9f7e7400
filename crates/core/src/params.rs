//! Lenient readers for the flat override object accepted by
//! [`WorldConfig::apply_overrides`](crate::world::WorldConfig::apply_overrides).
//!
//! Overrides are best-effort: a key that is absent, or holds a value of the
//! wrong JSON type, leaves the setting it targets as it was.

use serde_json::Value;

/// A JSON number under `key`, or `current`.
pub fn param_f64(overrides: &Value, key: &str, current: f64) -> f64 {
    match overrides.get(key).and_then(Value::as_f64) {
        Some(value) => value,
        None => current,
    }
}

/// A non-negative JSON integer under `key`, or `current`.
pub fn param_usize(overrides: &Value, key: &str, current: usize) -> usize {
    overrides.get(key).and_then(as_count).unwrap_or(current)
}

/// Like [`param_usize`] for settings that may be switched off: `null` under
/// `key` yields `None`.
pub fn param_limit(overrides: &Value, key: &str, current: Option<usize>) -> Option<usize> {
    match overrides.get(key) {
        Some(Value::Null) => None,
        Some(value) => as_count(value).or(current),
        None => current,
    }
}

/// Integers too large for `usize` are treated as the wrong type.
fn as_count(value: &Value) -> Option<usize> {
    value.as_u64().and_then(|n| usize::try_from(n).ok())
}
