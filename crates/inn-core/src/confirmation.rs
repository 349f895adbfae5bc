//! Confirmation detection.
//!
//! The server's `confirmed` flag has been seen as a JSON boolean, a
//! capitalized or lower-case string, and as `1` in both numeric and string
//! form. It is normalized to `bool` when the snapshot is deserialized and
//! never re-inspected afterwards.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Whether a raw wire value means "confirmed".
///
/// Only `true`, `"True"`, `"true"`, `1` and `"1"` qualify. Anything else,
/// including null, objects and arrays, is not confirmed.
#[must_use]
pub fn is_confirmed(value: &Value) -> bool {
    match value {
        Value::Bool(flag) => *flag,
        Value::String(text) => matches!(text.as_str(), "True" | "true" | "1"),
        Value::Number(number) => {
            number.as_u64() == Some(1)
                || number.as_i64() == Some(1)
                || number.as_f64().is_some_and(|n| (n - 1.0).abs() < f64::EPSILON)
        }
        Value::Null | Value::Array(_) | Value::Object(_) => false,
    }
}

/// Serde adapter for `#[serde(deserialize_with = ...)]` on a `bool` field.
///
/// # Errors
///
/// Only fails if the underlying deserializer cannot produce any JSON value.
pub fn deserialize<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(is_confirmed(&value))
}
