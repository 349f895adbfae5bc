//! Tolerant field adapters for booking snapshots.
//!
//! The server's snapshot fields are loosely typed: counts arrive as numbers,
//! numeric strings or whole floats, text fields occasionally as numbers or
//! booleans. Each field is normalized once at deserialization; a value that
//! cannot mean anything for its field becomes `None` instead of failing the
//! whole response.

use serde::{Deserialize, Deserializer};
use serde_json::{Number, Value};

use crate::booking::{BookingId, Timestamp};

/// Integer from a JSON number, numeric string or whole float.
#[must_use]
pub fn integer_value(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => integer_number(number),
        Value::String(text) => {
            let text = text.trim();
            text.parse::<i64>()
                .ok()
                .or_else(|| text.parse::<f64>().ok().and_then(whole))
        }
        Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Text from a JSON string, number or boolean (`"yes"`/`"no"`).
#[must_use]
pub fn text_value(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(true) => Some(String::from("yes")),
        Value::Bool(false) => Some(String::from("no")),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Booking id from a number (whole floats included) or non-blank string.
#[must_use]
pub fn booking_id_value(value: &Value) -> Option<BookingId> {
    match value {
        Value::Number(number) => integer_number(number).map(BookingId::Number),
        Value::String(text) if !text.trim().is_empty() => {
            Some(BookingId::Text(text.trim().to_string()))
        }
        _ => None,
    }
}

/// Timestamp from a string; a bare number is kept verbatim.
#[must_use]
pub fn timestamp_value(value: &Value) -> Option<Timestamp> {
    match value {
        Value::String(text) => Timestamp::parse(text),
        Value::Number(number) => Some(Timestamp::Unparsed(number.to_string())),
        Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => None,
    }
}

fn integer_number(number: &Number) -> Option<i64> {
    number.as_i64().or_else(|| number.as_f64().and_then(whole))
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::float_cmp
)]
fn whole(n: f64) -> Option<i64> {
    let in_range = n >= i64::MIN as f64 && n <= i64::MAX as f64;
    (n.is_finite() && n.fract() == 0.0 && in_range).then_some(n as i64)
}

/// `deserialize_with` adapter for `Option<i64>` fields.
///
/// # Errors
///
/// Only fails if the underlying deserializer cannot produce any JSON value.
pub fn integer<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(integer_value(&Value::deserialize(deserializer)?))
}

/// `deserialize_with` adapter for `Option<String>` fields.
///
/// # Errors
///
/// Only fails if the underlying deserializer cannot produce any JSON value.
pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(text_value(&Value::deserialize(deserializer)?))
}

/// `deserialize_with` adapter for the booking id.
///
/// # Errors
///
/// Only fails if the underlying deserializer cannot produce any JSON value.
pub fn booking_id<'de, D>(deserializer: D) -> Result<Option<BookingId>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(booking_id_value(&Value::deserialize(deserializer)?))
}

/// `deserialize_with` adapter for check-in/check-out.
///
/// # Errors
///
/// Only fails if the underlying deserializer cannot produce any JSON value.
pub fn timestamp<'de, D>(deserializer: D) -> Result<Option<Timestamp>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(timestamp_value(&Value::deserialize(deserializer)?))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[rstest]
    #[case(json!(2), Some(2))]
    #[case(json!("2"), Some(2))]
    #[case(json!(" 3 "), Some(3))]
    #[case(json!(3.0), Some(3))]
    #[case(json!("3.0"), Some(3))]
    #[case(json!(2.5), None)]
    #[case(json!("two"), None)]
    #[case(json!(true), None)]
    #[case(json!(null), None)]
    #[case(json!([2]), None)]
    fn integers(#[case] value: Value, #[case] expected: Option<i64>) {
        assert_eq!(integer_value(&value), expected);
    }

    #[rstest]
    #[case(json!("card"), Some("card"))]
    #[case(json!(true), Some("yes"))]
    #[case(json!(false), Some("no"))]
    #[case(json!(42), Some("42"))]
    #[case(json!({"kind": "card"}), None)]
    #[case(json!(null), None)]
    fn texts(#[case] value: Value, #[case] expected: Option<&str>) {
        assert_eq!(text_value(&value).as_deref(), expected);
    }

    #[test]
    fn booking_ids() {
        assert_eq!(booking_id_value(&json!(7)), Some(BookingId::Number(7)));
        assert_eq!(booking_id_value(&json!(7.0)), Some(BookingId::Number(7)));
        assert_eq!(
            booking_id_value(&json!(" b-7 ")),
            Some(BookingId::Text(String::from("b-7")))
        );
        assert_eq!(booking_id_value(&json!("  ")), None);
        assert_eq!(booking_id_value(&json!(false)), None);
    }

    #[test]
    fn timestamps() {
        assert!(matches!(
            timestamp_value(&json!("2025-05-02")),
            Some(Timestamp::Wall(_))
        ));
        assert_eq!(
            timestamp_value(&json!(20_250_502)),
            Some(Timestamp::Unparsed(String::from("20250502")))
        );
        assert_eq!(timestamp_value(&json!(true)), None);
    }
}
