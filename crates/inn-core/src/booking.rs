//! Booking snapshots as interpreted by the booking server.
//!
//! A snapshot is the server's full view of one booking for one turn. Snapshots
//! are never merged field-by-field on the client: each one replaces whatever
//! was shown before for the same identity.

use std::fmt::{self, Write as _};

use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::confirmation;
use crate::lenient;
use crate::errors::CoreError;

/// Fallback display format when a configured pattern cannot be rendered.
pub const DEFAULT_DATE_FORMAT: &str = "%a %d %b %Y %H:%M";

/// Identity used when a snapshot carries neither a booking id nor a session id.
pub const FALLBACK_IDENTITY: &str = "booking";

// ---------------------------------------------------------------------------
// BookingId
// ---------------------------------------------------------------------------

/// Booking identifier as sent by the server.
///
/// The server uses integer primary keys, but the field is accepted as a string
/// too so a differently-shaped backend does not break reconciliation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BookingId {
    Number(i64),
    Text(String),
}

impl BookingId {
    /// Numeric id usable in `/api/booking/<id>` routes.
    #[must_use]
    pub fn as_route_id(&self) -> Option<u64> {
        match self {
            Self::Number(n) => u64::try_from(*n).ok().filter(|n| *n > 0),
            Self::Text(s) => s.trim().parse::<u64>().ok().filter(|n| *n > 0),
        }
    }

    /// Parse a booking reference typed by the user (e.g. `/confirm 12`).
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidBookingId`] unless `raw` is a positive integer.
    pub fn parse_reference(raw: &str) -> Result<u64, CoreError> {
        raw.trim()
            .parse::<u64>()
            .ok()
            .filter(|n| *n > 0)
            .ok_or_else(|| CoreError::InvalidBookingId(raw.trim().to_string()))
    }
}

impl fmt::Display for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

// ---------------------------------------------------------------------------
// Timestamp
// ---------------------------------------------------------------------------

/// Check-in / check-out time as received on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Timestamp {
    /// Carries a UTC offset; displayed converted to the viewer's zone.
    Instant(DateTime<FixedOffset>),
    /// No offset; already wall-clock time for the viewer.
    Wall(NaiveDateTime),
    /// Present but not parseable; displayed verbatim.
    Unparsed(String),
}

impl Timestamp {
    /// Parse a wire timestamp. Blank input is treated as absent.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }

        if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
            return Some(Self::Instant(instant));
        }
        for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
            if let Ok(wall) = NaiveDateTime::parse_from_str(raw, pattern) {
                return Some(Self::Wall(wall));
            }
        }
        if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            return Some(Self::Wall(date.and_time(chrono::NaiveTime::MIN)));
        }

        Some(Self::Unparsed(raw.to_string()))
    }

    /// Render for display in the viewer's local zone using a strftime pattern.
    ///
    /// Falls back to [`DEFAULT_DATE_FORMAT`] if `pattern` contains an
    /// unsupported specifier.
    #[must_use]
    pub fn display(&self, pattern: &str) -> String {
        match self {
            Self::Instant(instant) => {
                let local = instant.with_timezone(&Local);
                render_pattern(pattern, |p, out| write!(out, "{}", local.format(p)))
            }
            Self::Wall(wall) => render_pattern(pattern, |p, out| write!(out, "{}", wall.format(p))),
            Self::Unparsed(raw) => raw.clone(),
        }
    }
}

fn render_pattern(
    pattern: &str,
    write: impl Fn(&str, &mut String) -> fmt::Result,
) -> String {
    let mut out = String::new();
    if write(pattern, &mut out).is_ok() {
        return out;
    }
    out.clear();
    match write(DEFAULT_DATE_FORMAT, &mut out) {
        Ok(()) => out,
        Err(_) => String::from("-"),
    }
}

// ---------------------------------------------------------------------------
// BookingSnapshot
// ---------------------------------------------------------------------------

/// The server's interpretation of a booking for one conversational turn.
///
/// Field types are loose on the wire; see [`lenient`] for how each is read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BookingSnapshot {
    #[serde(default, deserialize_with = "lenient::booking_id")]
    pub id: Option<BookingId>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub session_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub guest_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::timestamp")]
    pub checkin: Option<Timestamp>,
    #[serde(default, deserialize_with = "lenient::timestamp")]
    pub checkout: Option<Timestamp>,
    #[serde(default, deserialize_with = "lenient::integer")]
    pub nights: Option<i64>,
    #[serde(default, deserialize_with = "lenient::integer")]
    pub guests: Option<i64>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub breakfast: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub payment_method: Option<String>,
    /// Normalized once here; see [`confirmation::is_confirmed`].
    #[serde(default, deserialize_with = "confirmation::deserialize")]
    pub confirmed: bool,
    /// Server-side audit trail (confirmation/cancellation stamps).
    #[serde(default, deserialize_with = "lenient::text")]
    pub notes: Option<String>,
}

impl BookingSnapshot {
    /// Key under which this snapshot's summaries are reconciled.
    #[must_use]
    pub fn identity(&self) -> Identity {
        Identity::of(self)
    }

    /// Positive night count, if any.
    #[must_use]
    pub fn positive_nights(&self) -> Option<i64> {
        self.nights.filter(|n| *n > 0)
    }

    /// Positive guest count, if any.
    #[must_use]
    pub fn positive_guests(&self) -> Option<i64> {
        self.guests.filter(|n| *n > 0)
    }

    /// Guest name with surrounding whitespace removed; `None` if blank.
    #[must_use]
    pub fn trimmed_guest_name(&self) -> Option<&str> {
        self.guest_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

// ---------------------------------------------------------------------------
// Identity
// ---------------------------------------------------------------------------

/// Stable display key addressing the summaries of one booking.
///
/// Booking id when present, else session id, else [`FALLBACK_IDENTITY`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Identity(String);

impl Identity {
    #[must_use]
    pub fn of(snapshot: &BookingSnapshot) -> Self {
        if let Some(id) = &snapshot.id {
            return Self(id.to_string());
        }
        if let Some(session) = &snapshot.session_id {
            return Self(session.clone());
        }
        Self(FALLBACK_IDENTITY.to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Identity {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn snapshot(value: serde_json::Value) -> BookingSnapshot {
        serde_json::from_value(value).expect("snapshot should deserialize")
    }

    #[test]
    fn identity_prefers_booking_id() {
        let s = snapshot(json!({"id": 7, "session_id": "abc"}));
        assert_eq!(s.identity().as_str(), "7");
    }

    #[test]
    fn identity_accepts_string_booking_id() {
        let s = snapshot(json!({"id": "bk-1", "session_id": "abc"}));
        assert_eq!(s.identity().as_str(), "bk-1");
    }

    #[test]
    fn identity_falls_back_to_session_when_id_is_null() {
        let s = snapshot(json!({"id": null, "session_id": "abc"}));
        assert_eq!(s.identity().as_str(), "abc");
    }

    #[test]
    fn identity_falls_back_to_literal() {
        let s = snapshot(json!({}));
        assert_eq!(s.identity().as_str(), FALLBACK_IDENTITY);
    }

    #[test]
    fn date_only_timestamp_is_midnight_wall_time() {
        let parsed = Timestamp::parse("2025-05-02").expect("present");
        let expected = NaiveDate::from_ymd_opt(2025, 5, 2)
            .expect("valid date")
            .and_time(NaiveTime::MIN);
        assert_eq!(parsed, Timestamp::Wall(expected));
    }

    #[test]
    fn python_isoformat_timestamp_parses() {
        let parsed = Timestamp::parse("2025-05-02T14:30:00").expect("present");
        assert!(matches!(parsed, Timestamp::Wall(_)));
        assert_eq!(parsed.display("%Y-%m-%d %H:%M"), "2025-05-02 14:30");
    }

    #[test]
    fn offset_timestamp_is_an_instant() {
        let parsed = Timestamp::parse("2025-05-02T14:30:00+02:00").expect("present");
        assert!(matches!(parsed, Timestamp::Instant(_)));
    }

    #[test]
    fn blank_timestamp_is_absent() {
        assert_eq!(Timestamp::parse("   "), None);
        let s = snapshot(json!({"checkin": ""}));
        assert_eq!(s.checkin, None);
    }

    #[test]
    fn garbage_timestamp_is_kept_verbatim() {
        let parsed = Timestamp::parse("next tuesday").expect("present");
        assert_eq!(parsed.display("%Y"), "next tuesday");
    }

    #[test]
    fn unsupported_pattern_falls_back_to_default_format() {
        let parsed = Timestamp::parse("2025-05-02").expect("present");
        assert_eq!(parsed.display("%Q"), "Fri 02 May 2025 00:00");
    }

    #[test]
    fn route_id_requires_positive_integer() {
        assert_eq!(BookingId::Number(12).as_route_id(), Some(12));
        assert_eq!(BookingId::Number(0).as_route_id(), None);
        assert_eq!(BookingId::Text("34".into()).as_route_id(), Some(34));
        assert_eq!(BookingId::Text("abc".into()).as_route_id(), None);
    }

    #[test]
    fn parse_reference_rejects_non_numeric() {
        assert_eq!(BookingId::parse_reference(" 5 ").expect("valid"), 5);
        assert!(matches!(
            BookingId::parse_reference("five"),
            Err(CoreError::InvalidBookingId(raw)) if raw == "five"
        ));
    }

    #[test]
    fn trimmed_guest_name_ignores_whitespace_only() {
        let s = snapshot(json!({"guest_name": "   "}));
        assert_eq!(s.trimmed_guest_name(), None);
        let s = snapshot(json!({"guest_name": "  Jane "}));
        assert_eq!(s.trimmed_guest_name(), Some("Jane"));
    }
}
