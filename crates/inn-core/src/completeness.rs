//! Missing-field evaluation.
//!
//! A booking needs a guest name, a date range and a guest count before the
//! server will confirm it. The evaluator reports which of those are absent,
//! always in the same order, so prompts and progress lines are stable.

use std::fmt;

use serde::Serialize;

use crate::booking::BookingSnapshot;

/// A required booking attribute that is not yet known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingField {
    Name,
    Dates,
    Guests,
}

impl MissingField {
    /// Every required field, in reporting order.
    pub const ALL: [Self; 3] = [Self::Name, Self::Dates, Self::Guests];

    /// Human-facing label used in progress lines.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Dates => "dates (check-in/check-out or nights)",
            Self::Guests => "number of guests",
        }
    }
}

impl fmt::Display for MissingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Required fields absent from `snapshot`, in [`MissingField::ALL`] order.
///
/// `None` means no booking exists yet, so everything is missing.
#[must_use]
pub fn missing(snapshot: Option<&BookingSnapshot>) -> Vec<MissingField> {
    let Some(snapshot) = snapshot else {
        return MissingField::ALL.to_vec();
    };

    let mut fields = Vec::with_capacity(3);
    if snapshot.trimmed_guest_name().is_none() {
        fields.push(MissingField::Name);
    }
    if !has_date_range(snapshot) {
        fields.push(MissingField::Dates);
    }
    if snapshot.positive_guests().is_none() {
        fields.push(MissingField::Guests);
    }
    fields
}

/// Whether every required field is present.
#[must_use]
pub fn is_complete(snapshot: &BookingSnapshot) -> bool {
    missing(Some(snapshot)).is_empty()
}

/// Join field labels for display, e.g. `name, number of guests`.
#[must_use]
pub fn join_labels(fields: &[MissingField]) -> String {
    fields
        .iter()
        .map(|field| field.label())
        .collect::<Vec<_>>()
        .join(", ")
}

fn has_date_range(snapshot: &BookingSnapshot) -> bool {
    snapshot.checkin.is_some()
        && (snapshot.checkout.is_some() || snapshot.positive_nights().is_some())
}
