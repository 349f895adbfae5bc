//! Rendered booking summaries.

use inn_core::booking::DEFAULT_DATE_FORMAT;
use inn_core::{BookingSnapshot, Slot, SummaryKey, Timestamp};
use serde::Serialize;

/// Shown for any field the snapshot does not carry.
pub const ABSENT: &str = "-";

/// Presentation settings for summaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryStyle {
    /// chrono strftime pattern for check-in/check-out.
    pub date_format: String,
}

impl Default for SummaryStyle {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryField {
    pub label: &'static str,
    pub value: String,
}

/// One booking summary as it appears in the transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryCard {
    pub key: SummaryKey,
    pub title: String,
    pub fields: Vec<SummaryField>,
}

impl SummaryCard {
    /// Render `snapshot` for `slot`. Only this snapshot's fields are used.
    #[must_use]
    pub fn build(slot: Slot, snapshot: &BookingSnapshot, style: &SummaryStyle) -> Self {
        let identity = snapshot.identity();
        let title = match slot {
            Slot::Live => String::from("Booking in progress"),
            Slot::Final => String::from("Booking confirmed"),
        };

        let mut fields = vec![
            field("Booking", Some(identity.to_string())),
            field("Name", snapshot.guest_name.clone()),
            field("Check-in", date(snapshot.checkin.as_ref(), style)),
            field("Check-out", date(snapshot.checkout.as_ref(), style)),
            field("Nights", snapshot.nights.map(|n| n.to_string())),
            field("Guests", snapshot.guests.map(|n| n.to_string())),
            field("Breakfast", snapshot.breakfast.clone()),
            field("Payment", snapshot.payment_method.clone()),
        ];
        if slot == Slot::Final {
            fields.push(field("Notes", snapshot.notes.as_deref().map(flatten_notes)));
        }

        Self {
            key: SummaryKey::new(identity, slot),
            title,
            fields,
        }
    }

    /// Value of the field labelled `label`.
    #[must_use]
    pub fn value(&self, label: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|field| field.label == label)
            .map(|field| field.value.as_str())
    }
}

fn field(label: &'static str, value: Option<String>) -> SummaryField {
    let value = value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| ABSENT.to_string());
    SummaryField { label, value }
}

fn date(timestamp: Option<&Timestamp>, style: &SummaryStyle) -> Option<String> {
    timestamp.map(|ts| ts.display(&style.date_format))
}

fn flatten_notes(notes: &str) -> String {
    notes
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("; ")
}
