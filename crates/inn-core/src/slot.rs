//! Summary slots and reconciliation keys.

use std::fmt;

use serde::Serialize;

use crate::booking::Identity;

/// Which of the two summaries of a booking an upsert targets.
///
/// ```text
/// live  → replaced on every snapshot, stays visible after confirmation
/// final → created on the first confirmed snapshot, replaced only by a later
///         confirmed snapshot
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    Live,
    Final,
}

impl Slot {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Live => "live",
            Self::Final => "final",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Address of exactly one rendered summary.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct SummaryKey {
    pub identity: Identity,
    pub slot: Slot,
}

impl SummaryKey {
    #[must_use]
    pub const fn new(identity: Identity, slot: Slot) -> Self {
        Self { identity, slot }
    }
}

impl fmt::Display for SummaryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.identity, self.slot)
    }
}
