//! Turn lifecycle.
//!
//! ```text
//! idle → sending → awaiting → resolved → idle
//!                ↘          ↘ failed   → idle
//! ```
//!
//! Several turns may be in flight at once; each has its own state machine.

use std::fmt;

use inn_core::{Identity, MissingField};
use serde::Serialize;

use crate::error::ChatError;

/// Monotonic per-controller turn number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct TurnId(pub(crate) u64);

impl fmt::Display for TurnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "turn-{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnState {
    Idle,
    Sending,
    Awaiting,
    Resolved,
    Failed,
}

impl TurnState {
    /// Valid next states from the current state.
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Idle => &[Self::Sending],
            Self::Sending => &[Self::Awaiting, Self::Failed],
            Self::Awaiting => &[Self::Resolved, Self::Failed],
            Self::Resolved | Self::Failed => &[Self::Idle],
        }
    }

    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Sending => "sending",
            Self::Awaiting => "awaiting",
            Self::Resolved => "resolved",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for TurnState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One submission and its state.
#[derive(Debug, Clone)]
pub(crate) struct Turn {
    pub(crate) id: TurnId,
    pub(crate) state: TurnState,
}

impl Turn {
    /// A freshly submitted turn, already past `Idle`.
    pub(crate) fn sending(id: TurnId) -> Self {
        tracing::trace!(turn = %id, to = %TurnState::Sending, "turn transition");
        Self {
            id,
            state: TurnState::Sending,
        }
    }

    pub(crate) fn advance(&mut self, next: TurnState) -> Result<(), ChatError> {
        if !self.state.can_transition_to(next) {
            return Err(ChatError::InvalidTransition {
                turn: self.id,
                from: self.state,
                to: next,
            });
        }
        tracing::trace!(turn = %self.id, from = %self.state, to = %next, "turn transition");
        self.state = next;
        Ok(())
    }
}

/// What a resolved turn did with the server's response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum TurnOutcome {
    /// Snapshot confirmed; live and final summaries upserted.
    Confirmed { identity: Identity },
    /// Server declared every required field present; no progress line.
    ServerComplete,
    /// Progress line rendered for the listed missing fields.
    Progress { missing: Vec<MissingField> },
    /// Response had no booking snapshot.
    NoBooking,
}

/// Terminal state of a completed turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum TurnResolution {
    Resolved { outcome: TurnOutcome },
    Failed,
}
