//! Error types for the chat layer.

use thiserror::Error;

use crate::turn::{TurnId, TurnState};

/// A round trip to the booking server did not produce a usable response.
///
/// The controller recovers from every variant the same way; the distinction
/// only matters for logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// Connection refused, DNS failure, reset, etc.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },

    /// The body was not the expected JSON.
    #[error("malformed response: {0}")]
    Decode(String),
}

/// Misuse of the controller's turn bookkeeping.
#[derive(Debug, Error)]
pub enum ChatError {
    /// A completion arrived for a turn the controller never started or
    /// already finished.
    #[error("unknown turn {0}")]
    UnknownTurn(TurnId),

    /// A turn was driven through a transition its state machine forbids.
    #[error("invalid turn transition for {turn}: {from} -> {to}")]
    InvalidTransition {
        turn: TurnId,
        from: TurnState,
        to: TurnState,
    },
}
