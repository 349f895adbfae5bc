//! Cross-cutting error types for innkeep.
//!
//! Transport failures are defined in `inn-chat` where the transport seam
//! lives; HTTP-specific errors live in `inn-client`.

use thiserror::Error;

/// Errors that can be raised by any innkeep crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A booking reference typed by the user is not usable by the server.
    #[error("Invalid booking id '{0}': expected a positive integer")]
    InvalidBookingId(String),
}
