//! # inn-chat
//!
//! Turn handling for the innkeep booking chat.
//!
//! - [`transcript`]: ordered node arena with a summary index keyed by
//!   `(identity, slot)` and a tail-following viewport
//! - [`reconcile`]: idempotent upsert of live/final booking summaries
//! - [`controller`]: per-turn state machine that applies server responses
//! - [`composer`]: input buffer, Enter handling and contextual placeholder
//! - [`transport`]: the seam to the booking server

pub mod command;
pub mod composer;
pub mod controller;
pub mod error;
pub mod placeholder;
pub mod reconcile;
pub mod summary;
pub mod transcript;
pub mod transport;
pub mod turn;

pub use controller::{APOLOGY, Controller, ControllerSettings, PendingTurn, Submission};
pub use error::{ChatError, TransportError};
pub use transport::{Outbound, Transport};
pub use turn::{TurnId, TurnOutcome, TurnResolution, TurnState};
