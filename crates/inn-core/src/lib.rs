//! # inn-core
//!
//! Core types for the innkeep booking chat client.
//!
//! This crate provides the foundational types shared across all innkeep crates:
//! - Booking snapshots as interpreted by the server, plus identity derivation
//! - The missing-field evaluator used to decide what to ask for next
//! - The confirmation detector that normalizes the server's confirmed flag
//! - Summary slots and keys used by the transcript reconciler
//! - Tolerant adapters for loosely typed snapshot fields
//! - Wire request/response envelopes for the booking server
//! - Cross-cutting error types

pub mod booking;
pub mod completeness;
pub mod confirmation;
pub mod errors;
pub mod lenient;
pub mod slot;
pub mod wire;

pub use booking::{BookingId, BookingSnapshot, Identity, Timestamp};
pub use completeness::{MissingField, is_complete, missing};
pub use confirmation::is_confirmed;
pub use errors::CoreError;
pub use slot::{Slot, SummaryKey};
