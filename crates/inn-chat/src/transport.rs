//! The seam between the controller and the booking server.

use std::future::Future;

use inn_core::wire::{MessageRequest, MessageResponse};

use crate::error::TransportError;

/// Booking server operations the chat needs.
///
/// Futures are `Send` so the terminal front-end can spawn requests and keep
/// handling keys while they are in flight.
pub trait Transport: Send + Sync {
    /// Issue a new opaque session id.
    fn create_session(&self) -> impl Future<Output = Result<String, TransportError>> + Send;

    /// Exchange one user message for the server's interpretation.
    fn send_message(
        &self,
        request: &MessageRequest,
    ) -> impl Future<Output = Result<MessageResponse, TransportError>> + Send;

    /// Look up a booking by id. The response carries only `booking`.
    fn fetch_booking(
        &self,
        booking_id: u64,
    ) -> impl Future<Output = Result<MessageResponse, TransportError>> + Send;

    /// Ask the server to confirm a booking by id.
    fn confirm_booking(
        &self,
        booking_id: u64,
    ) -> impl Future<Output = Result<MessageResponse, TransportError>> + Send;
}

/// A request produced by a submitted turn, ready to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outbound {
    Message(MessageRequest),
    FetchBooking(u64),
    ConfirmBooking(u64),
}

impl Outbound {
    /// Send this request through `transport`.
    ///
    /// # Errors
    ///
    /// Propagates the transport's [`TransportError`].
    pub async fn dispatch<T: Transport>(
        &self,
        transport: &T,
    ) -> Result<MessageResponse, TransportError> {
        match self {
            Self::Message(request) => transport.send_message(request).await,
            Self::FetchBooking(id) => transport.fetch_booking(*id).await,
            Self::ConfirmBooking(id) => transport.confirm_booking(*id).await,
        }
    }
}
