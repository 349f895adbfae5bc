//! # inn-client
//!
//! HTTP client for the innkeep booking server.
//!
//! Four endpoints, all JSON:
//! - `POST /api/session` issues a session id
//! - `POST /api/message` interprets one chat message
//! - `GET /api/booking/{id}` looks up a booking
//! - `POST /api/booking/{id}/confirm` confirms a booking
//!
//! [`BookingClient`] implements [`inn_chat::Transport`] so the chat controller
//! can drive it without knowing about HTTP.

mod error;
mod http;

pub use error::ClientError;

use inn_chat::{Transport, TransportError};
use inn_core::wire::{MessageRequest, MessageResponse, SessionResponse};
use url::Url;

use crate::http::{check_response, decode};

const USER_AGENT: &str = concat!("innkeep/", env!("CARGO_PKG_VERSION"));

/// HTTP client bound to one booking server.
#[derive(Debug, Clone)]
pub struct BookingClient {
    http: reqwest::Client,
    base: Url,
}

impl BookingClient {
    /// Create a client for the server at `base`.
    ///
    /// A path prefix on `base` is kept: `http://host/hotel` talks to
    /// `http://host/hotel/api/...`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client`
    /// cannot be built.
    pub fn new(mut base: Url) -> Result<Self, ClientError> {
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { http, base })
    }

    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base
    }

    /// Request a fresh session id.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on network failure, non-success status, or an
    /// unparsable body.
    pub async fn create_session(&self) -> Result<SessionResponse, ClientError> {
        let url = self.endpoint("api/session")?;
        tracing::debug!(%url, "creating session");
        let resp = self
            .http
            .post(url)
            .json(&serde_json::json!({}))
            .send()
            .await?;
        decode(check_response(resp).await?).await
    }

    /// Send one chat message.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on network failure, non-success status, or an
    /// unparsable body.
    pub async fn send_message(
        &self,
        request: &MessageRequest,
    ) -> Result<MessageResponse, ClientError> {
        let url = self.endpoint("api/message")?;
        tracing::debug!(%url, session = %request.session_id, "sending message");
        let resp = self.http.post(url).json(request).send().await?;
        decode(check_response(resp).await?).await
    }

    /// Look up a booking by id.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Api`] with status 404 for unknown bookings.
    pub async fn fetch_booking(&self, booking_id: u64) -> Result<MessageResponse, ClientError> {
        let url = self.booking_endpoint(booking_id, None)?;
        tracing::debug!(%url, booking_id, "fetching booking");
        let resp = self.http.get(url).send().await?;
        decode(check_response(resp).await?).await
    }

    /// Confirm a booking by id.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Api`] with status 400 when required fields are
    /// missing, or 404 for unknown bookings.
    pub async fn confirm_booking(&self, booking_id: u64) -> Result<MessageResponse, ClientError> {
        let url = self.booking_endpoint(booking_id, Some("confirm"))?;
        tracing::debug!(%url, booking_id, "confirming booking");
        let resp = self
            .http
            .post(url)
            .json(&serde_json::json!({}))
            .send()
            .await?;
        decode(check_response(resp).await?).await
    }

    fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        self.base
            .join(path)
            .map_err(|e| ClientError::InvalidUrl(format!("{path}: {e}")))
    }

    fn booking_endpoint(&self, booking_id: u64, action: Option<&str>) -> Result<Url, ClientError> {
        match action {
            Some(action) => self.endpoint(&format!("api/booking/{booking_id}/{action}")),
            None => self.endpoint(&format!("api/booking/{booking_id}")),
        }
    }
}

impl Transport for BookingClient {
    async fn create_session(&self) -> Result<String, TransportError> {
        Ok(Self::create_session(self).await?.session_id)
    }

    async fn send_message(&self, request: &MessageRequest) -> Result<MessageResponse, TransportError> {
        Ok(Self::send_message(self, request).await?)
    }

    async fn fetch_booking(&self, booking_id: u64) -> Result<MessageResponse, TransportError> {
        Ok(Self::fetch_booking(self, booking_id).await?)
    }

    async fn confirm_booking(&self, booking_id: u64) -> Result<MessageResponse, TransportError> {
        Ok(Self::confirm_booking(self, booking_id).await?)
    }
}
