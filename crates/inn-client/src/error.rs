//! Client error types.

use inn_chat::TransportError;
use thiserror::Error;

/// Errors that can occur when talking to the booking server.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the server.
        status: u16,
        /// `error` field of the body, or the raw body.
        message: String,
    },

    /// Failed to parse a server response.
    #[error("parse error: {0}")]
    Parse(String),

    /// An endpoint URL could not be built from the base URL.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}

impl From<ClientError> for TransportError {
    fn from(error: ClientError) -> Self {
        match error {
            ClientError::Http(error) => Self::Network(error.to_string()),
            ClientError::Api { status, message } => Self::Status { status, message },
            ClientError::Parse(message) => Self::Decode(message),
            ClientError::InvalidUrl(message) => Self::Network(message),
        }
    }
}
