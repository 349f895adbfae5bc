//! Shared HTTP response helpers.
//!
//! Centralizes status-code checks and body decoding so the endpoint methods
//! stay focused on request construction.

use inn_core::wire::ErrorResponse;
use serde::de::DeserializeOwned;

use crate::error::ClientError;

/// Return the response unchanged on success, or [`ClientError::Api`] with the
/// server's `error` message (falling back to the raw body).
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body = resp.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorResponse>(&body)
        .map(|error| error.error)
        .unwrap_or(body);
    tracing::warn!(status = status.as_u16(), %message, "booking server rejected request");
    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}

/// Decode a JSON body, reporting unparsable bodies as [`ClientError::Parse`].
pub async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ClientError> {
    let body = resp.text().await?;
    serde_json::from_str(&body).map_err(|error| ClientError::Parse(error.to_string()))
}
