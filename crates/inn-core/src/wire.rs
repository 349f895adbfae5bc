//! Request and response envelopes exchanged with the booking server.
//!
//! Every response field is optional: the client must cope with any subset
//! being absent.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::booking::BookingSnapshot;

/// Response from `POST /api/session`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionResponse {
    pub session_id: String,
}

/// Body of `POST /api/message`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRequest {
    pub message: String,
    pub session_id: String,
}

/// Response from `POST /api/message` and `POST /api/booking/<id>/confirm`.
///
/// `GET /api/booking/<id>` returns the same shape with only `booking` set.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub reply: Option<String>,
    #[serde(default)]
    pub booking: Option<BookingSnapshot>,
    /// Kept raw: only an explicit JSON `true` has meaning.
    #[serde(default)]
    pub all_required_present: Option<Value>,
}

impl MessageResponse {
    /// Whether the server explicitly declared every required field present.
    #[must_use]
    pub fn server_declares_complete(&self) -> bool {
        matches!(self.all_required_present, Some(Value::Bool(true)))
    }

    /// Reply text worth rendering, if any.
    #[must_use]
    pub fn reply_text(&self) -> Option<&str> {
        self.reply.as_deref().filter(|reply| !reply.is_empty())
    }
}

/// Error body the server sends with 4xx statuses.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn empty_object_is_a_valid_response() {
        let response: MessageResponse = serde_json::from_value(json!({})).expect("parse");
        assert_eq!(response, MessageResponse::default());
    }

    #[test]
    fn null_booking_is_no_booking() {
        let response: MessageResponse =
            serde_json::from_value(json!({"reply": "hi", "booking": null})).expect("parse");
        assert!(response.booking.is_none());
        assert_eq!(response.reply_text(), Some("hi"));
    }

    #[test]
    fn only_boolean_true_declares_complete() {
        for (flag, expected) in [
            (json!(true), true),
            (json!(false), false),
            (json!("true"), false),
            (json!(1), false),
            (json!(null), false),
        ] {
            let response: MessageResponse =
                serde_json::from_value(json!({"all_required_present": flag})).expect("parse");
            assert_eq!(response.server_declares_complete(), expected);
        }
    }

    #[test]
    fn empty_reply_is_not_rendered() {
        let response: MessageResponse =
            serde_json::from_value(json!({"reply": ""})).expect("parse");
        assert_eq!(response.reply_text(), None);
    }
}
