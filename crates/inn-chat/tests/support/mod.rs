//! Scripted in-memory transport for controller tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use inn_chat::{Outbound, Transport, TransportError};
use inn_core::wire::{MessageRequest, MessageResponse};

type Scripted = Result<MessageResponse, TransportError>;

#[derive(Default)]
pub struct ScriptedTransport {
    responses: Mutex<VecDeque<Scripted>>,
    sent: Mutex<Vec<Outbound>>,
}

impl ScriptedTransport {
    pub fn new(responses: impl IntoIterator<Item = Scripted>) -> Self {
        Self {
            responses: Mutex::new(responses.into_iter().collect()),
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn json(values: impl IntoIterator<Item = serde_json::Value>) -> Self {
        Self::new(values.into_iter().map(|value| {
            Ok(serde_json::from_value(value).expect("scripted response should deserialize"))
        }))
    }

    pub fn sent(&self) -> Vec<Outbound> {
        self.sent.lock().expect("lock").clone()
    }

    fn next(&self, outbound: Outbound) -> Scripted {
        self.sent.lock().expect("lock").push(outbound);
        self.responses
            .lock()
            .expect("lock")
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Network(String::from("script exhausted"))))
    }
}

impl Transport for ScriptedTransport {
    async fn create_session(&self) -> Result<String, TransportError> {
        Ok(String::from("scripted-session"))
    }

    async fn send_message(&self, request: &MessageRequest) -> Result<MessageResponse, TransportError> {
        self.next(Outbound::Message(request.clone()))
    }

    async fn fetch_booking(&self, booking_id: u64) -> Result<MessageResponse, TransportError> {
        self.next(Outbound::FetchBooking(booking_id))
    }

    async fn confirm_booking(&self, booking_id: u64) -> Result<MessageResponse, TransportError> {
        self.next(Outbound::ConfirmBooking(booking_id))
    }
}
