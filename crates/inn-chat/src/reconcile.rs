//! Summary reconciliation.
//!
//! An upsert keyed by `(identity, slot)` either replaces the existing summary
//! node in place or creates one according to the slot's placement policy:
//! live summaries pin under the first bot message, final summaries append.
//! Applying the same snapshot twice leaves exactly one node with the same
//! content, so out-of-order responses cannot duplicate summaries.

use inn_core::{BookingSnapshot, Slot};
use serde::Serialize;

use crate::summary::{SummaryCard, SummaryStyle};
use crate::transcript::{Author, InsertAt, Transcript};

/// Which rule placed the summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Placement {
    /// A node already existed for the key and was swapped in place.
    Replaced,
    /// New live summary directly after the first bot message.
    Pinned,
    /// New node at the end of the conversation.
    Appended,
}

/// Insert or replace the `slot` summary for `snapshot`'s identity.
pub fn upsert(
    transcript: &mut Transcript,
    slot: Slot,
    snapshot: &BookingSnapshot,
    style: &SummaryStyle,
) -> Placement {
    let card = SummaryCard::build(slot, snapshot, style);
    let key = card.key.clone();

    let placement = if transcript.replace_summary(card.clone()) {
        Placement::Replaced
    } else {
        match (slot, transcript.first_message_by(Author::Bot)) {
            (Slot::Live, Some(anchor)) => {
                transcript.insert_summary(card, InsertAt::After(anchor));
                Placement::Pinned
            }
            (Slot::Live, None) | (Slot::Final, _) => {
                transcript.insert_summary(card, InsertAt::End);
                Placement::Appended
            }
        }
    };

    transcript.follow_tail();
    tracing::debug!(
        identity = %key.identity,
        slot = %key.slot,
        placement = ?placement,
        "summary upserted"
    );
    placement
}

#[cfg(test)]
mod tests {
    use inn_core::{Identity, SummaryKey};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::transcript::Node;

    fn snapshot(value: serde_json::Value) -> BookingSnapshot {
        serde_json::from_value(value).expect("snapshot should deserialize")
    }

    fn key(identity: &str, slot: Slot) -> SummaryKey {
        SummaryKey::new(Identity::from(identity), slot)
    }

    #[test]
    fn same_key_twice_yields_one_node_with_latest_content() {
        let mut transcript = Transcript::new();
        let style = SummaryStyle::default();

        upsert(&mut transcript, Slot::Live, &snapshot(json!({"id": 1, "guest_name": "Jane"})), &style);
        let second = upsert(
            &mut transcript,
            Slot::Live,
            &snapshot(json!({"id": 1, "guest_name": "Janet"})),
            &style,
        );

        assert_eq!(second, Placement::Replaced);
        assert_eq!(transcript.summary_count(), 1);
        let summaries = transcript
            .iter()
            .filter(|(_, node)| matches!(node, Node::Summary(_)))
            .count();
        assert_eq!(summaries, 1);
        assert_eq!(
            transcript.summary(&key("1", Slot::Live)).and_then(|c| c.value("Name")),
            Some("Janet")
        );
    }

    #[test]
    fn different_identities_coexist() {
        let mut transcript = Transcript::new();
        let style = SummaryStyle::default();

        upsert(&mut transcript, Slot::Live, &snapshot(json!({"id": 1})), &style);
        let placement = upsert(&mut transcript, Slot::Live, &snapshot(json!({"id": 2})), &style);

        assert_eq!(placement, Placement::Appended);
        assert_eq!(transcript.summary_count(), 2);
        assert!(transcript.summary(&key("1", Slot::Live)).is_some());
        assert!(transcript.summary(&key("2", Slot::Live)).is_some());
    }

    #[test]
    fn live_pins_under_first_bot_message() {
        let mut transcript = Transcript::new();
        transcript.push_message(Author::Bot, "greeting");
        transcript.push_message(Author::User, "book a room");
        transcript.push_message(Author::Bot, "sure");

        let placement = upsert(
            &mut transcript,
            Slot::Live,
            &snapshot(json!({"session_id": "s"})),
            &SummaryStyle::default(),
        );

        assert_eq!(placement, Placement::Pinned);
        let id = transcript.summary_node(&key("s", Slot::Live)).expect("node");
        assert_eq!(transcript.position(id), Some(1));
    }

    #[test]
    fn live_appends_without_bot_message() {
        let mut transcript = Transcript::new();
        transcript.push_message(Author::User, "hi");
        let placement = upsert(&mut transcript, Slot::Live, &snapshot(json!({})), &SummaryStyle::default());
        assert_eq!(placement, Placement::Appended);
        let id = transcript.summary_node(&key("booking", Slot::Live)).expect("node");
        assert_eq!(transcript.position(id), Some(1));
    }

    #[test]
    fn final_appends_after_triggering_reply() {
        let mut transcript = Transcript::new();
        let style = SummaryStyle::default();
        transcript.push_message(Author::Bot, "greeting");
        let booking = snapshot(json!({"id": 5, "confirmed": true}));
        upsert(&mut transcript, Slot::Live, &booking, &style);
        transcript.push_message(Author::Bot, "Your booking is confirmed.");

        let placement = upsert(&mut transcript, Slot::Final, &booking, &style);

        assert_eq!(placement, Placement::Appended);
        assert!(matches!(transcript.last(), Some(Node::Summary(card)) if card.key.slot == Slot::Final));
        assert_eq!(transcript.summary_count(), 2);
    }

    #[test]
    fn upsert_follows_tail() {
        let mut transcript = Transcript::new();
        transcript.scroll_up(4);
        upsert(&mut transcript, Slot::Live, &snapshot(json!({})), &SummaryStyle::default());
        assert!(transcript.viewport().is_following());
    }
}
