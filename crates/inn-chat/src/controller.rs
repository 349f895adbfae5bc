//! Conversation controller.
//!
//! The controller owns the transcript and composer and drives each turn's
//! state machine. It never performs I/O itself except in
//! [`Controller::exchange`]; interactive front-ends call [`Controller::submit`],
//! send the returned [`Outbound`] however they like, and hand the result back
//! to [`Controller::complete`]. Completions may arrive in any order; each is
//! applied against its own identity with last-write-wins semantics.

use std::collections::BTreeMap;

use inn_core::completeness::join_labels;
use inn_core::wire::{MessageRequest, MessageResponse};
use inn_core::{BookingId, Slot, missing};

use crate::command::{Command, HELP_TEXT};
use crate::composer::Composer;
use crate::error::{ChatError, TransportError};
use crate::placeholder::Placeholder;
use crate::reconcile;
use crate::summary::SummaryStyle;
use crate::transcript::{Author, Transcript};
use crate::transport::{Outbound, Transport};
use crate::turn::{Turn, TurnId, TurnOutcome, TurnResolution, TurnState};

/// Bot bubble shown when a round trip fails.
pub const APOLOGY: &str = "Sorry — I couldn't reach the server. Try again.";

/// Progress line when nothing required is missing.
pub const ALL_PRESENT: &str = "All required fields are present.";

const NO_BOOKING_YET: &str = "There is no booking yet. Tell me your name, dates and guests first, \
or pass a booking number.";

#[derive(Debug, Clone, Default)]
pub struct ControllerSettings {
    /// First bot message. Empty skips it.
    pub greeting: String,
    pub style: SummaryStyle,
}

/// Result of submitting composer input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Blank input; nothing happened.
    Ignored,
    /// Handled locally (help, invalid command); no request needed.
    Local,
    /// The user asked to leave.
    Quit,
    /// A request must be sent; report back via [`Controller::complete`].
    Dispatch(PendingTurn),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingTurn {
    pub id: TurnId,
    pub outbound: Outbound,
}

#[derive(Debug)]
pub struct Controller {
    session_id: String,
    transcript: Transcript,
    composer: Composer,
    style: SummaryStyle,
    turns: BTreeMap<TurnId, Turn>,
    next_turn: u64,
    newest_completed: Option<TurnId>,
    last_booking_id: Option<u64>,
}

impl Controller {
    #[must_use]
    pub fn new(session_id: impl Into<String>, settings: ControllerSettings) -> Self {
        let mut transcript = Transcript::new();
        if !settings.greeting.trim().is_empty() {
            transcript.push_message(Author::Bot, settings.greeting);
        }
        Self {
            session_id: session_id.into(),
            transcript,
            composer: Composer::new(),
            style: settings.style,
            turns: BTreeMap::new(),
            next_turn: 0,
            newest_completed: None,
            last_booking_id: None,
        }
    }

    #[must_use]
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    #[must_use]
    pub const fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub const fn transcript_mut(&mut self) -> &mut Transcript {
        &mut self.transcript
    }

    #[must_use]
    pub const fn composer(&self) -> &Composer {
        &self.composer
    }

    pub const fn composer_mut(&mut self) -> &mut Composer {
        &mut self.composer
    }

    /// Number of turns waiting for a response.
    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.turns.len()
    }

    /// State of the most recent unfinished turn, or idle.
    #[must_use]
    pub fn state(&self) -> TurnState {
        self.turns
            .values()
            .next_back()
            .map_or(TurnState::Idle, |turn| turn.state)
    }

    /// Latest numeric booking id seen in a snapshot.
    #[must_use]
    pub const fn last_booking_id(&self) -> Option<u64> {
        self.last_booking_id
    }

    /// Accept composer input.
    ///
    /// Non-blank input is echoed as a user bubble and the composer is cleared.
    /// Requests also get a typing bubble and a new turn in `sending`.
    pub fn submit(&mut self, input: &str) -> Submission {
        let Some(command) = Command::parse(input) else {
            return Submission::Ignored;
        };

        if command == Command::Quit {
            self.composer.clear();
            return Submission::Quit;
        }

        self.transcript.push_message(Author::User, input.trim());
        self.composer.clear();

        let outbound = match command {
            Command::Say(message) => Outbound::Message(MessageRequest {
                message,
                session_id: self.session_id.clone(),
            }),
            Command::ShowBooking(id) => match id.or(self.last_booking_id) {
                Some(id) => Outbound::FetchBooking(id),
                None => return self.reply_locally(NO_BOOKING_YET),
            },
            Command::ConfirmBooking(id) => match id.or(self.last_booking_id) {
                Some(id) => Outbound::ConfirmBooking(id),
                None => return self.reply_locally(NO_BOOKING_YET),
            },
            Command::Help => return self.reply_locally(HELP_TEXT),
            Command::Invalid(reason) => return self.reply_locally(&reason),
            Command::Quit => return Submission::Quit,
        };

        self.transcript.push_typing();
        self.next_turn += 1;
        let id = TurnId(self.next_turn);
        self.turns.insert(id, Turn::sending(id));
        tracing::debug!(turn = %id, in_flight = self.turns.len(), "turn submitted");

        Submission::Dispatch(PendingTurn { id, outbound })
    }

    /// Record that the request for `id` has been issued.
    ///
    /// # Errors
    ///
    /// [`ChatError::UnknownTurn`] if `id` is not in flight, or
    /// [`ChatError::InvalidTransition`] if it was already marked.
    pub fn dispatched(&mut self, id: TurnId) -> Result<(), ChatError> {
        self.turns
            .get_mut(&id)
            .ok_or(ChatError::UnknownTurn(id))?
            .advance(TurnState::Awaiting)
    }

    /// Apply the outcome of the round trip for `id`.
    ///
    /// # Errors
    ///
    /// [`ChatError::UnknownTurn`] if `id` is not in flight. The transcript is
    /// left untouched in that case.
    pub fn complete(
        &mut self,
        id: TurnId,
        result: Result<MessageResponse, TransportError>,
    ) -> Result<TurnResolution, ChatError> {
        let mut turn = self.turns.remove(&id).ok_or(ChatError::UnknownTurn(id))?;
        if turn.state == TurnState::Sending {
            turn.advance(TurnState::Awaiting)?;
        }

        if let Some(newest) = self.newest_completed
            && id < newest
        {
            tracing::debug!(turn = %id, newer = %newest, "applying response that arrived out of order");
        }
        self.newest_completed = self.newest_completed.max(Some(id));

        self.transcript.remove_typing();
        self.transcript.clear_progress();

        let resolution = match result {
            Ok(response) => {
                turn.advance(TurnState::Resolved)?;
                let outcome = self.apply_response(&response);
                tracing::debug!(turn = %id, ?outcome, "turn resolved");
                TurnResolution::Resolved { outcome }
            }
            Err(error) => {
                turn.advance(TurnState::Failed)?;
                tracing::warn!(turn = %id, %error, "turn failed");
                self.transcript.push_message(Author::Bot, APOLOGY);
                self.composer.set_placeholder(Placeholder::Default);
                TurnResolution::Failed
            }
        };

        turn.advance(TurnState::Idle)?;
        Ok(resolution)
    }

    /// Submit, send through `transport` and apply the response in one go.
    ///
    /// Returns `None` when the input did not need a request.
    ///
    /// # Errors
    ///
    /// Only turn bookkeeping errors; transport failures are rendered into the
    /// transcript and reported as [`TurnResolution::Failed`].
    pub async fn exchange<T: Transport>(
        &mut self,
        transport: &T,
        input: &str,
    ) -> Result<Option<TurnResolution>, ChatError> {
        let Submission::Dispatch(pending) = self.submit(input) else {
            return Ok(None);
        };
        self.dispatched(pending.id)?;
        let result = pending.outbound.dispatch(transport).await;
        self.complete(pending.id, result).map(Some)
    }

    fn reply_locally(&mut self, text: &str) -> Submission {
        self.transcript.push_message(Author::Bot, text);
        Submission::Local
    }

    fn apply_response(&mut self, response: &MessageResponse) -> TurnOutcome {
        if let Some(reply) = response.reply_text() {
            self.transcript.push_message(Author::Bot, reply);
        }

        let Some(snapshot) = response.booking.as_ref() else {
            self.composer.set_placeholder(Placeholder::Default);
            return TurnOutcome::NoBooking;
        };

        if let Some(id) = snapshot.id.as_ref().and_then(BookingId::as_route_id) {
            self.last_booking_id = Some(id);
        }

        reconcile::upsert(&mut self.transcript, Slot::Live, snapshot, &self.style);

        if snapshot.confirmed {
            reconcile::upsert(&mut self.transcript, Slot::Final, snapshot, &self.style);
            self.composer.set_placeholder(Placeholder::Default);
            return TurnOutcome::Confirmed {
                identity: snapshot.identity(),
            };
        }

        if response.server_declares_complete() {
            self.composer.set_placeholder(Placeholder::Default);
            return TurnOutcome::ServerComplete;
        }

        let missing = missing(Some(snapshot));
        let line = if missing.is_empty() {
            ALL_PRESENT.to_string()
        } else {
            format!("Waiting for: {}", join_labels(&missing))
        };
        self.transcript.set_progress(line);
        self.composer.set_placeholder(Placeholder::for_missing(&missing));
        TurnOutcome::Progress { missing }
    }
}
