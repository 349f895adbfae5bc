//! Message handling for the full-screen chat.
//!
//! Pure state transitions over the controller; the event loop performs the
//! effects.

use crossterm::event::KeyEvent;
use inn_chat::composer::ComposerAction;
use inn_chat::{Controller, PendingTurn, Submission, TransportError, TurnId};
use inn_core::wire::MessageResponse;
use ratatui::layout::Size;

use super::keys::{Input, translate};
use super::screen;

#[derive(Debug)]
pub enum UiMsg {
    Key(KeyEvent),
    Resize(u16, u16),
    Reply {
        turn: TurnId,
        result: Result<MessageResponse, TransportError>,
    },
}

#[derive(Debug, PartialEq, Eq)]
pub enum Effect {
    Redraw,
    Dispatch(PendingTurn),
    Quit,
    Nothing,
}

pub fn update(controller: &mut Controller, size: &mut Size, msg: UiMsg) -> Effect {
    match msg {
        UiMsg::Key(event) => handle_input(controller, *size, translate(event)),
        UiMsg::Resize(width, height) => {
            *size = Size::new(width, height);
            Effect::Redraw
        }
        UiMsg::Reply { turn, result } => {
            if let Err(error) = controller.complete(turn, result) {
                tracing::warn!(%error, "dropping completion");
                return Effect::Nothing;
            }
            Effect::Redraw
        }
    }
}

fn handle_input(controller: &mut Controller, size: Size, input: Input) -> Effect {
    match input {
        Input::Quit => Effect::Quit,
        Input::Ignore => Effect::Nothing,
        Input::ScrollUp => {
            let max = screen::max_scroll(controller, size);
            let page = screen::page(size);
            let transcript = controller.transcript_mut();
            let target = (transcript.viewport().offset() + page).min(max);
            transcript.scroll_down(transcript.viewport().offset());
            transcript.scroll_up(target);
            Effect::Redraw
        }
        Input::ScrollDown => {
            controller.transcript_mut().scroll_down(screen::page(size));
            Effect::Redraw
        }
        Input::Compose(press) => match controller.composer_mut().handle_key(press) {
            ComposerAction::Ignored => Effect::Nothing,
            ComposerAction::Edited => Effect::Redraw,
            ComposerAction::Submit(text) => match controller.submit(&text) {
                Submission::Ignored => Effect::Nothing,
                Submission::Local => Effect::Redraw,
                Submission::Quit => Effect::Quit,
                Submission::Dispatch(pending) => Effect::Dispatch(pending),
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyModifiers};
    use inn_chat::ControllerSettings;
    use inn_chat::transcript::Node;
    use pretty_assertions::assert_eq;

    use super::*;

    fn key(code: KeyCode) -> UiMsg {
        UiMsg::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(controller: &mut Controller, size: &mut Size, text: &str) {
        for c in text.chars() {
            update(controller, size, key(KeyCode::Char(c)));
        }
    }

    fn controller() -> Controller {
        Controller::new(
            "s",
            ControllerSettings {
                greeting: String::from("Hello"),
                ..ControllerSettings::default()
            },
        )
    }

    #[test]
    fn enter_dispatches_typed_message() {
        let mut c = controller();
        let mut size = Size::new(80, 24);
        type_text(&mut c, &mut size, "hi");

        let effect = update(&mut c, &mut size, key(KeyCode::Enter));

        assert!(matches!(effect, Effect::Dispatch(_)));
        assert_eq!(c.composer().buffer(), "");
        assert!(matches!(c.transcript().last(), Some(Node::Typing)));
    }

    #[test]
    fn shift_enter_inserts_newline() {
        let mut c = controller();
        let mut size = Size::new(80, 24);
        type_text(&mut c, &mut size, "a");

        let effect = update(
            &mut c,
            &mut size,
            UiMsg::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::SHIFT)),
        );

        assert_eq!(effect, Effect::Redraw);
        assert_eq!(c.composer().buffer(), "a\n");
        assert_eq!(c.in_flight(), 0);
    }

    #[test]
    fn reply_is_applied_and_redraws() {
        let mut c = controller();
        let mut size = Size::new(80, 24);
        type_text(&mut c, &mut size, "hi");
        let Effect::Dispatch(pending) = update(&mut c, &mut size, key(KeyCode::Enter)) else {
            panic!("expected dispatch");
        };
        c.dispatched(pending.id).expect("dispatch");

        let effect = update(
            &mut c,
            &mut size,
            UiMsg::Reply {
                turn: pending.id,
                result: Ok(MessageResponse {
                    reply: Some(String::from("Hello there")),
                    ..MessageResponse::default()
                }),
            },
        );

        assert_eq!(effect, Effect::Redraw);
        assert_eq!(c.in_flight(), 0);
    }

    #[test]
    fn duplicate_reply_is_dropped() {
        let mut c = controller();
        let mut size = Size::new(80, 24);
        type_text(&mut c, &mut size, "hi");
        let Effect::Dispatch(pending) = update(&mut c, &mut size, key(KeyCode::Enter)) else {
            panic!("expected dispatch");
        };
        let reply = || UiMsg::Reply {
            turn: pending.id,
            result: Err(TransportError::Network(String::from("reset"))),
        };

        assert_eq!(update(&mut c, &mut size, reply()), Effect::Redraw);
        assert_eq!(update(&mut c, &mut size, reply()), Effect::Nothing);
    }

    #[test]
    fn scrolling_stops_at_the_top() {
        let mut c = controller();
        let mut size = Size::new(40, 6);
        for n in 0..10 {
            c.transcript_mut()
                .push_message(inn_chat::transcript::Author::Bot, format!("line {n}"));
        }

        for _ in 0..10 {
            update(&mut c, &mut size, key(KeyCode::PageUp));
        }
        let max = screen::max_scroll(&c, size);
        assert_eq!(max, 7);
        assert_eq!(c.transcript().viewport().offset(), max);

        update(&mut c, &mut size, key(KeyCode::PageDown));
        assert_eq!(c.transcript().viewport().offset(), max - screen::page(size));
    }

    #[test]
    fn escape_quits_and_resize_relayouts() {
        let mut c = controller();
        let mut size = Size::new(80, 24);
        assert_eq!(update(&mut c, &mut size, key(KeyCode::Esc)), Effect::Quit);
        assert_eq!(update(&mut c, &mut size, UiMsg::Resize(100, 30)), Effect::Redraw);
        assert_eq!(size, Size::new(100, 30));
    }
}
