//! crossterm key events to chat input.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use inn_chat::composer::{Key, KeyPress, Modifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Compose(KeyPress),
    ScrollUp,
    ScrollDown,
    Quit,
    Ignore,
}

#[must_use]
pub fn translate(event: KeyEvent) -> Input {
    if event.kind == KeyEventKind::Release {
        return Input::Ignore;
    }

    let modifiers = Modifiers {
        shift: event.modifiers.contains(KeyModifiers::SHIFT),
        ctrl: event.modifiers.contains(KeyModifiers::CONTROL),
        alt: event.modifiers.contains(KeyModifiers::ALT),
    };

    let key = match event.code {
        KeyCode::Esc => return Input::Quit,
        KeyCode::Char('c' | 'd') if modifiers.ctrl => return Input::Quit,
        KeyCode::PageUp => return Input::ScrollUp,
        KeyCode::PageDown => return Input::ScrollDown,
        // Some terminals report Ctrl+J for Ctrl+Enter.
        KeyCode::Char('j') if modifiers.ctrl => {
            return Input::Compose(KeyPress {
                key: Key::Enter,
                modifiers,
            });
        }
        KeyCode::Enter => Key::Enter,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Tab => Key::Char(' '),
        KeyCode::Char(c) => Key::Char(c),
        _ => Key::Other,
    };

    Input::Compose(KeyPress { key, modifiers })
}
