//! Message input buffer.
//!
//! Enter with no modifier held submits without inserting a newline; Enter
//! with any modifier inserts one. Key types are terminal-agnostic so the
//! front-end maps its own key events onto them.

use crate::placeholder::Placeholder;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Backspace,
    Char(char),
    Other,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
        alt: false,
    };

    #[must_use]
    pub const fn any(self) -> bool {
        self.shift || self.ctrl || self.alt
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyPress {
    #[must_use]
    pub const fn plain(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::NONE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComposerAction {
    /// The key did nothing to the buffer.
    Ignored,
    /// The buffer changed.
    Edited,
    /// Submit the current buffer. The buffer is left intact; the controller
    /// clears it once the submission is accepted.
    Submit(String),
}

#[derive(Debug, Clone, Default)]
pub struct Composer {
    buffer: String,
    placeholder: Placeholder,
}

impl Composer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_key(&mut self, press: KeyPress) -> ComposerAction {
        match press.key {
            Key::Enter if !press.modifiers.any() => ComposerAction::Submit(self.buffer.clone()),
            Key::Enter => {
                self.buffer.push('\n');
                ComposerAction::Edited
            }
            Key::Backspace => {
                if self.buffer.pop().is_some() {
                    ComposerAction::Edited
                } else {
                    ComposerAction::Ignored
                }
            }
            Key::Char(c) if !press.modifiers.ctrl && !press.modifiers.alt => {
                self.buffer.push(c);
                ComposerAction::Edited
            }
            Key::Char(_) | Key::Other => ComposerAction::Ignored,
        }
    }

    #[must_use]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    #[must_use]
    pub const fn placeholder(&self) -> Placeholder {
        self.placeholder
    }

    pub const fn set_placeholder(&mut self, placeholder: Placeholder) {
        self.placeholder = placeholder;
    }

    /// Placeholder text to draw, only while the buffer is empty.
    #[must_use]
    pub fn visible_placeholder(&self) -> Option<&'static str> {
        self.buffer.is_empty().then(|| self.placeholder.text())
    }
}
