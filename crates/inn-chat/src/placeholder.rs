//! Input placeholder selection.

use inn_core::MissingField;

/// Text shown in the empty input field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Placeholder {
    #[default]
    Default,
    /// Exactly one required field is missing; ask for it specifically.
    Hint(MissingField),
}

impl Placeholder {
    /// A field hint when exactly one field is missing, the default otherwise.
    #[must_use]
    pub fn for_missing(fields: &[MissingField]) -> Self {
        match fields {
            [only] => Self::Hint(*only),
            _ => Self::Default,
        }
    }

    #[must_use]
    pub const fn text(self) -> &'static str {
        match self {
            Self::Default => "Type your message...",
            Self::Hint(MissingField::Name) => "Your name, e.g. Jane Smith",
            Self::Hint(MissingField::Dates) => {
                "Dates, e.g. June 10 to June 13, or June 10 for 3 nights"
            }
            Self::Hint(MissingField::Guests) => "Number of guests, e.g. 2",
        }
    }
}
