//! Slash commands typed into the composer.

use inn_core::BookingId;

pub const HELP_TEXT: &str = "Commands: /booking [id] shows a booking, /confirm [id] confirms it, \
/help shows this message, /quit leaves. Anything else is sent to the front desk.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Free text for the server to interpret.
    Say(String),
    /// Look up a booking; `None` means the latest one seen.
    ShowBooking(Option<u64>),
    /// Confirm a booking; `None` means the latest one seen.
    ConfirmBooking(Option<u64>),
    Help,
    Quit,
    /// A slash command that could not be understood; carries the reason.
    Invalid(String),
}

impl Command {
    /// Parse composer input. Blank input yields `None`.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }

        let Some(rest) = input.strip_prefix('/') else {
            return Some(Self::Say(input.to_string()));
        };

        let mut parts = rest.split_whitespace();
        let name = parts.next().unwrap_or_default();
        let argument = parts.next();
        if parts.next().is_some() {
            return Some(Self::Invalid(format!("Too many arguments for /{name}.")));
        }

        let command = match (name, argument) {
            ("booking", arg) => booking_ref(arg).map_or_else(Self::Invalid, Self::ShowBooking),
            ("confirm", arg) => booking_ref(arg).map_or_else(Self::Invalid, Self::ConfirmBooking),
            ("help", None) => Self::Help,
            ("quit" | "exit", None) => Self::Quit,
            ("help" | "quit" | "exit", Some(_)) => {
                Self::Invalid(format!("/{name} takes no arguments."))
            }
            _ => Self::Invalid(format!("Unknown command /{name}. Try /help.")),
        };
        Some(command)
    }
}

fn booking_ref(argument: Option<&str>) -> Result<Option<u64>, String> {
    argument
        .map(BookingId::parse_reference)
        .transpose()
        .map_err(|error| error.to_string())
}
