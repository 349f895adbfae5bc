//! Conversation presentation settings.

use serde::{Deserialize, Serialize};

fn default_greeting() -> String {
    String::from(
        "Hi! I can help you book a room. Tell me your name, your dates, and how many guests.",
    )
}

fn default_date_format() -> String {
    String::from("%a %d %b %Y %H:%M")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChatConfig {
    /// First bot message; live summaries are pinned beneath it.
    #[serde(default = "default_greeting")]
    pub greeting: String,

    /// chrono strftime pattern for check-in/check-out.
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            greeting: default_greeting(),
            date_format: default_date_format(),
        }
    }
}
