//! Logging destination.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LogConfig {
    /// File that receives logs while the full-screen chat is running.
    /// Empty discards them.
    #[serde(default)]
    pub file: String,
}

impl LogConfig {
    pub fn is_configured(&self) -> bool {
        !self.file.trim().is_empty()
    }
}
