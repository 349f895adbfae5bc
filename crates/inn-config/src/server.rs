//! Booking server connection settings.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::ConfigError;

fn default_base_url() -> String {
    String::from("http://127.0.0.1:5000")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Base URL of the booking server; endpoints live under `/api/`.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Existing session to resume. Empty means a new session is issued.
    #[serde(default)]
    pub session_id: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            session_id: String::new(),
        }
    }
}

impl ServerConfig {
    /// Whether a session id was supplied instead of being issued at start-up.
    pub fn has_session(&self) -> bool {
        !self.session_id.trim().is_empty()
    }

    /// Parse and validate `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if the URL does not parse or is
    /// not `http`/`https`.
    pub fn parsed_base_url(&self) -> Result<Url, ConfigError> {
        let url = Url::parse(self.base_url.trim()).map_err(|error| ConfigError::InvalidValue {
            field: String::from("server.base_url"),
            reason: error.to_string(),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidValue {
                field: String::from("server.base_url"),
                reason: format!("unsupported scheme '{}'", url.scheme()),
            });
        }
        Ok(url)
    }
}
