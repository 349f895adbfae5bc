//! # inn-config
//!
//! Layered configuration loading for innkeep using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`INNKEEP_*` prefix, `__` as separator)
//! 2. Project-level `.innkeep/config.toml`
//! 3. User-level `~/.config/innkeep/config.toml`
//! 4. Built-in defaults
//!
//! Command-line flags are applied on top by the binary via
//! [`InnConfig::with_overrides`].
//!
//! # Environment Variable Mapping
//!
//! Figment maps `INNKEEP_SERVER__BASE_URL` -> `server.base_url`,
//! `INNKEEP_CHAT__DATE_FORMAT` -> `chat.date_format`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use inn_config::InnConfig;
//!
//! let config = InnConfig::load_with_dotenv().expect("config");
//! println!("server: {}", config.server.base_url);
//! ```

mod chat;
mod error;
mod log;
mod server;

pub use chat::ChatConfig;
pub use error::ConfigError;
pub use log::LogConfig;
pub use server::ServerConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct InnConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub log: LogConfig,
}

impl InnConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`InnConfig::load_with_dotenv`] if you
    /// need `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source fails to parse or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`InnConfig::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails or a value is invalid.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(".innkeep/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("INNKEEP_").split("__"))
    }

    /// Apply command-line overrides on top of the loaded sources.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if the overridden URL is invalid.
    pub fn with_overrides(
        mut self,
        base_url: Option<&str>,
        session_id: Option<&str>,
    ) -> Result<Self, ConfigError> {
        if let Some(base_url) = base_url {
            self.server.base_url = base_url.to_string();
        }
        if let Some(session_id) = session_id {
            self.server.session_id = session_id.to_string();
        }
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.server.parsed_base_url()?;
        if self.chat.date_format.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: String::from("chat.date_format"),
                reason: String::from("must not be empty"),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("innkeep").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = InnConfig::default();
        assert!(!config.server.has_session());
        assert!(!config.log.is_configured());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn overrides_replace_server_values() {
        let config = InnConfig::default()
            .with_overrides(Some("https://hotel.example"), Some("sess-1"))
            .expect("valid overrides");
        assert_eq!(config.server.base_url, "https://hotel.example");
        assert_eq!(config.server.session_id, "sess-1");
    }

    #[test]
    fn invalid_override_is_rejected() {
        let result = InnConfig::default().with_overrides(Some("not a url"), None);
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }
}
