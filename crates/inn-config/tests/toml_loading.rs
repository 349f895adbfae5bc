//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed file and env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use inn_config::{ConfigError, InnConfig};

#[test]
fn loads_all_sections_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[server]
base_url = "https://hotel.example"
session_id = "resume-me"

[chat]
greeting = "Welcome to the Grand."
date_format = "%d/%m/%Y"

[log]
file = "inn.log"
"#,
        )?;

        let figment = Figment::from(Serialized::defaults(InnConfig::default()))
            .merge(Toml::file("config.toml"));
        let config = InnConfig::from_figment(&figment).expect("valid config");

        assert_eq!(config.server.base_url, "https://hotel.example");
        assert_eq!(config.server.session_id, "resume-me");
        assert!(config.server.has_session());
        assert_eq!(config.chat.greeting, "Welcome to the Grand.");
        assert_eq!(config.chat.date_format, "%d/%m/%Y");
        assert!(config.log.is_configured());
        Ok(())
    });
}

#[test]
fn partial_section_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[chat]
greeting = "Hello"
"#,
        )?;

        let config: InnConfig = Figment::from(Serialized::defaults(InnConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.chat.greeting, "Hello");
        assert_eq!(config.chat.date_format, "%a %d %b %Y %H:%M");
        assert_eq!(config.server.base_url, "http://127.0.0.1:5000");
        Ok(())
    });
}

#[test]
fn env_beats_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[server]
base_url = "http://from-toml:5000"
"#,
        )?;
        jail.set_env("INNKEEP_SERVER__BASE_URL", "http://from-env:5000");

        let config: InnConfig = Figment::from(Serialized::defaults(InnConfig::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("INNKEEP_").split("__"))
            .extract()?;

        assert_eq!(config.server.base_url, "http://from-env:5000");
        Ok(())
    });
}

#[test]
fn invalid_base_url_fails_validation() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[server]
base_url = "ws://hotel.example"
"#,
        )?;

        let figment = Figment::from(Serialized::defaults(InnConfig::default()))
            .merge(Toml::file("config.toml"));
        let result = InnConfig::from_figment(&figment);

        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
        Ok(())
    });
}
