use anyhow::Context;
use inn_chat::summary::SummaryStyle;
use inn_chat::{Controller, ControllerSettings, Transport};
use inn_client::BookingClient;
use inn_config::InnConfig;

use crate::cli::GlobalFlags;

/// Load `.env`, layered configuration, then command-line overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<InnConfig> {
    let config = InnConfig::load_with_dotenv().context("failed to load configuration")?;
    config
        .with_overrides(flags.server.as_deref(), flags.session.as_deref())
        .context("invalid command-line override")
}

pub fn client(config: &InnConfig) -> anyhow::Result<BookingClient> {
    let base = config.server.parsed_base_url()?;
    BookingClient::new(base).context("failed to build HTTP client")
}

/// The configured session id, or a fresh one from the server.
pub async fn ensure_session<T: Transport>(
    transport: &T,
    config: &InnConfig,
) -> anyhow::Result<String> {
    if config.server.has_session() {
        let session_id = config.server.session_id.trim().to_string();
        tracing::debug!(session = %session_id, "reusing configured session");
        return Ok(session_id);
    }

    let session_id = transport
        .create_session()
        .await
        .with_context(|| format!("failed to start a session with {}", config.server.base_url))?;
    tracing::info!(session = %session_id, "session issued");
    Ok(session_id)
}

pub fn controller(config: &InnConfig, session_id: String) -> Controller {
    Controller::new(
        session_id,
        ControllerSettings {
            greeting: config.chat.greeting.clone(),
            style: SummaryStyle {
                date_format: config.chat.date_format.clone(),
            },
        },
    )
}
