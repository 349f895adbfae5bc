use inn_config::InnConfig;

use crate::{bootstrap, terminal};

pub async fn handle(config: &InnConfig) -> anyhow::Result<()> {
    let client = bootstrap::client(config)?;
    let session_id = bootstrap::ensure_session(&client, config).await?;
    let controller = bootstrap::controller(config, session_id);
    terminal::run(controller, client).await
}
