use inn_chat::TurnResolution;
use inn_config::InnConfig;

use crate::bootstrap;
use crate::cli::SendArgs;
use crate::output::{self, Report};
use crate::progress::Progress;

/// Send each message as its own turn, in order, then print the transcript.
///
/// Every turn runs even if an earlier one failed; the command fails afterwards
/// so scripts notice.
pub async fn handle(args: &SendArgs, config: &InnConfig) -> anyhow::Result<()> {
    let client = bootstrap::client(config)?;
    let progress = Progress::spinner("Starting session...");

    let session_id = match bootstrap::ensure_session(&client, config).await {
        Ok(session_id) => session_id,
        Err(error) => {
            progress.finish_err("Could not start a session");
            return Err(error);
        }
    };

    let mut controller = bootstrap::controller(config, session_id);
    let mut failed = 0_usize;
    for message in &args.messages {
        progress.set_message(&format!("Sending: {message}"));
        if controller.exchange(&client, message).await? == Some(TurnResolution::Failed) {
            failed += 1;
        }
    }
    progress.finish_clear();

    output::output(&Report::new(&controller), args.format)?;

    if failed > 0 {
        anyhow::bail!(
            "{failed} of {} messages did not reach the booking server",
            args.messages.len()
        );
    }
    Ok(())
}
