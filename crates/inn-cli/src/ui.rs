use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{Commands, GlobalFlags, OutputFormat};

#[derive(Clone, Copy, Debug)]
pub struct UiPrefs {
    /// Draw spinners on stderr.
    pub progress: bool,
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(flags: &GlobalFlags, command: &Commands) {
    let progress = match command {
        Commands::Send(args) => {
            std::io::stderr().is_terminal() && !flags.quiet && args.format == OutputFormat::Text
        }
        Commands::Chat => false,
    };

    let _ = UI_PREFS.set(UiPrefs { progress });
}

#[must_use]
pub fn prefs() -> UiPrefs {
    *UI_PREFS.get().unwrap_or(&UiPrefs { progress: false })
}
