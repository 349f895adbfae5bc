use clap::ValueEnum;

/// Output mode for one-shot commands.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// The transcript as the chat would show it.
    #[default]
    Text,
    /// The transcript as JSON nodes.
    Json,
}

/// Global flags available before or after subcommands.
#[derive(Clone, Debug, Default)]
pub struct GlobalFlags {
    pub server: Option<String>,
    pub session: Option<String>,
    pub quiet: bool,
    pub verbose: bool,
}
