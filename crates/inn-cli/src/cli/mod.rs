use clap::{Args, Parser, Subcommand};

pub mod global;

pub use global::{GlobalFlags, OutputFormat};

/// Top-level CLI parser for the `inn` binary.
#[derive(Debug, Parser)]
#[command(name = "inn", version, about = "innkeep - book a hotel room by chatting")]
pub struct Cli {
    /// Defaults to `chat`.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Booking server base URL (overrides server.base_url)
    #[arg(long, global = true, value_name = "URL")]
    pub server: Option<String>,

    /// Reuse an existing session instead of asking the server for one
    #[arg(long, global = true, value_name = "ID")]
    pub session: Option<String>,

    /// Quiet mode (errors only, no spinner)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Open the full-screen chat
    Chat,
    /// Send messages one after another and print the resulting conversation
    Send(SendArgs),
}

#[derive(Debug, Args)]
pub struct SendArgs {
    /// Messages to send; each one is a separate turn
    #[arg(required = true, value_name = "MESSAGE")]
    pub messages: Vec<String>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            server: self.server.clone(),
            session: self.session.clone(),
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}
