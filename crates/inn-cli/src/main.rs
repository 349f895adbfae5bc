use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Context;
use clap::Parser;

mod bootstrap;
mod cli;
mod commands;
mod output;
mod progress;
mod terminal;
mod ui;
mod view;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("inn error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let flags = cli.global_flags();
    let config = bootstrap::load_config(&flags)?;
    let command = cli.command.unwrap_or(cli::Commands::Chat);

    init_tracing(&flags, log_sink(&command, &config))?;
    ui::init(&flags, &command);

    match command {
        cli::Commands::Chat => commands::chat::handle(&config).await,
        cli::Commands::Send(args) => commands::send::handle(&args, &config).await,
    }
}

/// Where log lines go for a given command.
#[derive(Debug, Clone, PartialEq, Eq)]
enum LogSink {
    Stderr,
    File(PathBuf),
    Discard,
}

/// The full-screen chat owns the terminal, so its logs go to `log.file` or
/// nowhere.
fn log_sink(command: &cli::Commands, config: &inn_config::InnConfig) -> LogSink {
    match command {
        cli::Commands::Chat if config.log.is_configured() => {
            LogSink::File(PathBuf::from(config.log.file.trim()))
        }
        cli::Commands::Chat => LogSink::Discard,
        cli::Commands::Send(_) => LogSink::Stderr,
    }
}

fn init_tracing(flags: &cli::GlobalFlags, sink: LogSink) -> anyhow::Result<()> {
    let level = if flags.quiet {
        "error"
    } else if flags.verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("INN_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let installed = match sink {
        LogSink::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogSink::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        LogSink::Discard => builder.with_writer(std::io::sink).try_init(),
    };

    installed.map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))
}
