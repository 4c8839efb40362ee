//! orderly demo - shutdown coordination end to end
//!
//! Starts a heartbeat task and a context-driven task, registers cleanup
//! callbacks, and waits for SIGINT/SIGTERM (or `--request-after-ms`).
//! With `--hang` a callback never finishes and the watchdog ends the process.

use clap::Parser;
use orderly::{LogLevel, TerminationSignal};
use std::path::PathBuf;

mod demo;
mod settings;

use settings::{Overrides, Settings};

#[derive(Parser)]
#[command(name = "orderly-demo")]
#[command(author, version, about = "Demonstrates orderly shutdown coordination", long_about = None)]
struct Cli {
    /// Path to an orderly.toml settings file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Grace period before forced termination, in milliseconds
    #[arg(short, long)]
    timeout_ms: Option<u64>,

    /// Termination signal to listen for (repeatable: interrupt, terminate, hangup, quit)
    #[arg(short, long = "signal")]
    signals: Vec<TerminationSignal>,

    /// Do not listen for termination signals
    #[arg(long, conflicts_with = "signals")]
    no_signals: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(short, long)]
    log_level: Option<LogLevel>,

    /// Interval between heartbeat messages, in milliseconds
    #[arg(long)]
    heartbeat_ms: Option<u64>,

    /// Register a callback that never finishes
    #[arg(long)]
    hang: bool,

    /// Request shutdown automatically after this many milliseconds
    #[arg(long)]
    request_after_ms: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = Settings::load(cli.config.as_deref())?.apply(Overrides {
        timeout_ms: cli.timeout_ms,
        signals: cli.signals,
        no_signals: cli.no_signals,
        log_level: cli.log_level,
        heartbeat_ms: cli.heartbeat_ms,
        hang: cli.hang,
        request_after_ms: cli.request_after_ms,
    });

    orderly::init_logging(settings.shutdown.log_level);

    demo::run(settings).await
}
