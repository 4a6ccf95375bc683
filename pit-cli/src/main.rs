use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use pit_cli::commands::batch::BatchCommand;
use pit_cli::commands::brackets::BracketsCommand;
use pit_cli::commands::gross::GrossCommand;
use pit_cli::commands::net::NetCommand;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Vietnamese personal income tax calculator.
///
/// Assesses monthly salaries under both the current statutory rules and the
/// proposed revision, so the two regimes can be compared side by side.
#[derive(Debug, Parser)]
#[command(name = "pit", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Assess a gross salary under both regimes
    Net(NetCommand),

    /// Find the gross salary that yields a target net take-home
    Gross(GrossCommand),

    /// Show the statutory tables the calculations run on
    Brackets(BracketsCommand),

    /// Assess every salary row of a CSV file
    Batch(BatchCommand),
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `info` so normal runs are quiet.
/// * Strips timestamps and target names to keep CLI output clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Command::Net(cmd) => cmd.exec(),
        Command::Gross(cmd) => cmd.exec(),
        Command::Brackets(cmd) => cmd.exec(),
        Command::Batch(cmd) => cmd.exec(),
    }
}
