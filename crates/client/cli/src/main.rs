//! `status-sim`: drive actors with status effects from the command line.
//!
//! Run with: `status-sim run --apply burning:3 --apply regenerating:5 --seconds 6`

mod commands;
mod dirs;

use anyhow::Result;
use clap::Parser;
use commands::{Inspect, ListSaves, Run};

/// Status effect simulator
#[derive(Parser)]
#[command(name = "status-sim")]
#[command(about = "Apply status effects to an actor and watch them play out", long_about = None)]
#[command(version)]
struct Cli {
    /// Also write logs to this file
    #[arg(long, global = true, value_name = "FILE")]
    log_file: Option<std::path::PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Simulate an actor and print the event timeline
    Run(Run),

    /// Print a saved actor record
    Inspect(Inspect),

    /// List saved slots
    List(ListSaves),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for STATUS_DATA_DIR and other env vars)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let _guard = status_runtime::init_logging(&status_runtime::LogOptions {
        file: cli.log_file,
        ..Default::default()
    })?;

    match cli.command {
        Command::Run(cmd) => cmd.execute(),
        Command::Inspect(cmd) => cmd.execute(),
        Command::List(cmd) => cmd.execute(),
    }
}
