//! Super Tic-Tac-Toe on the console
//!
//! - `play`: interactive game, one command per line
//! - `replay`: run a move script and print the outcome

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "super-ttt")]
#[command(version, about = "Super Tic-Tac-Toe on the console", long_about = None)]
struct Cli {
    /// Log engine events at debug level (RUST_LOG takes precedence)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively
    Play(super_ttt::cli::commands::play::PlayArgs),

    /// Replay a move script
    Replay(super_ttt::cli::commands::replay::ReplayArgs),
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "super_ttt=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Play(args) => super_ttt::cli::commands::play::execute(args),
        Commands::Replay(args) => super_ttt::cli::commands::replay::execute(args),
    }
}
