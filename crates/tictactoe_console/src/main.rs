//! Tic Tac Toe - terminal entry point.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use tictactoe_console::{Cli, Command, Console, ConsoleConfig, replay};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = ConsoleConfig::resolve(&cli.options).context("Failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(io::stderr)
        .init();
    debug!(?config, "Configuration resolved");

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => run_play(&config),
        Command::Replay { moves } => run_replay(&config, &moves),
    }
}

/// Run an interactive match on stdin/stdout
fn run_play(config: &ConsoleConfig) -> Result<()> {
    info!("Starting interactive match");
    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout().lock());
    console.run(config)?;
    Ok(())
}

/// Replay a move list and print the result
fn run_replay(config: &ConsoleConfig, moves: &[String]) -> Result<()> {
    info!(moves = moves.len(), "Replaying moves");
    println!("{}", replay(config, moves)?);
    Ok(())
}
