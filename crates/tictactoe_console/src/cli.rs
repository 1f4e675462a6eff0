//! Command-line interface for the tic-tac-toe console.

use crate::config::SummaryFormat;
use clap::{Args, Parser, Subcommand};

/// Tic Tac Toe - two players, one terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe against a friend in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Options shared by every subcommand
    #[command(flatten)]
    pub options: SharedOptions,
}

/// Options accepted before or after the subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct SharedOptions {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Name of the first player (X); skips the name prompt
    #[arg(long, global = true)]
    pub player_x: Option<String>,

    /// Name of the second player (O); skips the name prompt
    #[arg(long, global = true)]
    pub player_o: Option<String>,

    /// How to print the result once the match ends
    #[arg(long, value_enum, global = true)]
    pub summary: Option<SummaryFormat>,

    /// Log filter used when RUST_LOG is unset (e.g. "debug")
    #[arg(long, global = true)]
    pub log: Option<String>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Play an interactive match on stdin/stdout
    Play,

    /// Replay a list of moves and print the resulting board
    Replay {
        /// Moves in order, X first (e.g. `00 11 01`)
        #[arg(required = true)]
        moves: Vec<String>,
    },
}
