//! Terminal front end for the tic-tac-toe engine.
//!
//! Everything here is presentation: prompts, parsing typed input,
//! printing the board and the result. Game rules live in
//! [`tictactoe_engine`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod console;
pub mod interface;

pub use cli::{Cli, Command, SharedOptions};
pub use config::{ConfigError, ConsoleConfig, SummaryFormat};
pub use console::{Console, replay};
