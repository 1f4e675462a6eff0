//! Tic-tac-toe engine: board model, line detection and match controller.
//!
//! # Architecture
//!
//! - **Board**: 3x3 grid of [`Cell`]s with win and full-board detection
//! - **Rules**: pure functions over a board ([`rules`])
//! - **Match**: typestate controller ([`MatchSetup`] → [`MatchInProgress`]
//!   → [`MatchFinished`]) plus the phase-erased [`AnyMatch`]
//! - **Contracts / invariants**: move preconditions and debug-build
//!   postconditions
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{MatchInProgress, MatchResult, Marker, Outcome};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut game = MatchInProgress::with_players("Ana", "Julia")?;
//! for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
//!     game = match game.play(row, col).map_err(|r| r.into_error())? {
//!         MatchResult::InProgress(next) => next,
//!         MatchResult::Finished(_) => unreachable!(),
//!     };
//! }
//! let MatchResult::Finished(done) = game.play(0, 2).map_err(|r| r.into_error())? else {
//!     unreachable!()
//! };
//! assert_eq!(done.outcome(), Outcome::Win(Marker::X));
//! assert_eq!(done.winner().map(|p| p.name().as_str()), Some("Ana"));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod phases;
mod position;
mod summary;
mod types;
mod typestate;
mod wrapper;

pub mod invariants;
pub mod rules;

pub use action::{Move, MoveError};
pub use contracts::{CellIsEmpty, Contract, InBounds, LegalMove, MoveContract};
pub use phases::Outcome;
pub use position::{Coord, CoordParseError, RawMove};
pub use summary::MatchSummary;
pub use types::{Board, Cell, Marker, Player};
pub use typestate::{
    MatchFinished, MatchInProgress, MatchResult, MatchSetup, MoveRejected, ReplayError,
    SetupError,
};
pub use wrapper::AnyMatch;
