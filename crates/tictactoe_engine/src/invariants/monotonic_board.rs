//! Monotonic board invariant: cells never change once set.

use super::super::{Board, MatchInProgress};
use super::Invariant;

/// Invariant: cells are written once and never overwritten.
///
/// Replaying the move history onto an empty board must hit only empty
/// cells and reproduce the current board exactly.
pub struct MonotonicBoardInvariant;

impl Invariant<MatchInProgress> for MonotonicBoardInvariant {
    fn holds(game: &MatchInProgress) -> bool {
        let mut reconstructed = Board::new();

        for mov in game.history() {
            if !reconstructed.is_empty(mov.coord) {
                return false;
            }
            reconstructed.set(mov.coord, mov.marker);
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}
