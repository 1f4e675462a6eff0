//! History consistency invariant: history matches the occupied cells.

use super::super::{MatchInProgress, Marker};
use super::Invariant;

/// Invariant: every occupied cell has exactly one move in the history.
///
/// Also bounds the marker counts: X has either the same number of cells
/// as O or exactly one more.
pub struct HistoryConsistentInvariant;

impl Invariant<MatchInProgress> for HistoryConsistentInvariant {
    fn holds(game: &MatchInProgress) -> bool {
        let board = game.board();
        let x = board.count(Marker::X);
        let o = board.count(Marker::O);

        game.history().len() == x + o && (x == o || x == o + 1)
    }

    fn description() -> &'static str {
        "History length matches occupied cells and marker counts are balanced"
    }
}
