//! Alternating turn invariant: markers alternate X, O, X, O, ...

use super::super::{MatchInProgress, Marker};
use super::Invariant;

/// Invariant: markers alternate and the turn counter tracks the history.
///
/// Move `i` was played on turn `i` by `Marker::for_turn(i)`, the counter
/// equals the history length, and the player to move holds the marker for
/// the current turn.
pub struct AlternatingTurnInvariant;

impl Invariant<MatchInProgress> for AlternatingTurnInvariant {
    fn holds(game: &MatchInProgress) -> bool {
        let history = game.history();

        let alternates = history
            .iter()
            .enumerate()
            .all(|(i, mov)| mov.turn == i && mov.marker == Marker::for_turn(i));

        alternates
            && game.turn() == history.len()
            && *game.to_move().marker() == Marker::for_turn(game.turn())
    }

    fn description() -> &'static str {
        "Markers alternate turns (X, O, X, O, ...)"
    }
}
