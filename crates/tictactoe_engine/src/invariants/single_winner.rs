//! Single winner invariant: at most one marker ever completes a line.

use super::super::MatchInProgress;
use super::super::rules::winning_markers;
use super::Invariant;

/// Invariant: no two markers own completed lines, and a completed line
/// belongs to whoever moved last.
///
/// The controller stops accepting moves as soon as a line completes, so a
/// second winner or a stale win cannot appear under correct use.
pub struct SingleWinnerInvariant;

impl Invariant<MatchInProgress> for SingleWinnerInvariant {
    fn holds(game: &MatchInProgress) -> bool {
        match winning_markers(game.board()).as_slice() {
            [] => true,
            [marker] => game.history().last().is_some_and(|mov| mov.marker == *marker),
            _ => false,
        }
    }

    fn description() -> &'static str {
        "At most one marker has a completed line"
    }
}
