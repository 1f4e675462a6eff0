//! Serializable report of a finished match.

use super::action::Move;
use super::phases::Outcome;
use super::Player;
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// Everything a presenter needs to report a finished match.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, new)]
pub struct MatchSummary {
    /// Both players, X first.
    players: Vec<Player>,
    /// Final outcome.
    outcome: Outcome,
    /// Display name of the winner, if any.
    winner: Option<String>,
    /// Accepted moves in order.
    moves: Vec<Move>,
    /// Final board, one rendered string per row.
    board: Vec<String>,
}
