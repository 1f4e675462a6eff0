//! Match outcome derived from the board.

use super::Marker;
use serde::{Deserialize, Serialize};

/// Outcome of a match, derived from board contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No completed line and free cells remain.
    InProgress,
    /// The marker completed a line.
    Win(Marker),
    /// Board is full with no completed line.
    Draw,
}

impl Outcome {
    /// Returns the winning marker if there is one.
    pub fn winner(&self) -> Option<Marker> {
        match self {
            Outcome::Win(marker) => Some(*marker),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }

    /// Returns true if the match ended in a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }

    /// Returns true once no further moves are accepted.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Win(marker) => write!(f, "{marker} wins"),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}
