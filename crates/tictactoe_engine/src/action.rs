//! Move records and move errors.
//!
//! An accepted move is kept as a domain event so a match can be replayed
//! and checked against its board.

use super::{Coord, Marker};
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a marker placed at a coordinate on a given turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Move {
    /// Marker that was placed.
    pub marker: Marker,
    /// Where it was placed.
    pub coord: Coord,
    /// Turn counter value when the move was played (0-based).
    pub turn: usize,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{} {} -> {}", self.turn + 1, self.marker, self.coord)
    }
}

/// Why a submitted move was not applied.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// Row or column outside `0..=2`.
    #[display("Position ({row}, {col}) is off the board (row and column must be 0-2)")]
    OutOfRange {
        /// Requested row.
        row: i64,
        /// Requested column.
        col: i64,
    },

    /// The target cell already holds a marker.
    #[display("Cell {_0} is already occupied")]
    OccupiedCell(#[error(not(source))] Coord),

    /// The match already reached a terminal state.
    #[display("Match is already over")]
    MoveAfterTerminal,

    /// The match has not been started yet.
    #[display("Match has not started")]
    NotStarted,
}

impl MoveError {
    /// True when the caller can simply ask for another move.
    ///
    /// `MoveAfterTerminal` and `NotStarted` are caller contract violations.
    pub fn is_retryable(&self) -> bool {
        matches!(self, MoveError::OutOfRange { .. } | MoveError::OccupiedCell(_))
    }
}
