//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cell, Coord, Marker};
use tracing::instrument;

const fn at(row: usize, col: usize) -> Coord {
    Coord::ALL[row * 3 + col]
}

/// The 8 winning lines: rows, then columns, then diagonals.
pub const LINES: [[Coord; 3]; 8] = [
    // Rows
    [at(0, 0), at(0, 1), at(0, 2)],
    [at(1, 0), at(1, 1), at(1, 2)],
    [at(2, 0), at(2, 1), at(2, 2)],
    // Columns
    [at(0, 0), at(1, 0), at(2, 0)],
    [at(0, 1), at(1, 1), at(2, 1)],
    [at(0, 2), at(1, 2), at(2, 2)],
    // Diagonals
    [at(0, 0), at(1, 1), at(2, 2)],
    [at(0, 2), at(1, 1), at(2, 0)],
];

fn line_owner(board: &Board, [a, b, c]: [Coord; 3]) -> Option<Marker> {
    match board.get(a) {
        Cell::Occupied(marker) if board.get(b) == board.get(a) && board.get(c) == board.get(a) => {
            Some(marker)
        }
        _ => None,
    }
}

/// Checks if there is a winner on the board.
///
/// Returns the marker of the first completed line, `None` otherwise.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Marker> {
    LINES.into_iter().find_map(|line| line_owner(board, line))
}

/// Markers of every completed line, in scan order, deduplicated.
///
/// Reachable match states have at most one entry here.
pub fn winning_markers(board: &Board) -> Vec<Marker> {
    let mut markers = Vec::new();
    for marker in LINES.into_iter().filter_map(|line| line_owner(board, line)) {
        if !markers.contains(&marker) {
            markers.push(marker);
        }
    }
    markers
}
