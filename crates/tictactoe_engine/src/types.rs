//! Core domain types for tic-tac-toe.

use super::phases::Outcome;
use super::position::Coord;
use super::rules;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Marker a player writes into a cell.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Marker {
    /// First marker (goes first).
    X,
    /// Second marker (goes second).
    O,
}

impl Marker {
    /// Returns the opposing marker.
    pub fn opponent(self) -> Self {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
        }
    }

    /// Marker that moves on the given turn number.
    pub fn for_turn(turn: usize) -> Self {
        if turn % 2 == 0 { Marker::X } else { Marker::O }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Free cell.
    #[default]
    Empty,
    /// Cell holding a marker.
    Occupied(Marker),
}

impl Cell {
    /// Returns the marker in this cell, if any.
    pub fn marker(self) -> Option<Marker> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(marker) => Some(marker),
        }
    }

    fn symbol(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Occupied(Marker::X) => 'X',
            Cell::Occupied(Marker::O) => 'O',
        }
    }
}

/// 3x3 tic-tac-toe board, row-major.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; 3]; 3],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the cell at the given coordinate.
    pub fn get(&self, coord: Coord) -> Cell {
        self.cells[coord.row()][coord.col()]
    }

    /// Writes `marker` into the cell at `coord`.
    ///
    /// The cell must be empty; the match controller validates this before
    /// calling.
    #[instrument(skip(self))]
    pub fn set(&mut self, coord: Coord, marker: Marker) {
        debug_assert!(self.is_empty(coord), "cell {coord} already occupied");
        self.cells[coord.row()][coord.col()] = Cell::Occupied(marker);
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, coord: Coord) -> bool {
        self.get(coord) == Cell::Empty
    }

    /// Checks if every cell holds a marker.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Returns the marker owning a completed line, if any.
    pub fn winning_marker(&self) -> Option<Marker> {
        rules::check_winner(self)
    }

    /// True once the board has a winner or no free cells.
    pub fn is_terminal(&self) -> bool {
        self.winning_marker().is_some() || self.is_full()
    }

    /// Derives the outcome from the current contents.
    pub fn outcome(&self) -> Outcome {
        match self.winning_marker() {
            Some(marker) => Outcome::Win(marker),
            None if rules::is_draw(self) => Outcome::Draw,
            None => Outcome::InProgress,
        }
    }

    /// Free coordinates in row-major order.
    pub fn empty_cells(&self) -> Vec<Coord> {
        Coord::ALL
            .iter()
            .copied()
            .filter(|coord| self.is_empty(*coord))
            .collect()
    }

    /// Number of cells holding `marker`.
    pub fn count(&self, marker: Marker) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| **cell == Cell::Occupied(marker))
            .count()
    }

    /// Iterates over all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().flatten().copied()
    }

    /// Renders a single row (0-2) as ` X | O | X `.
    pub(crate) fn render_row(&self, row: usize) -> String {
        let [a, b, c] = self.cells[row];
        format!(" {} | {} | {} ", a.symbol(), b.symbol(), c.symbol())
    }

    /// Formats the board as a human-readable grid.
    pub fn render(&self) -> String {
        (0..3)
            .map(|row| self.render_row(row))
            .collect::<Vec<_>>()
            .join("\n---+---+---\n")
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

/// A participant bound to a marker for the length of a match.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Player {
    /// Display name.
    name: String,
    /// Marker assigned at registration.
    marker: Marker,
}

impl Player {
    pub(crate) fn new(name: String, marker: Marker) -> Self {
        Self { name, marker }
    }
}
