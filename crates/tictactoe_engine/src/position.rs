//! Board coordinates and raw move input.

use super::action::MoveError;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A checked `(row, col)` coordinate on the 3x3 board.
///
/// Both components are always in `0..=2`. The only public way to build one
/// is [`Coord::new`] (or converting a [`RawMove`]), so holding a `Coord`
/// means the bounds check already happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawMove", into = "RawMove")]
pub struct Coord {
    row: usize,
    col: usize,
}

impl Coord {
    /// All 9 coordinates in row-major order.
    pub const ALL: [Coord; 9] = [
        Coord { row: 0, col: 0 },
        Coord { row: 0, col: 1 },
        Coord { row: 0, col: 2 },
        Coord { row: 1, col: 0 },
        Coord { row: 1, col: 1 },
        Coord { row: 1, col: 2 },
        Coord { row: 2, col: 0 },
        Coord { row: 2, col: 1 },
        Coord { row: 2, col: 2 },
    ];

    /// Creates a coordinate, or `None` when either component is off the board.
    pub fn new(row: i64, col: i64) -> Option<Self> {
        let in_range = |v: i64| (0..=2).contains(&v);
        if in_range(row) && in_range(col) {
            Some(Self {
                row: row as usize,
                col: col as usize,
            })
        } else {
            None
        }
    }

    /// Zero-based row.
    pub fn row(self) -> usize {
        self.row
    }

    /// Zero-based column.
    pub fn col(self) -> usize {
        self.col
    }

    /// Row-major index (0-8).
    pub fn index(self) -> usize {
        self.row * 3 + self.col
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// An unchecked move request as typed by a player.
///
/// Components are signed so that inputs like `-1 2` survive parsing and
/// are rejected by the bounds check rather than by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RawMove {
    /// Requested row.
    pub row: i64,
    /// Requested column.
    pub col: i64,
}

impl RawMove {
    /// Creates a raw move request.
    pub fn new(row: i64, col: i64) -> Self {
        Self { row, col }
    }
}

impl From<Coord> for RawMove {
    fn from(coord: Coord) -> Self {
        Self::new(coord.row as i64, coord.col as i64)
    }
}

impl TryFrom<RawMove> for Coord {
    type Error = MoveError;

    fn try_from(raw: RawMove) -> Result<Self, Self::Error> {
        Coord::new(raw.row, raw.col).ok_or(MoveError::OutOfRange {
            row: raw.row,
            col: raw.col,
        })
    }
}

/// Text that could not be read as a pair of integers.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("expected a row and column such as `01`, `0 1` or `0,1`, got `{}`", input)]
pub struct CoordParseError {
    /// The offending input, trimmed.
    pub input: String,
}

impl FromStr for RawMove {
    type Err = CoordParseError;

    /// Accepts the compact two-digit form (`12`) or two integers separated
    /// by whitespace and/or a comma (`1 2`, `1,2`, `-1, 2`).
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let err = || CoordParseError {
            input: input.to_string(),
        };

        let parts: Vec<&str> = input
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .collect();

        match parts.as_slice() {
            [row, col] => {
                let row = row.parse::<i64>().map_err(|_| err())?;
                let col = col.parse::<i64>().map_err(|_| err())?;
                Ok(RawMove::new(row, col))
            }
            [compact] => {
                let digits: Vec<u32> = compact.chars().filter_map(|c| c.to_digit(10)).collect();
                match digits.as_slice() {
                    [row, col] if compact.chars().count() == 2 => {
                        Ok(RawMove::new(i64::from(*row), i64::from(*col)))
                    }
                    _ => Err(err()),
                }
            }
            _ => Err(err()),
        }
    }
}
