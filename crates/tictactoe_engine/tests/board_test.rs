//! Tests for the board model and line detection.

use tictactoe_engine::rules::LINES;
use tictactoe_engine::{Board, Cell, Coord, Marker, Outcome};

fn coord(row: i64, col: i64) -> Coord {
    Coord::new(row, col).expect("coordinate on the board")
}

fn board_from(rows: [[char; 3]; 3]) -> Board {
    let mut board = Board::new();
    for (coord, symbol) in Coord::ALL.into_iter().zip(rows.into_iter().flatten()) {
        match symbol {
            'X' => board.set(coord, Marker::X),
            'O' => board.set(coord, Marker::O),
            _ => {}
        }
    }
    board
}

#[test]
fn test_fresh_board_is_empty_everywhere() {
    let board = Board::new();
    for row in 0..3 {
        for col in 0..3 {
            assert!(board.is_empty(coord(row, col)));
            assert_eq!(board.get(coord(row, col)), Cell::Empty);
        }
    }
    assert_eq!(board.winning_marker(), None);
    assert!(!board.is_terminal());
    assert_eq!(board.outcome(), Outcome::InProgress);
}

#[test]
fn test_set_then_get() {
    let mut board = Board::new();
    board.set(coord(2, 1), Marker::X);

    assert_eq!(board.get(coord(2, 1)), Cell::Occupied(Marker::X));
    assert!(!board.is_empty(coord(2, 1)));
    let occupied = board.cells().filter(|cell| *cell != Cell::Empty).count();
    assert_eq!(occupied, 1);
}

#[test]
fn test_each_line_reports_its_marker() {
    // Three rows, three columns, two diagonals, each on its own.
    assert_eq!(LINES.len(), 8);
    for line in LINES {
        let mut board = Board::new();
        for c in line {
            board.set(c, Marker::O);
        }
        assert_eq!(board.winning_marker(), Some(Marker::O), "line {line:?}");
        assert!(board.is_terminal());
        assert_eq!(board.outcome(), Outcome::Win(Marker::O));
    }
}

#[test]
fn test_row_win_with_interleaved_opponent() {
    let board = board_from([['X', 'X', 'X'], ['O', 'O', ' '], [' ', ' ', ' ']]);
    assert_eq!(board.winning_marker(), Some(Marker::X));
}

#[test]
fn test_diagonal_win() {
    let board = board_from([['X', 'O', ' '], [' ', 'X', 'O'], [' ', ' ', 'X']]);
    assert_eq!(board.winning_marker(), Some(Marker::X));
}

#[test]
fn test_anti_diagonal_win() {
    let board = board_from([['X', 'X', 'O'], [' ', 'O', ' '], ['O', ' ', 'X']]);
    assert_eq!(board.winning_marker(), Some(Marker::O));
}

#[test]
fn test_canonical_draw_layout() {
    let board = board_from([['X', 'O', 'X'], ['X', 'O', 'O'], ['O', 'X', 'X']]);
    assert_eq!(board.winning_marker(), None);
    assert!(board.is_full());
    assert!(board.is_terminal());
    assert_eq!(board.outcome(), Outcome::Draw);
    assert!(board.empty_cells().is_empty());
}

#[test]
fn test_terminal_iff_winner_or_full() {
    let boards = [
        Board::new(),
        board_from([['X', 'O', ' '], [' ', ' ', ' '], [' ', ' ', ' ']]),
        board_from([['X', 'X', 'X'], ['O', 'O', ' '], [' ', ' ', ' ']]),
        board_from([['X', 'O', 'X'], ['X', 'O', 'O'], ['O', 'X', 'X']]),
    ];
    for board in &boards {
        assert_eq!(
            board.is_terminal(),
            board.winning_marker().is_some() || board.is_full(),
            "{board}"
        );
    }
}

#[test]
fn test_queries_are_idempotent() {
    let board = board_from([['X', 'O', ' '], [' ', 'X', ' '], ['O', ' ', 'X']]);
    let first = (board.winning_marker(), board.is_terminal(), board.outcome());
    for _ in 0..3 {
        assert_eq!(
            (board.winning_marker(), board.is_terminal(), board.outcome()),
            first
        );
    }
}

#[test]
fn test_render_layout() {
    let board = board_from([['X', 'O', 'X'], [' ', 'O', ' '], [' ', ' ', 'X']]);
    assert_eq!(
        board.render(),
        " X | O | X \n---+---+---\n   | O |   \n---+---+---\n   |   | X "
    );
}
