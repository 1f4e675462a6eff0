//! Tests for the phase-erased match wrapper.

use tictactoe_engine::{AnyMatch, Marker, MoveError, Outcome, SetupError};

fn started() -> AnyMatch {
    let mut game = AnyMatch::new();
    game.register("Ana").unwrap();
    game.register("Julia").unwrap();
    game.start().unwrap();
    game
}

#[test]
fn test_moves_before_start_are_rejected() {
    let mut game = AnyMatch::new();
    assert_eq!(game.submit(0, 0), Err(MoveError::NotStarted));
    assert!(!MoveError::NotStarted.is_retryable());
    assert_eq!(game.start(), Err(SetupError::MissingPlayers));
}

#[test]
fn test_registration_closes_after_start() {
    let mut game = started();
    assert_eq!(game.register("Late"), Err(SetupError::AlreadyStarted));
    assert_eq!(game.start(), Err(SetupError::AlreadyStarted));
    assert_eq!(game.players().len(), 2);
}

#[test]
fn test_submit_reports_progress_and_errors() {
    let mut game = started();
    assert_eq!(game.to_move().map(|p| p.name().as_str()), Some("Ana"));
    assert_eq!(game.submit(1, 1), Ok(Outcome::InProgress));

    let before = game.board().clone();
    assert!(matches!(game.submit(1, 1), Err(MoveError::OccupiedCell(_))));
    assert_eq!(game.submit(3, 0), Err(MoveError::OutOfRange { row: 3, col: 0 }));
    assert_eq!(*game.board(), before);
    assert_eq!(game.to_move().map(|p| p.name().as_str()), Some("Julia"));
}

#[test]
fn test_move_after_terminal_is_fatal() {
    let mut game = started();
    for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
        assert_eq!(game.submit(row, col), Ok(Outcome::InProgress));
    }
    assert_eq!(game.submit(0, 2), Ok(Outcome::Win(Marker::X)));
    assert!(game.is_over());
    assert_eq!(game.winner().map(|p| p.name().as_str()), Some("Ana"));

    let final_board = game.board().clone();
    let err = game.submit(2, 2).unwrap_err();
    assert_eq!(err, MoveError::MoveAfterTerminal);
    assert!(!err.is_retryable());
    assert_eq!(*game.board(), final_board);
    assert_eq!(game.outcome(), Outcome::Win(Marker::X));
    assert!(game.to_move().is_none());
}
