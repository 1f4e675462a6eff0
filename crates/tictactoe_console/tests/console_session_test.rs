//! Scripted end-to-end console sessions.

use std::io::Cursor;
use tictactoe_console::{Console, ConsoleConfig, SharedOptions, SummaryFormat};
use tictactoe_engine::{Marker, MatchSummary, Outcome};

fn run(config: &ConsoleConfig, script: &str) -> (MatchSummary, String) {
    let mut console = Console::new(Cursor::new(script.to_string()), Vec::new());
    let summary = console.run(config).expect("session completes");
    let output = String::from_utf8(console.into_output()).expect("utf-8 output");
    (summary, output)
}

fn names(script_moves: &str) -> String {
    format!("Carlos\nIrina\n{script_moves}")
}

#[test]
fn test_row_win_session() {
    let (summary, output) = run(&ConsoleConfig::default(), &names("00\n10\n01\n11\n02\n"));

    assert_eq!(*summary.outcome(), Outcome::Win(Marker::X));
    assert!(output.starts_with("Welcome to Tic Tac Toe!\n"));
    assert!(output.contains("Thank you Carlos. Your marker will be X."));
    assert!(output.contains("Thank you Irina. Your marker will be O."));
    assert!(output.contains("It is your turn Irina (O)."));
    assert!(output.trim_end().ends_with("Congratulations Carlos, you won!"));
}

#[test]
fn test_diagonal_win_session_with_separated_input() {
    let (summary, output) = run(
        &ConsoleConfig::default(),
        &names("0 0\n0,1\n1 1\n0, 2\n2 2\n"),
    );
    assert_eq!(*summary.outcome(), Outcome::Win(Marker::X));
    assert_eq!(summary.board()[1], "   | X |   ");
    assert!(output.contains("Congratulations Carlos, you won!"));
}

#[test]
fn test_draw_session() {
    let (summary, output) = run(
        &ConsoleConfig::default(),
        &names("00\n01\n02\n11\n10\n12\n21\n20\n22\n"),
    );
    assert_eq!(*summary.outcome(), Outcome::Draw);
    assert!(summary.winner().is_none());
    assert_eq!(
        summary.board().as_slice(),
        [" X | O | X ", " X | O | O ", " O | X | X "]
    );
    assert!(output.trim_end().ends_with("It is a draw!"));
}

#[test]
fn test_rejected_moves_are_reprompted() {
    // X takes the centre, O tries the centre again, then off-board and
    // garbage input, before playing legally.
    let script = names("11\n11\n3 0\n-1 2\nzz\n00\n01\n10\n21\n");
    let (summary, output) = run(&ConsoleConfig::default(), &script);

    assert!(output.contains("Invalid input! Cell (1, 1) is already occupied"));
    assert!(output.contains("Invalid input! Position (3, 0) is off the board"));
    assert!(output.contains("Invalid input! Position (-1, 2) is off the board"));
    assert!(output.contains("Invalid input! expected a row and column"));
    assert_eq!(output.matches("Invalid input!").count(), 4);

    // Rejections did not consume a turn: O still owns (0, 0).
    assert_eq!(summary.moves()[1].marker, Marker::O);
    assert_eq!(summary.moves().len(), 5);
    assert_eq!(*summary.outcome(), Outcome::Win(Marker::X));
}

#[test]
fn test_preset_names_skip_prompts() {
    let options = SharedOptions {
        player_x: Some("Ana".to_string()),
        player_o: Some("Julia".to_string()),
        ..SharedOptions::default()
    };
    let config = ConsoleConfig::default().with_overrides(&options);
    let (summary, output) = run(&config, "00\n10\n01\n11\n02\n");

    assert!(!output.contains("please enter your name"));
    assert_eq!(summary.winner().as_deref(), Some("Ana"));
}

#[test]
fn test_json_summary_is_printed() {
    let options = SharedOptions {
        summary: Some(SummaryFormat::Json),
        ..SharedOptions::default()
    };
    let config = ConsoleConfig::default().with_overrides(&options);
    let (summary, output) = run(&config, &names("00\n10\n01\n11\n02\n"));

    let json_start = output.find('{').expect("json in output");
    let parsed: MatchSummary = serde_json::from_str(&output[json_start..]).unwrap();
    assert_eq!(parsed, summary);
}
