//! User-facing messages.

use tictactoe_engine::Marker;

/// Greeting printed once at startup.
pub fn intro_message() -> &'static str {
    "Welcome to Tic Tac Toe!"
}

/// Name prompt for seat 0 or 1.
pub fn name_prompt(seat: usize) -> String {
    format!("Player {}, please enter your name.", seat + 1)
}

/// Confirms the marker bound to a player.
pub fn marker_message(name: &str, marker: Marker) -> String {
    format!("Thank you {name}. Your marker will be {marker}.")
}

/// Turn prompt, with a reminder of the input format.
pub fn turn_message(name: &str, marker: Marker) -> String {
    format!("It is your turn {name} ({marker}). Enter row and column, e.g. 01.")
}

/// Rejection notice; the prompt is repeated afterwards.
pub fn error_message(reason: impl std::fmt::Display) -> String {
    format!("Invalid input! {reason}")
}

/// Closing line: the winner's name, or a draw.
pub fn end_game_message(winner: Option<&str>) -> String {
    match winner {
        Some(name) => format!("Congratulations {name}, you won!"),
        None => "It is a draw!".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(name_prompt(0), "Player 1, please enter your name.");
        assert_eq!(
            marker_message("Carlos", Marker::O),
            "Thank you Carlos. Your marker will be O."
        );
        assert_eq!(end_game_message(Some("Ana")), "Congratulations Ana, you won!");
        assert_eq!(end_game_message(None), "It is a draw!");
    }
}
