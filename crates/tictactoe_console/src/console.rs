//! Prompt/response loop driving a match over any reader and writer.

use crate::config::{ConsoleConfig, SummaryFormat};
use crate::interface;
use anyhow::{Context, Result, bail};
use std::io::{BufRead, Write};
use tictactoe_engine::{
    AnyMatch, Coord, MatchInProgress, MatchResult, MatchSummary, RawMove, SetupError,
};
use tracing::{debug, info, instrument, warn};

/// Text front end for one match.
///
/// Generic over its streams so sessions can be scripted in tests.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console over the given streams.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Gives back the output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Plays one full match and returns its summary.
    ///
    /// Invalid input is reported and re-prompted without limit. Running out
    /// of input before the match ends is an error.
    #[instrument(skip_all)]
    pub fn run(&mut self, config: &ConsoleConfig) -> Result<MatchSummary> {
        self.say(interface::intro_message())?;

        let mut game = AnyMatch::new();
        for seat in 0..2 {
            self.seat_player(&mut game, seat, config.preset_name(seat))?;
        }
        game.start().context("Failed to start match")?;

        self.say(game.board().render())?;
        while !game.is_over() {
            self.take_turn(&mut game)?;
            self.say(game.board().render())?;
        }

        let finished = game
            .finished()
            .context("Match loop ended without a finished match")?;
        let summary = finished.summary();
        self.say(interface::end_game_message(summary.winner().as_deref()))?;
        if *config.summary() == SummaryFormat::Json {
            let json = serde_json::to_string_pretty(&summary).context("Failed to encode summary")?;
            self.say(json)?;
        }
        info!(outcome = %summary.outcome(), "Session complete");
        Ok(summary)
    }

    fn seat_player(&mut self, game: &mut AnyMatch, seat: usize, preset: Option<&str>) -> Result<()> {
        let mut preset = preset.map(str::to_string);
        loop {
            let name = match preset.take() {
                Some(name) => name,
                None => {
                    self.say(interface::name_prompt(seat))?;
                    self.read_line()?
                }
            };
            match game.register(name.as_str()) {
                Ok(marker) => {
                    let name = name.trim();
                    return self.say(interface::marker_message(name, marker));
                }
                Err(SetupError::EmptyName) => {
                    self.say(interface::error_message(SetupError::EmptyName))?;
                }
                Err(e) => return Err(e).context("Failed to seat player"),
            }
        }
    }

    fn take_turn(&mut self, game: &mut AnyMatch) -> Result<()> {
        let player = game.to_move().context("No player to move")?;
        let (name, marker) = (player.name().clone(), *player.marker());
        self.say(interface::turn_message(&name, marker))?;

        loop {
            let line = self.read_line()?;
            let raw = match line.parse::<RawMove>() {
                Ok(raw) => raw,
                Err(e) => {
                    debug!(%e, "Unparseable move");
                    self.say(interface::error_message(e))?;
                    continue;
                }
            };
            match game.submit(raw.row, raw.col) {
                Ok(outcome) => {
                    debug!(player = %name, row = raw.row, col = raw.col, %outcome, "Move played");
                    return Ok(());
                }
                Err(e) if e.is_retryable() => {
                    debug!(%e, "Move rejected");
                    self.say(interface::error_message(e))?;
                }
                Err(e) => {
                    warn!(%e, "Unrecoverable move error");
                    return Err(e).context("Match controller refused a move");
                }
            }
        }
    }

    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read input")?;
        if read == 0 {
            bail!("Input ended before the match finished");
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn say(&mut self, text: impl AsRef<str>) -> Result<()> {
        writeln!(self.output, "{}", text.as_ref()).context("Failed to write output")
    }
}

/// Replays `moves` (X first) and returns the rendered report.
///
/// Each move is parsed and bounds-checked before any is played. A move
/// left over after the match finishes is an error.
#[instrument(skip(config))]
pub fn replay(config: &ConsoleConfig, moves: &[String]) -> Result<String> {
    let coords = moves
        .iter()
        .map(|text| -> Result<Coord> {
            let raw: RawMove = text.parse()?;
            Ok(Coord::try_from(raw)?)
        })
        .collect::<Result<Vec<Coord>>>()
        .context("Invalid move list")?;

    let x = config.preset_name(0).unwrap_or("Player 1");
    let o = config.preset_name(1).unwrap_or("Player 2");
    let result = MatchInProgress::replay(x, o, &coords).context("Replay failed")?;

    let mut report = result.board().render();
    report.push('\n');
    match result {
        MatchResult::Finished(done) => {
            let winner = done.winner().map(|player| player.name().as_str());
            report.push_str(&interface::end_game_message(winner));
        }
        MatchResult::InProgress(game) => {
            report.push_str(&format!("Match in progress; {} to move.", game.to_move().name()));
        }
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::SharedOptions;
    use std::io::Cursor;

    fn session(script: &str) -> (Result<MatchSummary>, String) {
        let mut console = Console::new(Cursor::new(script.to_string()), Vec::new());
        let result = console.run(&ConsoleConfig::default());
        let output = String::from_utf8(console.into_output()).unwrap();
        (result, output)
    }

    #[test]
    fn test_blank_name_is_reprompted() {
        let (result, output) = session("\nAna\nJulia\n00\n10\n01\n11\n02\n");
        assert!(result.is_ok());
        assert_eq!(output.matches("Player 1, please enter your name.").count(), 2);
        assert!(output.contains("Invalid input! Player name must not be empty"));
    }

    #[test]
    fn test_eof_mid_match_is_an_error() {
        let (result, _) = session("Ana\nJulia\n00\n");
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Input ended"));
    }

    #[test]
    fn test_replay_report() {
        let moves: Vec<String> = ["00", "10", "01", "11", "02"].map(String::from).to_vec();
        let report = replay(&ConsoleConfig::default(), &moves).unwrap();
        assert!(report.starts_with(" X | X | X "));
        assert!(report.ends_with("Congratulations Player 1, you won!"));
    }

    #[test]
    fn test_replay_in_progress() {
        let moves = vec!["11".to_string()];
        let report = replay(&ConsoleConfig::default(), &moves).unwrap();
        assert!(report.ends_with("Match in progress; Player 2 to move."));
    }

    #[test]
    fn test_replay_rejects_bad_moves() {
        assert!(replay(&ConsoleConfig::default(), &["30".to_string()]).is_err());
        assert!(replay(&ConsoleConfig::default(), &["11".to_string(), "11".to_string()]).is_err());
    }

    #[test]
    fn test_replay_rejects_moves_after_the_end() {
        let moves: Vec<String> = ["00", "10", "01", "11", "02", "22"].map(String::from).to_vec();
        let err = replay(&ConsoleConfig::default(), &moves).unwrap_err();
        assert_eq!(err.to_string(), "Replay failed");
        assert_eq!(err.root_cause().to_string(), "Match is already over");
    }

    #[test]
    fn test_replay_reports_blank_preset_name() {
        let options = SharedOptions {
            player_x: Some("  ".to_string()),
            ..SharedOptions::default()
        };
        let config = ConsoleConfig::default().with_overrides(&options);
        let err = replay(&config, &["11".to_string()]).unwrap_err();
        assert_eq!(err.root_cause().to_string(), "Player name must not be empty");
    }
}
