//! Phase-erased match wrapper.

use super::action::MoveError;
use super::phases::Outcome;
use super::typestate::{MatchFinished, MatchInProgress, MatchResult, MatchSetup, SetupError};
use super::{Board, Marker, Player};
use tracing::{instrument, warn};

/// A match in any phase.
///
/// Typestate phases can't be held in one variable across a loop, so
/// collaborators that drive a match turn by turn keep this enum instead.
#[derive(Debug, Clone)]
pub enum AnyMatch {
    /// Players are being seated.
    Setup(MatchSetup),
    /// Moves are being accepted.
    InProgress(MatchInProgress),
    /// Terminal; no further moves.
    Finished(MatchFinished),
}

impl Default for AnyMatch {
    fn default() -> Self {
        AnyMatch::Setup(MatchSetup::new())
    }
}

impl From<MatchSetup> for AnyMatch {
    fn from(setup: MatchSetup) -> Self {
        AnyMatch::Setup(setup)
    }
}

impl From<MatchInProgress> for AnyMatch {
    fn from(game: MatchInProgress) -> Self {
        AnyMatch::InProgress(game)
    }
}

impl From<MatchFinished> for AnyMatch {
    fn from(game: MatchFinished) -> Self {
        AnyMatch::Finished(game)
    }
}

impl From<MatchResult> for AnyMatch {
    fn from(result: MatchResult) -> Self {
        match result {
            MatchResult::InProgress(game) => game.into(),
            MatchResult::Finished(game) => game.into(),
        }
    }
}

impl AnyMatch {
    /// Creates a match in setup phase.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seats a player. Only valid during setup.
    #[instrument(skip(self, name))]
    pub fn register(&mut self, name: impl Into<String>) -> Result<Marker, SetupError> {
        match self {
            AnyMatch::Setup(setup) => setup.register(name),
            AnyMatch::InProgress(_) | AnyMatch::Finished(_) => Err(SetupError::AlreadyStarted),
        }
    }

    /// Moves from setup to in-progress once both players are seated.
    #[instrument(skip(self))]
    pub fn start(&mut self) -> Result<(), SetupError> {
        match self {
            AnyMatch::Setup(setup) if !setup.is_ready() => Err(SetupError::MissingPlayers),
            AnyMatch::Setup(_) => {
                if let AnyMatch::Setup(setup) = std::mem::take(self) {
                    *self = setup.start()?.into();
                }
                Ok(())
            }
            AnyMatch::InProgress(_) | AnyMatch::Finished(_) => Err(SetupError::AlreadyStarted),
        }
    }

    /// Submits a move for the player whose turn it is.
    ///
    /// Returns the outcome after the move (`InProgress` while the match
    /// continues). Rejected moves leave the match unchanged.
    ///
    /// # Errors
    ///
    /// - [`MoveError::OutOfRange`] / [`MoveError::OccupiedCell`]: ask again.
    /// - [`MoveError::MoveAfterTerminal`]: the match already finished.
    /// - [`MoveError::NotStarted`]: the match is still in setup.
    #[instrument(skip(self))]
    pub fn submit(&mut self, row: i64, col: i64) -> Result<Outcome, MoveError> {
        match std::mem::take(self) {
            AnyMatch::InProgress(game) => match game.play(row, col) {
                Ok(result) => {
                    let outcome = result.outcome();
                    *self = result.into();
                    Ok(outcome)
                }
                Err(rejected) => {
                    let (game, error) = rejected.into_parts();
                    *self = game.into();
                    Err(error)
                }
            },
            finished @ AnyMatch::Finished(_) => {
                warn!("Move submitted after the match finished");
                *self = finished;
                Err(MoveError::MoveAfterTerminal)
            }
            setup @ AnyMatch::Setup(_) => {
                *self = setup;
                Err(MoveError::NotStarted)
            }
        }
    }

    /// Returns the board for any phase.
    pub fn board(&self) -> &Board {
        match self {
            AnyMatch::Setup(setup) => setup.board(),
            AnyMatch::InProgress(game) => game.board(),
            AnyMatch::Finished(game) => game.board(),
        }
    }

    /// The player whose turn it is, while in progress.
    pub fn to_move(&self) -> Option<&Player> {
        match self {
            AnyMatch::InProgress(game) => Some(game.to_move()),
            AnyMatch::Setup(_) | AnyMatch::Finished(_) => None,
        }
    }

    /// Seated players, X first.
    pub fn players(&self) -> &[Player] {
        match self {
            AnyMatch::Setup(setup) => setup.players(),
            AnyMatch::InProgress(game) => game.players(),
            AnyMatch::Finished(game) => game.players(),
        }
    }

    /// Current outcome; `InProgress` until finished.
    pub fn outcome(&self) -> Outcome {
        match self {
            AnyMatch::Finished(game) => game.outcome(),
            AnyMatch::Setup(_) | AnyMatch::InProgress(_) => Outcome::InProgress,
        }
    }

    /// True once the match reached a terminal state.
    pub fn is_over(&self) -> bool {
        matches!(self, AnyMatch::Finished(_))
    }

    /// Winning player, once finished with a win.
    pub fn winner(&self) -> Option<&Player> {
        self.finished().and_then(MatchFinished::winner)
    }

    /// The finished phase, if reached.
    pub fn finished(&self) -> Option<&MatchFinished> {
        match self {
            AnyMatch::Finished(game) => Some(game),
            AnyMatch::Setup(_) | AnyMatch::InProgress(_) => None,
        }
    }
}
