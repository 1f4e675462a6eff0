//! Phase-specific typestate structs for a tic-tac-toe match.
//!
//! Each phase is its own type with phase-specific fields, so a finished
//! match always has an outcome and only an in-progress match can take
//! moves.

use super::action::{Move, MoveError};
use super::contracts::{Contract, MoveContract, assert_move_contract};
use super::phases::Outcome;
use super::position::{Coord, RawMove};
use super::summary::MatchSummary;
use super::{Board, Marker, Player};
use derive_more::{Display, Error, From};
use tracing::{debug, info, instrument, warn};

/// Why players could not be seated or a match could not start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum SetupError {
    /// Both seats are already taken.
    #[display("Match already has two players")]
    MatchFull,
    /// `start` was called before both seats were filled.
    #[display("Match needs two players to start")]
    MissingPlayers,
    /// Display name was blank.
    #[display("Player name must not be empty")]
    EmptyName,
    /// Registration attempted after the match started.
    #[display("Match has already started")]
    AlreadyStarted,
}

/// Why a move sequence could not be replayed.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum ReplayError {
    /// The players could not be seated.
    #[display("Could not seat players")]
    Setup(SetupError),
    /// A move was rejected, including moves after the match finished.
    #[display("Move sequence rejected")]
    Move(MoveError),
}

// ─────────────────────────────────────────────────────────────
//  Setup Phase
// ─────────────────────────────────────────────────────────────

/// Match in setup phase: players are being bound to markers.
///
/// The board is always empty.
#[derive(Debug, Clone, Default)]
pub struct MatchSetup {
    board: Board,
    players: Vec<Player>,
}

impl MatchSetup {
    /// Creates a new match in setup phase.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the (empty) board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Players seated so far, in marker order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// True once both seats are filled.
    pub fn is_ready(&self) -> bool {
        self.players.len() == 2
    }

    /// Seats a player in the first free seat and returns their marker.
    ///
    /// The first registration gets [`Marker::X`], the second [`Marker::O`].
    #[instrument(skip(self, name))]
    pub fn register(&mut self, name: impl Into<String>) -> Result<Marker, SetupError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(SetupError::EmptyName);
        }
        let marker = match self.players.len() {
            0 => Marker::X,
            1 => Marker::O,
            _ => return Err(SetupError::MatchFull),
        };
        info!(player = %name, %marker, "Registering player");
        self.players.push(Player::new(name.trim().to_string(), marker));
        Ok(marker)
    }

    /// Starts the match (consumes setup, returns in-progress).
    #[instrument(skip(self))]
    pub fn start(self) -> Result<MatchInProgress, SetupError> {
        let Ok(players) = <[Player; 2]>::try_from(self.players) else {
            return Err(SetupError::MissingPlayers);
        };
        info!(x = %players[0].name(), o = %players[1].name(), "Match started");
        Ok(MatchInProgress {
            board: self.board,
            players,
            turn: 0,
            history: Vec::new(),
        })
    }
}

// ─────────────────────────────────────────────────────────────
//  InProgress Phase
// ─────────────────────────────────────────────────────────────

/// Match in progress: accepts moves.
///
/// The player to move is chosen by `turn % 2`; the turn counter only
/// advances on an accepted move.
#[derive(Debug, Clone)]
pub struct MatchInProgress {
    pub(crate) board: Board,
    pub(crate) players: [Player; 2],
    pub(crate) turn: usize,
    pub(crate) history: Vec<Move>,
}

impl MatchInProgress {
    /// Seats both players and starts the match in one step.
    #[instrument(skip(x, o))]
    pub fn with_players(x: impl Into<String>, o: impl Into<String>) -> Result<Self, SetupError> {
        let mut setup = MatchSetup::new();
        setup.register(x)?;
        setup.register(o)?;
        setup.start()
    }

    /// Checks a move request against the board without applying it.
    #[instrument(skip(self), fields(turn = self.turn))]
    pub fn validate(&self, row: i64, col: i64) -> Result<Coord, MoveError> {
        MoveContract::pre(self, &RawMove::new(row, col))
    }

    /// Plays the current player's marker at `(row, col)`.
    ///
    /// On success returns the next phase. On rejection the match comes back
    /// untouched inside [`MoveRejected`] so the caller can ask again.
    #[instrument(skip(self), fields(turn = self.turn, marker = %self.current_marker()))]
    pub fn play(self, row: i64, col: i64) -> Result<MatchResult, MoveRejected> {
        match self.validate(row, col) {
            Ok(coord) => Ok(self.apply(coord)),
            Err(error) => {
                debug!(%error, "Move rejected");
                Err(MoveRejected { game: self, error })
            }
        }
    }

    /// Plays at an already-checked coordinate.
    ///
    /// Coordinates are always in range, so the only rejection is an
    /// occupied cell.
    #[instrument(skip(self), fields(turn = self.turn))]
    pub fn play_at(self, coord: Coord) -> Result<MatchResult, MoveRejected> {
        self.play(coord.row() as i64, coord.col() as i64)
    }

    fn apply(mut self, coord: Coord) -> MatchResult {
        let before = cfg!(debug_assertions).then(|| self.clone());

        let marker = self.current_marker();
        self.board.set(coord, marker);
        self.history.push(Move::new(marker, coord, self.turn));
        self.turn += 1;
        debug!(%coord, %marker, turn = self.turn, "Move accepted");

        if let Some(before) = &before {
            assert_move_contract(before, &self);
        }

        match self.board.outcome() {
            Outcome::InProgress => MatchResult::InProgress(self),
            outcome => {
                info!(%outcome, moves = self.history.len(), "Match finished");
                MatchResult::Finished(MatchFinished {
                    board: self.board,
                    players: self.players,
                    history: self.history,
                    outcome,
                })
            }
        }
    }

    /// Replays a coordinate sequence from a fresh match.
    ///
    /// Every coordinate must be played: one left over after the match
    /// finishes fails with [`MoveError::MoveAfterTerminal`].
    #[instrument(skip(x, o))]
    pub fn replay(
        x: impl Into<String>,
        o: impl Into<String>,
        moves: &[Coord],
    ) -> Result<MatchResult, ReplayError> {
        let mut game = Self::with_players(x, o)?;

        for (played, coord) in moves.iter().enumerate() {
            match game.play_at(*coord).map_err(MoveRejected::into_error)? {
                MatchResult::InProgress(next) => game = next,
                finished @ MatchResult::Finished(_) => {
                    let remaining = moves.len() - played - 1;
                    if remaining > 0 {
                        warn!(remaining, "Moves submitted after the match finished");
                        return Err(MoveError::MoveAfterTerminal.into());
                    }
                    return Ok(finished);
                }
            }
        }

        Ok(MatchResult::InProgress(game))
    }

    /// Marker of the player whose turn it is.
    pub fn current_marker(&self) -> Marker {
        Marker::for_turn(self.turn)
    }

    /// The player whose turn it is.
    pub fn to_move(&self) -> &Player {
        &self.players[self.turn % 2]
    }

    /// Turn counter (number of accepted moves).
    pub fn turn(&self) -> usize {
        self.turn
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Both players, X first.
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Returns move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Free cells.
    pub fn valid_moves(&self) -> Vec<Coord> {
        self.board.empty_cells()
    }
}

/// A move that was not applied, with the match handed back unchanged.
#[derive(Debug, Display)]
#[display("{error}")]
pub struct MoveRejected {
    game: MatchInProgress,
    error: MoveError,
}

impl MoveRejected {
    /// Why the move was rejected.
    pub fn error(&self) -> &MoveError {
        &self.error
    }

    /// The unchanged match.
    pub fn game(&self) -> &MatchInProgress {
        &self.game
    }

    /// Splits into the unchanged match and the error.
    pub fn into_parts(self) -> (MatchInProgress, MoveError) {
        (self.game, self.error)
    }

    /// Drops the match and keeps the error.
    pub fn into_error(self) -> MoveError {
        self.error
    }
}

// ─────────────────────────────────────────────────────────────
//  Finished Phase
// ─────────────────────────────────────────────────────────────

/// Match finished: outcome determined.
///
/// The outcome is always terminal (`Win` or `Draw`).
#[derive(Debug, Clone)]
pub struct MatchFinished {
    board: Board,
    players: [Player; 2],
    history: Vec<Move>,
    outcome: Outcome,
}

impl MatchFinished {
    /// Returns the outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// The player bound to the winning marker, if any.
    pub fn winner(&self) -> Option<&Player> {
        let marker = self.outcome.winner()?;
        self.players.iter().find(|player| *player.marker() == marker)
    }

    /// Returns the final board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Both players, X first.
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Returns move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Serializable report of the finished match.
    pub fn summary(&self) -> MatchSummary {
        MatchSummary::new(
            self.players.to_vec(),
            self.outcome,
            self.winner().map(|player| player.name().clone()),
            self.history.clone(),
            (0..3).map(|row| self.board.render_row(row)).collect(),
        )
    }

    /// Starts over with the same players.
    #[instrument(skip(self))]
    pub fn rematch(self) -> MatchInProgress {
        MatchInProgress {
            board: Board::new(),
            players: self.players,
            turn: 0,
            history: Vec::new(),
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Result Type
// ─────────────────────────────────────────────────────────────

/// Result of an accepted move.
#[derive(Debug)]
pub enum MatchResult {
    /// Match continues.
    InProgress(MatchInProgress),
    /// Match finished.
    Finished(MatchFinished),
}

impl MatchResult {
    /// Board after the move.
    pub fn board(&self) -> &Board {
        match self {
            MatchResult::InProgress(game) => game.board(),
            MatchResult::Finished(game) => game.board(),
        }
    }

    /// Outcome after the move.
    pub fn outcome(&self) -> Outcome {
        match self {
            MatchResult::InProgress(_) => Outcome::InProgress,
            MatchResult::Finished(game) => game.outcome(),
        }
    }
}
