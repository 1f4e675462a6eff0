//! Contract-based validation for tic-tac-toe moves.
//!
//! Contracts define correctness through preconditions and postconditions:
//! `{P(state, request)} move {Q(before, after)}`.

use super::action::MoveError;
use super::invariants::{InvariantSet, InvariantViolation, MatchInvariants};
use super::position::{Coord, RawMove};
use super::typestate::MatchInProgress;
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// What a satisfied precondition yields (e.g. a checked coordinate).
    type Checked;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<Self::Checked, MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

/// Precondition: row and column are on the board.
pub struct InBounds;

impl InBounds {
    /// Converts the request into a checked coordinate.
    #[instrument]
    pub fn check(request: &RawMove) -> Result<Coord, MoveError> {
        Coord::try_from(*request)
    }
}

/// Precondition: the target cell is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects coordinates that already hold a marker.
    #[instrument(skip(game))]
    pub fn check(coord: Coord, game: &MatchInProgress) -> Result<(), MoveError> {
        if game.board().is_empty(coord) {
            Ok(())
        } else {
            Err(MoveError::OccupiedCell(coord))
        }
    }
}

/// Composite precondition: in bounds, then empty.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move request.
    #[instrument(skip(game))]
    pub fn check(request: &RawMove, game: &MatchInProgress) -> Result<Coord, MoveError> {
        let coord = InBounds::check(request)?;
        CellIsEmpty::check(coord, game)?;
        Ok(coord)
    }
}

/// Contract for move actions.
///
/// Preconditions:
/// - Coordinate is on the board
/// - Cell is empty
///
/// Postconditions:
/// - Exactly one more move in the history and the turn counter advanced by one
/// - All [`MatchInvariants`] hold
pub struct MoveContract;

impl Contract<MatchInProgress, RawMove> for MoveContract {
    type Checked = Coord;

    fn pre(game: &MatchInProgress, request: &RawMove) -> Result<Coord, MoveError> {
        LegalMove::check(request, game)
    }

    fn post(before: &MatchInProgress, after: &MatchInProgress) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        if after.turn() != before.turn() + 1 || after.history().len() != before.history().len() + 1 {
            violations.push(InvariantViolation::new(
                "Accepted move advances the turn counter and history by exactly one",
            ));
        }
        if let Err(mut failed) = MatchInvariants::check_all(after) {
            violations.append(&mut failed);
        }
        if violations.is_empty() {
            Ok(())
        } else {
            warn!(?violations, "Move postcondition failed");
            Err(violations)
        }
    }
}

/// Asserts the move contract held (panics on violation in debug builds).
#[instrument(skip(before, after))]
pub fn assert_move_contract(before: &MatchInProgress, after: &MatchInProgress) {
    if cfg!(debug_assertions)
        && let Err(violations) = MoveContract::post(before, after)
    {
        panic!("move contract violated: {violations:?}");
    }
}
