//! Move rejection reasons.

use super::Position;

/// Reason a move was not applied.
///
/// `GameState::apply_move` treats every variant as "nothing happens";
/// `GameState::try_apply_move` reports it to callers that care why.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The index does not name a square on the board.
    #[display("Position {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
