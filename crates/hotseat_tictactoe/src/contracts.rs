//! Contract-based validation for tic-tac-toe moves.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P(state, position)} place {Q(before, after)}.

use super::action::MoveError;
use super::invariants::{GameStateInvariants, InvariantSet};
use super::{GameState, Position, Square};
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// Precondition: The game must still be ongoing.
pub struct GameOngoing;

impl GameOngoing {
    /// Rejects moves once the game has been won or drawn.
    pub fn check(game: &GameState) -> Result<(), MoveError> {
        if game.is_over() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: The square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects moves onto an occupied square.
    pub fn check(pos: Position, game: &GameState) -> Result<(), MoveError> {
        if game.board().is_empty(pos) {
            Ok(())
        } else {
            Err(MoveError::SquareOccupied(pos))
        }
    }
}

/// Postcondition: exactly one previously empty square now holds the mover's mark.
pub struct SingleMarkPlaced;

impl SingleMarkPlaced {
    /// Compares the boards before and after a move.
    #[instrument(skip(before, after))]
    pub fn holds(before: &GameState, after: &GameState) -> bool {
        let mover = Square::Occupied(before.active_player());
        let changed: Vec<_> = before
            .board()
            .squares()
            .iter()
            .zip(after.board().squares())
            .filter(|(b, a)| b != a)
            .collect();

        let valid = changed.len() == 1
            && changed
                .iter()
                .all(|(b, a)| b.is_empty() && **a == mover);
        if !valid {
            warn!(changed = changed.len(), "Single mark postcondition violated");
        }
        valid
    }
}

/// Contract for placing a mark.
///
/// Preconditions:
/// - Game is ongoing
/// - Square is empty
///
/// Postconditions:
/// - Exactly one empty square received the mover's mark
/// - All game-state invariants hold
pub struct MoveContract;

impl Contract<GameState, Position> for MoveContract {
    fn pre(game: &GameState, pos: &Position) -> Result<(), MoveError> {
        GameOngoing::check(game)?;
        SquareIsEmpty::check(*pos, game)?;
        Ok(())
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), MoveError> {
        if !SingleMarkPlaced::holds(before, after) {
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: exactly one square must change".to_string(),
            ));
        }

        GameStateInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
