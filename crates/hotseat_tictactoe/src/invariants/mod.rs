//! First-class invariants for tic-tac-toe.
//!
//! Invariants are logical properties that must hold for every reachable
//! game state. They are checked after each move in debug builds and can
//! be tested independently.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of invariants over the same state.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let checks = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ];

        let violations: Vec<_> = checks
            .into_iter()
            .filter(|(held, _)| !held)
            .map(|(_, description)| InvariantViolation::new(description))
            .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod derived_status;
pub mod mark_balance;
pub mod turn_order;

pub use derived_status::DerivedStatusInvariant;
pub use mark_balance::MarkBalanceInvariant;
pub use turn_order::TurnOrderInvariant;

/// All game-state invariants as a composable set.
pub type GameStateInvariants = (
    MarkBalanceInvariant,
    TurnOrderInvariant,
    DerivedStatusInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, GameState, GameStatus, Player};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        assert!(GameStateInvariants::check_all(&GameState::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let game = [0, 4, 2]
            .into_iter()
            .fold(GameState::new(), |game, index| game.apply_move(index));
        assert!(GameStateInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let mut game = GameState::new();
        game.board = "OO. ... ...".parse::<Board>().unwrap();
        game.active_player = Player::O;
        game.status = GameStatus::Draw;

        let violations = GameStateInvariants::check_all(&game).unwrap_err();
        assert_eq!(violations.len(), 3);
    }
}
