//! Derived status invariant: the cached status matches the board.

use super::Invariant;
use crate::{GameState, evaluate_status};

/// Invariant: the stored status equals a fresh evaluation of the board.
pub struct DerivedStatusInvariant;

impl Invariant<GameState> for DerivedStatusInvariant {
    fn holds(game: &GameState) -> bool {
        *game.status() == evaluate_status(game.board())
    }

    fn description() -> &'static str {
        "Status is derived from the board"
    }
}
