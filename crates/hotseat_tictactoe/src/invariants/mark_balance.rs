//! Mark balance invariant: X never trails O and leads by at most one.

use super::Invariant;
use crate::{GameState, Player};

/// Invariant: the board holds as many X marks as O marks, or one more.
pub struct MarkBalanceInvariant;

impl Invariant<GameState> for MarkBalanceInvariant {
    fn holds(game: &GameState) -> bool {
        let x = game.board().count(Player::X);
        let o = game.board().count(Player::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X has as many marks as O, or one more"
    }
}
