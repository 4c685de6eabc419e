//! Turn order invariant: players alternate X, O, X, O, ...

use super::Invariant;
use crate::{GameState, Player};

/// Invariant: the active player is determined by the marks on the board.
///
/// X is active when both players have placed the same number of marks,
/// O otherwise. Since X always opens, this is the same as strict alternation.
pub struct TurnOrderInvariant;

impl Invariant<GameState> for TurnOrderInvariant {
    fn holds(game: &GameState) -> bool {
        let expected = if game.move_count() % 2 == 0 {
            Player::X
        } else {
            Player::O
        };
        game.active_player() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
