//! Terminal status evaluation.

use super::draw::is_full;
use super::win::{Line, winning_line};
use crate::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Current status of the game, derived entirely from the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    Ongoing,
    /// Game ended in a win.
    Won {
        /// The player who completed the line.
        player: Player,
        /// The completed line.
        line: Line,
    },
    /// Board is full with no completed line.
    Draw,
}

impl GameStatus {
    /// Returns true if no further moves are accepted.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::Ongoing)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won { player, .. } => Some(*player),
            _ => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn line(&self) -> Option<Line> {
        match self {
            GameStatus::Won { line, .. } => Some(*line),
            _ => None,
        }
    }
}

/// Evaluates the status of a board.
///
/// A completed line wins; otherwise a full board is a draw; otherwise the
/// game is ongoing.
#[instrument]
pub fn evaluate_status(board: &Board) -> GameStatus {
    if let Some((player, line)) = winning_line(board) {
        GameStatus::Won { player, line }
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::Ongoing
    }
}
