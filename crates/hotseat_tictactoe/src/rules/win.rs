//! Win detection logic for tic-tac-toe.

use crate::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One of the eight triples that wins the game when filled by one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line([Position; 3]);

impl Line {
    /// All winning lines, in the order they are checked.
    pub const ALL: [Line; 8] = [
        // Rows
        Line([Position::TopLeft, Position::TopCenter, Position::TopRight]),
        Line([Position::MiddleLeft, Position::Center, Position::MiddleRight]),
        Line([Position::BottomLeft, Position::BottomCenter, Position::BottomRight]),
        // Columns
        Line([Position::TopLeft, Position::MiddleLeft, Position::BottomLeft]),
        Line([Position::TopCenter, Position::Center, Position::BottomCenter]),
        Line([Position::TopRight, Position::MiddleRight, Position::BottomRight]),
        // Diagonals
        Line([Position::TopLeft, Position::Center, Position::BottomRight]),
        Line([Position::TopRight, Position::Center, Position::BottomLeft]),
    ];

    /// The three positions of this line.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// The three board indices of this line.
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Position::to_index)
    }

    /// Returns true if `pos` lies on this line.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }

    /// Returns the player holding all three squares, if any.
    pub fn owner(&self, board: &Board) -> Option<Player> {
        let [a, b, c] = self.0;
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            sq.player()
        } else {
            None
        }
    }
}

/// Finds the first completed line on the board.
///
/// Lines are checked rows, then columns, then diagonals, so the result is
/// deterministic even for boards with more than one completed line.
#[instrument]
pub fn winning_line(board: &Board) -> Option<(Player, Line)> {
    Line::ALL
        .iter()
        .find_map(|line| line.owner(board).map(|player| (player, *line)))
}

/// Checks if there is a winner on the board.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Player> {
    winning_line(board).map(|(player, _)| player)
}
