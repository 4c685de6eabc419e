//! Core domain types for tic-tac-toe.

use super::position::Position;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the player occupying this square, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }

    /// Returns true if no mark has been placed here.
    pub fn is_empty(self) -> bool {
        self == Square::Empty
    }
}

/// 3x3 tic-tac-toe board.
///
/// The board is a plain value: placing a mark returns a new board and
/// leaves the original untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Creates a board from squares in row-major order.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Gets the square at a raw index, or `None` when the index is off the board.
    pub fn get_index(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Returns a copy of this board with `player`'s mark at `pos`.
    #[must_use]
    pub fn with_mark(mut self, pos: Position, player: Player) -> Self {
        self.squares[pos.to_index()] = Square::Occupied(player);
        self
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Number of squares holding `player`'s mark.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }

    /// Number of occupied squares.
    pub fn filled(&self) -> usize {
        self.squares.iter().filter(|s| !s.is_empty()).count()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.squares.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f)?;
                writeln!(f, "-+-+-")?;
            }
            for (col, square) in cells.iter().enumerate() {
                if col > 0 {
                    write!(f, "|")?;
                }
                match square {
                    Square::Empty => write!(f, "{}", row * 3 + col + 1)?,
                    Square::Occupied(player) => write!(f, "{}", player)?,
                }
            }
        }
        Ok(())
    }
}

/// Board notation could not be parsed.
#[derive(Debug, Clone, Display, Error)]
#[display("Board parse error: {} at {}:{}", message, file, line)]
pub struct BoardParseError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl BoardParseError {
    /// Creates a new parse error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses nine cells in row-major order.
    ///
    /// `X`/`O` are marks, `.` and `-` are empty. Whitespace, `/` and `|`
    /// are separators and ignored, so `"XO. / .X. / ..O"` is accepted.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut squares = [Square::Empty; 9];
        let mut count = 0;

        for c in s.chars() {
            let square = match c {
                'X' | 'x' => Square::Occupied(Player::X),
                'O' | 'o' => Square::Occupied(Player::O),
                '.' | '-' => Square::Empty,
                c if c.is_whitespace() || c == '/' || c == '|' => continue,
                other => {
                    return Err(BoardParseError::new(format!(
                        "Unexpected character {:?}",
                        other
                    )));
                }
            };
            if count == 9 {
                return Err(BoardParseError::new("More than 9 cells"));
            }
            squares[count] = square;
            count += 1;
        }

        if count != 9 {
            return Err(BoardParseError::new(format!(
                "Expected 9 cells, found {}",
                count
            )));
        }

        Ok(Self { squares })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!(board.squares().iter().all(|s| s.is_empty()));
        assert_eq!(board.filled(), 0);
    }

    #[test]
    fn test_with_mark_leaves_original_untouched() {
        let board = Board::new();
        let marked = board.with_mark(Position::Center, Player::X);

        assert!(board.is_empty(Position::Center));
        assert_eq!(marked.get(Position::Center), Square::Occupied(Player::X));
        assert_eq!(marked.filled(), 1);
    }

    #[test]
    fn test_get_index_out_of_bounds() {
        let board = Board::new();
        assert_eq!(board.get_index(8), Some(Square::Empty));
        assert_eq!(board.get_index(9), None);
    }

    #[test]
    fn test_parse_notation() {
        let board: Board = "XO. / .X. / ..O".parse().unwrap();
        assert_eq!(board.get(Position::TopLeft), Square::Occupied(Player::X));
        assert_eq!(board.get(Position::TopCenter), Square::Occupied(Player::O));
        assert_eq!(board.get(Position::Center), Square::Occupied(Player::X));
        assert_eq!(board.get(Position::BottomRight), Square::Occupied(Player::O));
        assert_eq!(board.count(Player::X), 2);
        assert_eq!(board.count(Player::O), 2);
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        assert!("XO.".parse::<Board>().is_err());
        assert!("XO.XO.XO.X".parse::<Board>().is_err());
    }

    #[test]
    fn test_parse_rejects_unknown_mark() {
        let err = "XO.XO.XOZ".parse::<Board>().unwrap_err();
        assert!(err.message.contains("'Z'"));
    }

    #[test]
    fn test_display_grid() {
        let board: Board = "X.. .O. ...".parse().unwrap();
        assert_eq!(board.to_string(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_opponent() {
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.opponent(), Player::X);
    }
}
