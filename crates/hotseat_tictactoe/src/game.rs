//! Immutable game state and its transitions.
//!
//! Every transition returns a new [`GameState`]; the value it was called on
//! is never modified, so readers holding an older state never observe a
//! partial update.

use super::action::MoveError;
use super::contracts::{Contract, MoveContract};
use super::rules::{GameStatus, Line, evaluate_status};
use super::{Board, Player, Position, Square};
use serde::Serialize;
use tracing::{debug, info, instrument};

/// Complete game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GameState {
    /// The board.
    pub(crate) board: Board,
    /// Player whose mark the next accepted move places.
    pub(crate) active_player: Player,
    /// Cached result of evaluating `board`.
    pub(crate) status: GameStatus,
}

impl GameState {
    /// Creates a new game: empty board, X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            active_player: Player::X,
            status: GameStatus::Ongoing,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the square at `pos`.
    pub fn square(&self, pos: Position) -> Square {
        self.board.get(pos)
    }

    /// Returns the player to move.
    ///
    /// Only meaningful while the game is ongoing.
    pub fn active_player(&self) -> Player {
        self.active_player
    }

    /// Returns the game status.
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// Returns true once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Returns the winner, if any.
    pub fn winner(&self) -> Option<Player> {
        self.status.winner()
    }

    /// Returns the completed line, if any.
    pub fn winning_line(&self) -> Option<Line> {
        self.status.line()
    }

    /// Number of marks placed so far.
    pub fn move_count(&self) -> usize {
        self.board.filled()
    }

    /// Positions that would currently accept a move.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.is_over() {
            Vec::new()
        } else {
            Position::empty_on(&self.board)
        }
    }

    /// Applies a move at a raw board index (0-8).
    ///
    /// Illegal moves (index off the board, occupied square, finished game)
    /// are ignored and return the state unchanged.
    #[must_use]
    #[instrument(skip(self), fields(player = %self.active_player))]
    pub fn apply_move(&self, index: usize) -> GameState {
        match self.try_apply_move(index) {
            Ok(next) => next,
            Err(err) => {
                debug!(%err, "Ignoring rejected move");
                *self
            }
        }
    }

    /// Applies a move at a raw board index, reporting why it was rejected.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`] for indices past 8, otherwise
    /// whatever [`GameState::try_place`] returns.
    #[instrument(skip(self))]
    pub fn try_apply_move(&self, index: usize) -> Result<GameState, MoveError> {
        let pos = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        self.try_place(pos)
    }

    /// Places the active player's mark at `pos`, ignoring illegal moves.
    #[must_use]
    pub fn place(&self, pos: Position) -> GameState {
        self.apply_move(pos.to_index())
    }

    /// Places the active player's mark at `pos`.
    ///
    /// Contract enforcement:
    /// - Preconditions checked always
    /// - Postconditions checked in debug builds only
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] once the game is won or drawn and
    /// [`MoveError::SquareOccupied`] when `pos` already holds a mark.
    #[instrument(skip(self), fields(position = %pos, player = %self.active_player))]
    pub fn try_place(&self, pos: Position) -> Result<GameState, MoveError> {
        MoveContract::pre(self, &pos)?;

        let board = self.board.with_mark(pos, self.active_player);
        let next = GameState {
            board,
            active_player: self.active_player.opponent(),
            status: evaluate_status(&board),
        };

        #[cfg(debug_assertions)]
        MoveContract::post(self, &next)?;

        match next.status {
            GameStatus::Ongoing => debug!("Move applied"),
            GameStatus::Won { player, line } => {
                info!(winner = %player, line = ?line.indices(), "Game won")
            }
            GameStatus::Draw => info!("Game drawn"),
        }

        Ok(next)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Applies a move at `index`, returning the unchanged state if it is illegal.
pub fn apply_move(state: &GameState, index: usize) -> GameState {
    state.apply_move(index)
}

/// Returns a fresh game, discarding whatever came before.
#[instrument]
pub fn reset() -> GameState {
    debug!("Starting new game");
    GameState::new()
}
