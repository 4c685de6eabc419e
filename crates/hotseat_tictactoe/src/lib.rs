//! Pure tic-tac-toe game logic for two players sharing one device.
//!
//! The engine owns the board, whose turn it is and whether the game has
//! concluded. It performs no I/O: a presentation layer forwards clicks to
//! [`apply_move`] and [`reset`] and renders the [`GameState`] it gets back.
//!
//! # Example
//!
//! ```
//! use hotseat_tictactoe::{GameState, GameStatus, Player};
//!
//! let game = [0, 1, 3, 2, 6]
//!     .into_iter()
//!     .fold(GameState::new(), |game, index| game.apply_move(index));
//!
//! match game.status() {
//!     GameStatus::Won { player, line } => {
//!         assert_eq!(*player, Player::X);
//!         assert_eq!(line.indices(), [0, 3, 6]);
//!     }
//!     other => panic!("unexpected status {other:?}"),
//! }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod game;
mod invariants;
mod position;
mod rules;
mod types;

pub use action::MoveError;
pub use contracts::{Contract, GameOngoing, MoveContract, SingleMarkPlaced, SquareIsEmpty};
pub use game::{GameState, apply_move, reset};
pub use invariants::{
    DerivedStatusInvariant, GameStateInvariants, Invariant, InvariantSet, InvariantViolation,
    MarkBalanceInvariant, TurnOrderInvariant,
};
pub use position::Position;
pub use rules::{GameStatus, Line, evaluate_status, is_full, winning_line};
pub use rules::win::check_winner;
pub use types::{Board, BoardParseError, Player, Square};
