//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating a board. Rules are separated from board
//! storage so the state machine and its contracts can share them.

pub mod draw;
pub mod status;
pub mod win;

pub use draw::is_full;
pub use status::{GameStatus, evaluate_status};
pub use win::{Line, winning_line};
