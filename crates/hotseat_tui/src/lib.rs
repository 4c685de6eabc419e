//! Terminal front end for hot-seat tic-tac-toe.
//!
//! Renders [`hotseat_tictactoe::GameState`] with ratatui and forwards
//! keyboard and mouse input to the engine. All game rules live in the
//! engine crate; this crate only displays state and translates input.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod tui;
mod ui;

pub use app::App;
pub use cli::Cli;
pub use config::{ConfigError, TuiConfig};
pub use input::{Action, Direction, key_action, mouse_action, move_cursor};
pub use tui::run_tui;
pub use ui::{cell_areas, draw};
