//! Application state and logic.

use crate::input::{Action, move_cursor};
use hotseat_tictactoe::{GameState, GameStatus, Position, Square, reset};
use tracing::{debug, info, instrument};

/// Main application state.
#[derive(Debug, Clone)]
pub struct App {
    game: GameState,
    cursor: Position,
    game_key: u64,
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new() -> Self {
        Self {
            game: reset(),
            cursor: Position::Center,
            game_key: 0,
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Gets the cell under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Identity of the current game; changes every time a new game starts.
    pub fn game_key(&self) -> u64 {
        self.game_key
    }

    /// Returns true once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Applies a user action.
    #[instrument(skip(self), fields(game_key = self.game_key))]
    pub fn handle(&mut self, action: Action) {
        debug!(?action, "Handling action");

        match action {
            Action::MoveCursor(direction) => self.cursor = move_cursor(self.cursor, direction),
            Action::PlayAtCursor => self.play(self.cursor),
            Action::Play(pos) => {
                self.cursor = pos;
                self.play(pos);
            }
            Action::NewGame => self.new_game(),
            Action::Quit => {
                info!("Quit requested");
                self.should_quit = true;
            }
        }
    }

    /// Forwards a click on `pos` to the engine.
    ///
    /// Clicks on filled cells or after the game ended leave the game as is.
    pub fn play(&mut self, pos: Position) {
        self.game = self.game.place(pos);
    }

    /// Replaces the game with a fresh one under a new key.
    pub fn new_game(&mut self) {
        self.game = reset();
        self.game_key += 1;
        info!(game_key = self.game_key, "New game");
    }

    /// Human-readable status line.
    pub fn status_message(&self) -> String {
        match self.game.status() {
            GameStatus::Ongoing => format!("Player {}'s turn", self.game.active_player()),
            GameStatus::Won { player, .. } => format!("{} wins", player),
            GameStatus::Draw => "Draw".to_string(),
        }
    }

    /// Accessible description of a cell, e.g. `"Cell 5, X"`.
    pub fn cell_label(&self, pos: Position) -> String {
        match self.game.square(pos) {
            Square::Occupied(player) => format!("Cell {}, {}", pos.number(), player),
            Square::Empty if self.game.is_over() => {
                format!("Cell {}, empty, disabled", pos.number())
            }
            Square::Empty => format!("Cell {}, empty", pos.number()),
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Direction;
    use hotseat_tictactoe::Player;

    fn play_all(app: &mut App, cells: &[usize]) {
        for &index in cells {
            let pos = Position::from_index(index).unwrap();
            app.handle(Action::Play(pos));
        }
    }

    #[test]
    fn test_initial_status() {
        let app = App::new();
        assert_eq!(app.status_message(), "Player X's turn");
        assert_eq!(app.game_key(), 0);
    }

    #[test]
    fn test_first_click_marks_x() {
        let mut app = App::new();
        app.handle(Action::Play(Position::TopLeft));

        assert_eq!(app.game().square(Position::TopLeft), Square::Occupied(Player::X));
        assert_eq!(app.status_message(), "Player O's turn");
        assert_eq!(app.cursor(), Position::TopLeft);
    }

    #[test]
    fn test_play_at_cursor() {
        let mut app = App::new();
        app.handle(Action::MoveCursor(Direction::Up));
        app.handle(Action::PlayAtCursor);
        assert_eq!(app.game().square(Position::TopCenter), Square::Occupied(Player::X));
    }

    #[test]
    fn test_win_and_draw_messages() {
        let mut app = App::new();
        play_all(&mut app, &[0, 1, 3, 2, 6]);
        assert_eq!(app.status_message(), "X wins");

        app.handle(Action::NewGame);
        play_all(&mut app, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert_eq!(app.status_message(), "Draw");
    }

    #[test]
    fn test_clicks_after_win_are_ignored() {
        let mut app = App::new();
        play_all(&mut app, &[0, 1, 3, 2, 6]);
        let finished = *app.game();

        app.handle(Action::Play(Position::BottomRight));
        assert_eq!(app.game(), &finished);
    }

    #[test]
    fn test_cell_labels() {
        let mut app = App::new();
        assert_eq!(app.cell_label(Position::Center), "Cell 5, empty");

        play_all(&mut app, &[4]);
        assert_eq!(app.cell_label(Position::Center), "Cell 5, X");

        play_all(&mut app, &[0, 2, 1, 6]);
        assert!(app.game().is_over());
        assert_eq!(app.cell_label(Position::BottomRight), "Cell 9, empty, disabled");
    }

    #[test]
    fn test_new_game_resets_and_rekeys() {
        let mut app = App::new();
        play_all(&mut app, &[4, 0]);

        app.handle(Action::NewGame);
        assert_eq!(app.game(), &GameState::new());
        assert_eq!(app.game_key(), 1);

        app.handle(Action::NewGame);
        assert_eq!(app.game_key(), 2);
    }

    #[test]
    fn test_quit() {
        let mut app = App::new();
        app.handle(Action::Quit);
        assert!(app.should_quit());
    }
}
