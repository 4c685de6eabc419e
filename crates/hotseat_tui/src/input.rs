//! Keyboard and mouse input mapping.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use hotseat_tictactoe::Position;
use ratatui::layout::{Position as ScreenPosition, Rect};

/// Cursor movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// One row up.
    Up,
    /// One row down.
    Down,
    /// One column left.
    Left,
    /// One column right.
    Right,
}

/// What the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor.
    MoveCursor(Direction),
    /// Place a mark under the cursor.
    PlayAtCursor,
    /// Place a mark at a specific cell.
    Play(Position),
    /// Discard the current game and start over.
    NewGame,
    /// Leave the program.
    Quit,
}

/// Moves the cursor one cell, staying put at the board edge.
pub fn move_cursor(cursor: Position, direction: Direction) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match direction {
        Direction::Up => row.checked_sub(1).map(|r| (r, col)),
        Direction::Down => Some((row + 1, col)),
        Direction::Left => col.checked_sub(1).map(|c| (row, c)),
        Direction::Right => Some((row, col + 1)),
    };

    target
        .and_then(|(r, c)| Position::from_row_col(r, c))
        .unwrap_or(cursor)
}

/// Maps a key press to an action.
pub fn key_action(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveCursor(Direction::Up)),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveCursor(Direction::Down)),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::MoveCursor(Direction::Left)),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::MoveCursor(Direction::Right)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::PlayAtCursor),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|d| Position::from_index(d as usize - 1))
            .map(Action::Play),
        KeyCode::Char('n') | KeyCode::Char('r') => Some(Action::NewGame),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

/// Maps a left click to the cell under the pointer.
///
/// `cells` are the screen areas of the nine cells in index order, as
/// returned by the last draw.
pub fn mouse_action(mouse: MouseEvent, cells: &[Rect; 9]) -> Option<Action> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }

    let point = ScreenPosition::new(mouse.column, mouse.row);
    cells
        .iter()
        .position(|area| area.contains(point))
        .and_then(Position::from_index)
        .map(Action::Play)
}
