//! Stateless UI rendering for tic-tac-toe.

use crate::app::App;
use hotseat_tictactoe::{GameStatus, Player, Position, Square};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

const CELL_WIDTH: u16 = 9;
const CELL_HEIGHT: u16 = 3;
const GRID_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const GRID_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

const HELP: &str = "←↑↓→ move · Enter place · 1-9 place · n new game · q quit";

/// Screen regions of one frame.
struct Regions {
    title: Rect,
    status: Rect,
    cells: [Rect; 9],
    hint: Rect,
    footer: Rect,
}

fn regions(area: Rect) -> Regions {
    let [title, status, body, hint, footer] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(3),
        Constraint::Min(GRID_HEIGHT),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    let grid = center_rect(body, GRID_WIDTH, GRID_HEIGHT);
    let rows: [Rect; 3] = Layout::vertical([Constraint::Length(CELL_HEIGHT); 3])
        .spacing(1)
        .areas(grid);

    let mut cells = [Rect::default(); 9];
    for (row, row_area) in rows.into_iter().enumerate() {
        let cols: [Rect; 3] = Layout::horizontal([Constraint::Length(CELL_WIDTH); 3])
            .spacing(1)
            .areas(row_area);
        cells[row * 3..row * 3 + 3].copy_from_slice(&cols);
    }

    Regions {
        title,
        status,
        cells,
        hint,
        footer,
    }
}

/// Screen areas of the nine cells for a frame of the given size.
pub fn cell_areas(area: Rect) -> [Rect; 9] {
    regions(area).cells
}

/// Renders the whole game screen and returns where the cells were drawn.
pub fn draw(frame: &mut Frame, app: &App) -> [Rect; 9] {
    let regions = regions(frame.area());

    draw_title(frame, regions.title);
    draw_status(frame, regions.status, app);
    for pos in Position::ALL {
        draw_cell(frame, regions.cells[pos.to_index()], app, pos);
    }

    let hint = Paragraph::new(app.cell_label(app.cursor()))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(hint, regions.hint);

    draw_footer(frame, regions.footer, app);

    regions.cells
}

fn draw_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(vec![
        Line::from(Span::styled(
            "Tic Tac Toe",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Two players on the same device",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(title, area);
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App) {
    let color = match app.game().status() {
        GameStatus::Ongoing => Color::Yellow,
        GameStatus::Won { .. } => Color::Green,
        GameStatus::Draw => Color::Magenta,
    };

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::bordered().title(format!(" Game {} ", app.game_key() + 1)));
    frame.render_widget(status, area);
}

fn mark_style(player: Player) -> Style {
    let color = match player {
        Player::X => Color::Blue,
        Player::O => Color::Red,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position) {
    let (symbol, mut style) = match app.game().square(pos) {
        Square::Empty => (" ".to_string(), Style::default().fg(Color::DarkGray)),
        Square::Occupied(player) => (player.to_string(), mark_style(player)),
    };

    let winning = app
        .game()
        .winning_line()
        .is_some_and(|line| line.contains(pos));
    if winning {
        style = style.bg(Color::Green).fg(Color::Black);
    }

    let mut border = Style::default().fg(Color::DarkGray);
    if pos == app.cursor() {
        border = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
        if !winning {
            style = style.bg(Color::White).fg(Color::Black);
        }
    }

    let cell = Paragraph::new(Line::from(Span::styled(symbol, style)))
        .alignment(Alignment::Center)
        .block(Block::bordered().border_style(border));
    frame.render_widget(cell, area);
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(HELP, Style::default().fg(Color::DarkGray))];
    if !app.game().is_over() {
        let player = app.game().active_player();
        spans.push(Span::raw("   "));
        spans.push(Span::styled(format!("Turn: {}", player), mark_style(player)));
    }

    let footer = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [_, vert, _] = Layout::vertical([
        Constraint::Length(area.height.saturating_sub(height) / 2),
        Constraint::Length(height),
        Constraint::Min(0),
    ])
    .areas(area);

    let [_, rect, _] = Layout::horizontal([
        Constraint::Length(area.width.saturating_sub(width) / 2),
        Constraint::Length(width),
        Constraint::Min(0),
    ])
    .areas(vert);
    rect
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cells_do_not_overlap() {
        let cells = cell_areas(Rect::new(0, 0, 80, 24));
        for (i, a) in cells.iter().enumerate() {
            assert_eq!(a.width, CELL_WIDTH);
            assert_eq!(a.height, CELL_HEIGHT);
            for b in &cells[i + 1..] {
                assert!(!a.intersects(*b));
            }
        }
    }

    #[test]
    fn test_cells_are_row_major() {
        let cells = cell_areas(Rect::new(0, 0, 80, 24));
        assert!(cells[0].x < cells[1].x && cells[1].x < cells[2].x);
        assert_eq!(cells[0].y, cells[2].y);
        assert!(cells[0].y < cells[3].y && cells[3].y < cells[6].y);
        assert_eq!(cells[0].x, cells[6].x);
    }
}
