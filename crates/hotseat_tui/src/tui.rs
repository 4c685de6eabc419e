//! Terminal setup and the blocking event loop.

use crate::app::App;
use crate::config::TuiConfig;
use crate::input::{key_action, mouse_action};
use crate::ui;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io::{self, Stdout};
use tracing::{error, info, instrument};

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Runs the game until the user quits.
///
/// The terminal is restored before any error is returned.
#[instrument(skip_all, fields(mouse = *config.mouse()))]
pub fn run_tui(config: &TuiConfig) -> Result<()> {
    info!("Starting hotseat TUI");

    let mut terminal = setup_terminal(*config.mouse()).context("Failed to set up terminal")?;
    let mut app = App::new();

    let res = run_game(&mut terminal, &mut app);

    restore_terminal(&mut terminal, *config.mouse()).context("Failed to restore terminal")?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(games = app.game_key() + 1, "Exiting");
    res
}

fn setup_terminal(mouse: bool) -> Result<Term> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if mouse {
        execute!(stdout, EnableMouseCapture)?;
    }
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(terminal: &mut Term, mouse: bool) -> Result<()> {
    disable_raw_mode()?;
    if mouse {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn run_game(terminal: &mut Term, app: &mut App) -> Result<()> {
    let mut cells = [Rect::default(); 9];

    while !app.should_quit() {
        terminal.draw(|frame| cells = ui::draw(frame, app))?;

        let action = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => key_action(key),
            Event::Mouse(mouse) => mouse_action(mouse, &cells),
            _ => None,
        };

        if let Some(action) = action {
            app.handle(action);
        }
    }

    Ok(())
}
