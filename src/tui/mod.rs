//! Terminal UI: the presentation layer around the game controller.

mod app;
mod input;
mod screen;
mod screens;
mod ui;

pub use app::App;
pub use screen::{Action, Screen};
pub use screens::{BoardScreen, DifficultyScreen, MenuScreen};

use anyhow::Result;
use crossterm::{
    event::{self, Event as TermEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{error, info, instrument};

use crate::Config;

/// Runs the terminal UI until the user quits.
///
/// Sets up the terminal, drives the event loop, and restores the terminal
/// on exit even when the loop fails.
#[instrument(skip(config))]
pub fn run(config: &Config) -> Result<()> {
    info!("Starting tic-tac-toe TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);
    let res = event_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Event loop error");
    }
    res
}

fn event_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|f| app.render(f))?;

        // Blocks until the next key; all game work happens inside handle_key.
        if let TermEvent::Key(key) = event::read()? {
            // Skip key release events (crossterm fires both press and release on some platforms).
            if key.kind == KeyEventKind::Release {
                continue;
            }
            app.handle_key(key);
        }
    }
    info!("Event loop finished");
    Ok(())
}
