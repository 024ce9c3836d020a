//! Difficulty picker shown before a game against the computer.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use strum::IntoEnumIterator;
use tictactoe_core::{Difficulty, Event};
use tracing::{debug, info, instrument};

use crate::tui::screen::{Action, Screen, step_selection};

/// State for the difficulty selection screen.
#[derive(Debug)]
pub struct DifficultyScreen {
    options: Vec<Difficulty>,
    list_state: ListState,
}

impl DifficultyScreen {
    /// Creates the picker with `preselected` highlighted.
    #[instrument]
    pub fn new(preselected: Difficulty) -> Self {
        debug!("Initializing DifficultyScreen");
        let options: Vec<Difficulty> = Difficulty::iter().collect();
        let mut state = ListState::default();
        state.select(options.iter().position(|&d| d == preselected).or(Some(0)));
        Self {
            options,
            list_state: state,
        }
    }

    /// Returns the highlighted difficulty.
    pub fn selected(&self) -> Difficulty {
        let idx = self.list_state.selected().unwrap_or(0);
        self.options[idx.min(self.options.len() - 1)]
    }
}

impl Screen for DifficultyScreen {
    #[instrument(skip(self, frame))]
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(3),
            ])
            .split(area);

        let title = Paragraph::new("Choose Difficulty")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let items: Vec<ListItem> = self
            .options
            .iter()
            .map(|d| ListItem::new(d.to_string()))
            .collect();
        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Computer"))
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        let mut list_state = self.list_state.clone();
        frame.render_stateful_widget(list, chunks[1], &mut list_state);

        let help = Paragraph::new("↑↓: Navigate | Enter: Start | Esc: Back | q: Quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[2]);
    }

    #[instrument(skip(self, key))]
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up => {
                step_selection(&mut self.list_state, self.options.len(), false);
                Action::Stay
            }
            KeyCode::Down => {
                step_selection(&mut self.list_state, self.options.len(), true);
                Action::Stay
            }
            KeyCode::Enter => {
                let difficulty = self.selected();
                info!(%difficulty, "Difficulty selected");
                Action::Send(Event::ChooseDifficulty(difficulty))
            }
            KeyCode::Esc | KeyCode::Char('b') => Action::Send(Event::BackToMenu),
            KeyCode::Char('q') | KeyCode::Char('Q') => Action::Quit,
            _ => Action::Stay,
        }
    }
}
