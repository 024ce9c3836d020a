//! Board screen — renders the game from controller notifications.

use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_core::{Board, Event, Notification, Player};
use tracing::{debug, instrument};

use crate::tui::input::{digit_cell, move_cursor};
use crate::tui::screen::{Action, Screen};
use crate::tui::ui::draw_board;

const START_CURSOR: usize = 4;

/// What the players see while a game runs.
///
/// Holds only the last snapshot the controller sent; it never inspects the
/// session directly.
#[derive(Debug, Clone, Getters)]
pub struct BoardScreen {
    title: String,
    board: Board,
    current_player: Player,
    status: String,
    highlight: Option<[usize; 3]>,
    message: Option<String>,
    cursor: usize,
}

impl BoardScreen {
    /// Creates an empty board view.
    pub fn new() -> Self {
        Self {
            title: String::new(),
            board: Board::new(),
            current_player: Player::X,
            status: String::new(),
            highlight: None,
            message: None,
            cursor: START_CURSOR,
        }
    }

    /// Sets the heading shown above the board.
    pub fn set_title(&mut self, title: String) {
        self.title = title;
    }

    /// Applies one notification from the controller.
    #[instrument(skip(self))]
    pub fn apply(&mut self, notification: &Notification) {
        match notification {
            Notification::Render {
                board,
                current_player,
                status,
            } => {
                self.board = *board;
                self.current_player = *current_player;
                self.status = status.clone();
                self.highlight = None;
                self.message = None;
            }
            Notification::HighlightWinningLine(line) => self.highlight = Some(*line),
            Notification::ShowTerminalMessage(text) => self.message = Some(text.clone()),
            Notification::ShowMenu | Notification::ShowDifficultySelect => {
                debug!("Screen change ignored by board view");
            }
        }
    }
}

impl Default for BoardScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for BoardScreen {
    #[instrument(skip(self, frame))]
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(11),   // Board
                Constraint::Length(3), // Status
                Constraint::Length(3), // Help
            ])
            .split(area);

        let title = Paragraph::new(self.title.as_str())
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Tic Tac Toe"));
        frame.render_widget(title, chunks[0]);

        let cursor = self.message.is_none().then_some(self.cursor);
        draw_board(frame, chunks[1], &self.board, cursor, self.highlight);

        let (text, color) = match &self.message {
            Some(message) => (message.as_str(), Color::Green),
            None => (self.status.as_str(), Color::Yellow),
        };
        let status = Paragraph::new(text)
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(status, chunks[2]);

        let help = Paragraph::new(
            "←↑↓→/1-9: Move | Enter: Place | u: Undo | r: Redo | Esc: Back | q: Quit",
        )
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[3]);
    }

    #[instrument(skip(self, key))]
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        if let Some(index) = digit_cell(key.code) {
            self.cursor = index;
            return Action::Send(Event::CellClicked(index));
        }
        match key.code {
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key.code);
                Action::Stay
            }
            KeyCode::Enter | KeyCode::Char(' ') => Action::Send(Event::CellClicked(self.cursor)),
            KeyCode::Char('u') | KeyCode::Char('U') => Action::Send(Event::Undo),
            KeyCode::Char('r') | KeyCode::Char('R') => Action::Send(Event::Redo),
            KeyCode::Esc | KeyCode::Char('b') | KeyCode::Char('B') => {
                Action::Send(Event::BackToMenu)
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => Action::Quit,
            _ => Action::Stay,
        }
    }
}
