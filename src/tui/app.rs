//! Application state: routes keys to screens and notifications to views.

use crossterm::event::KeyEvent;
use ratatui::Frame;
use rand::Rng;
use rand::rngs::StdRng;
use tictactoe_core::{Controller, Event, GameMode, Notification, Screen as GameScreen};
use tracing::{debug, info, instrument};

use crate::Config;
use crate::tui::screen::{Action, Screen};
use crate::tui::screens::{BoardScreen, DifficultyScreen, MenuScreen};

/// Main application state.
#[derive(Debug)]
pub struct App<R = StdRng> {
    controller: Controller<R>,
    menu: MenuScreen,
    difficulty: DifficultyScreen,
    board: BoardScreen,
    should_quit: bool,
}

impl App<StdRng> {
    /// Creates an application on the main menu.
    pub fn new(config: &Config) -> Self {
        Self::with_controller(Controller::new(), config)
    }
}

impl<R: Rng> App<R> {
    /// Creates an application around an existing controller.
    pub fn with_controller(controller: Controller<R>, config: &Config) -> Self {
        Self {
            controller,
            menu: MenuScreen::new(),
            difficulty: DifficultyScreen::new(*config.default_difficulty()),
            board: BoardScreen::new(),
            should_quit: false,
        }
    }

    /// Gets the game controller.
    pub fn controller(&self) -> &Controller<R> {
        &self.controller
    }

    /// Gets the board view.
    pub fn board(&self) -> &BoardScreen {
        &self.board
    }

    /// Checks if the user asked to exit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Routes a key press to the active screen.
    #[instrument(skip(self, key), fields(code = ?key.code))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        let action = match self.controller.screen() {
            GameScreen::Menu => self.menu.handle_key(key),
            GameScreen::DifficultySelect => self.difficulty.handle_key(key),
            GameScreen::Playing { .. } | GameScreen::GameOver { .. } => self.board.handle_key(key),
        };

        match action {
            Action::Stay => {}
            Action::Send(event) => self.dispatch(event),
            Action::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
        }
    }

    /// Forwards an event to the controller and applies what changed.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, event: Event) {
        let notifications = self.controller.handle(event);
        debug!(count = notifications.len(), "Applying notifications");
        for notification in &notifications {
            match notification {
                Notification::ShowMenu => self.board = BoardScreen::new(),
                Notification::ShowDifficultySelect => {}
                other => self.board.apply(other),
            }
        }
        if let GameScreen::Playing { mode, difficulty } = self.controller.screen() {
            let title = match (mode, difficulty) {
                (GameMode::HumanVsComputer, Some(d)) => format!("{} ({})", mode, d),
                _ => mode.to_string(),
            };
            self.board.set_title(title);
        }
    }

    /// Draws the active screen.
    pub fn render(&self, frame: &mut Frame) {
        match self.controller.screen() {
            GameScreen::Menu => self.menu.render(frame),
            GameScreen::DifficultySelect => self.difficulty.render(frame),
            GameScreen::Playing { .. } | GameScreen::GameOver { .. } => self.board.render(frame),
        }
    }
}
