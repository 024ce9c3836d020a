//! Game controller — the state machine between the menus and the board.
//!
//! [`Controller::handle`] is a pure transition: it takes an input event,
//! updates the session, and returns the [`Notification`]s a renderer needs.
//! The computer's reply is computed inside the same call as the human move
//! that triggered it.

use super::ai::{self, Difficulty};
use super::rules::Outcome;
use super::session::Session;
use super::types::{COMPUTER_MARK, GameMode};
use super::view::Notification;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, instrument, warn};

/// Which screen the game is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Choosing between human and computer opponents.
    Menu,
    /// Choosing how strong the computer plays.
    DifficultySelect,
    /// A game is running.
    Playing {
        /// Opponent kind.
        mode: GameMode,
        /// Computer strength, for computer games.
        difficulty: Option<Difficulty>,
    },
    /// The last move ended the game. Never holds [`Outcome::InProgress`].
    GameOver {
        /// How the game ended.
        outcome: Outcome,
    },
}

/// Input forwarded by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// "Player vs Player" picked on the menu.
    ChooseHumanVsHuman,
    /// "Player vs Computer" picked on the menu.
    ChooseHumanVsComputer,
    /// A difficulty picked on the difficulty screen.
    ChooseDifficulty(Difficulty),
    /// Start a game directly, skipping the menus.
    NewGame {
        /// Opponent kind.
        mode: GameMode,
        /// Computer strength; Easy when omitted for a computer game.
        difficulty: Option<Difficulty>,
    },
    /// A board cell (0-8) was clicked.
    CellClicked(usize),
    /// Take back a move.
    Undo,
    /// Replay a taken-back move.
    Redo,
    /// Abandon the game and return to the menu.
    BackToMenu,
}

/// Drives screens and the active [`Session`].
#[derive(Debug)]
pub struct Controller<R = StdRng> {
    screen: Screen,
    session: Option<Session>,
    rng: R,
}

impl Controller<StdRng> {
    /// Creates a controller on the menu with an entropy-seeded computer player.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl Default for Controller<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Controller<R> {
    /// Creates a controller on the menu using the given random source.
    pub fn with_rng(rng: R) -> Self {
        Self {
            screen: Screen::Menu,
            session: None,
            rng,
        }
    }

    /// Returns the current screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Returns the running game, if any.
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Applies an input event and returns what changed.
    ///
    /// Events that make no sense on the current screen, illegal clicks and
    /// undo/redo with nothing to step through return no notifications.
    #[instrument(skip(self), fields(screen = ?self.screen))]
    pub fn handle(&mut self, event: Event) -> Vec<Notification> {
        match (self.screen, event) {
            (Screen::Menu, Event::ChooseHumanVsHuman) => {
                self.start(GameMode::HumanVsHuman, None)
            }
            (Screen::Menu, Event::ChooseHumanVsComputer) => {
                info!("Navigating to DifficultySelect");
                self.screen = Screen::DifficultySelect;
                vec![Notification::ShowDifficultySelect]
            }
            (Screen::DifficultySelect, Event::ChooseDifficulty(difficulty)) => {
                self.start(GameMode::HumanVsComputer, Some(difficulty))
            }
            (Screen::Menu | Screen::DifficultySelect, Event::NewGame { mode, difficulty }) => {
                self.start(mode, difficulty)
            }
            (Screen::Playing { .. }, Event::CellClicked(index)) => self.click(index),
            (Screen::Playing { .. } | Screen::GameOver { .. }, Event::Undo) => self.undo(),
            (Screen::Playing { .. } | Screen::GameOver { .. }, Event::Redo) => self.redo(),
            (
                Screen::DifficultySelect | Screen::Playing { .. } | Screen::GameOver { .. },
                Event::BackToMenu,
            ) => {
                info!("Returning to menu");
                self.session = None;
                self.screen = Screen::Menu;
                vec![Notification::ShowMenu]
            }
            (screen, event) => {
                debug!(?screen, ?event, "Event ignored on this screen");
                Vec::new()
            }
        }
    }

    fn start(&mut self, mode: GameMode, difficulty: Option<Difficulty>) -> Vec<Notification> {
        let session = Session::new(mode, difficulty);
        info!(%mode, difficulty = ?session.difficulty(), "Starting game");
        self.session = Some(session);
        self.refresh()
    }

    fn click(&mut self, index: usize) -> Vec<Notification> {
        let Some(session) = self.session.as_mut() else {
            return Vec::new();
        };
        if let Err(e) = session.play(index) {
            debug!(error = %e, index, "Ignoring illegal move");
            return Vec::new();
        }
        self.play_computer();
        self.refresh()
    }

    /// Lets the computer move if it is its turn.
    fn play_computer(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if !session.is_computer_turn() {
            return;
        }
        let difficulty = session.difficulty().unwrap_or_default();
        match ai::select_move(session.board(), difficulty, COMPUTER_MARK, &mut self.rng) {
            Some(index) => {
                if let Err(e) = session.apply_move(index) {
                    warn!(error = %e, index, "Computer chose an illegal move");
                }
            }
            None => warn!("Computer to move on a full board"),
        }
    }

    fn undo(&mut self) -> Vec<Notification> {
        let Some(session) = self.session.as_mut() else {
            return Vec::new();
        };
        if let Err(e) = session.undo() {
            debug!(error = %e, "Undo ignored");
            return Vec::new();
        }
        // The computer's reply and the human move it answered go together.
        while session.is_computer_turn() && session.undo().is_ok() {}
        self.refresh()
    }

    fn redo(&mut self) -> Vec<Notification> {
        let Some(session) = self.session.as_mut() else {
            return Vec::new();
        };
        if let Err(e) = session.redo() {
            debug!(error = %e, "Redo ignored");
            return Vec::new();
        }
        while session.is_computer_turn() && session.history().can_redo() {
            if session.redo().is_err() {
                break;
            }
        }
        self.play_computer();
        self.refresh()
    }

    /// Syncs the screen with the session and describes the board.
    fn refresh(&mut self) -> Vec<Notification> {
        let Some(session) = self.session.as_ref() else {
            return Vec::new();
        };
        let outcome = session.outcome();
        let mut notifications = vec![Notification::Render {
            board: *session.board(),
            current_player: *session.current_player(),
            status: session.status_text(),
        }];

        if outcome.is_terminal() {
            if let Outcome::Win { line, .. } = outcome {
                notifications.push(Notification::HighlightWinningLine(line));
            }
            if let Some(message) = outcome.message() {
                notifications.push(Notification::ShowTerminalMessage(message));
            }
            if !matches!(self.screen, Screen::GameOver { .. }) {
                info!(?outcome, moves = session.history().len(), "Game over");
            }
            self.screen = Screen::GameOver { outcome };
        } else {
            self.screen = Screen::Playing {
                mode: *session.mode(),
                difficulty: *session.difficulty(),
            };
        }
        notifications
    }
}
