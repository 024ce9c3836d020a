//! Pure tic-tac-toe game logic.
//!
//! # Architecture
//!
//! - **Board**: nine cells, win/draw detection
//! - **History**: undo/redo stacks of reversible moves
//! - **AI**: random, greedy, or a coin flip between them
//! - **Session**: one game's board, history and turn order
//! - **Controller**: menu → difficulty → playing → game over state machine,
//!   returning [`Notification`]s for a renderer to apply
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{Controller, Event, GameMode, Notification};
//!
//! let mut controller = Controller::new();
//! controller.handle(Event::NewGame { mode: GameMode::HumanVsHuman, difficulty: None });
//! let notifications = controller.handle(Event::CellClicked(4));
//! assert!(matches!(notifications[0], Notification::Render { .. }));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod ai;
mod board;
mod controller;
mod error;
mod history;
mod rules;
mod session;
mod types;
mod view;

pub use ai::{
    Difficulty, MEDIUM_GREEDY_PROBABILITY, greedy_move, random_move, select_move, winning_move,
};
pub use board::{Board, CELL_COUNT};
pub use controller::{Controller, Event, Screen};
pub use error::{BoardParseError, HistoryError, MoveError};
pub use history::{History, Move};
pub use rules::{Outcome, WIN_LINES, evaluate, winning_line};
pub use session::Session;
pub use types::{COMPUTER_MARK, Cell, GameMode, Player};
pub use view::Notification;
