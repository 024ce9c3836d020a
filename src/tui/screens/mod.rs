//! Individual screens of the terminal UI.

mod board;
mod difficulty;
mod menu;

pub use board::BoardScreen;
pub use difficulty::DifficultyScreen;
pub use menu::MenuScreen;
