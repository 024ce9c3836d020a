//! Screen trait and key-handling result for the terminal adapter.

use crossterm::event::KeyEvent;
use ratatui::Frame;
use ratatui::widgets::ListState;
use tictactoe_core::Event;

/// The result of handling a key on a screen.
///
/// Screens never touch game state themselves; they translate keys into
/// controller [`Event`]s for the [`App`](crate::App) to forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Nothing for the controller — local cursor or selection change only.
    Stay,
    /// Forward an event to the game controller.
    Send(Event),
    /// Exit the application.
    Quit,
}

/// Trait implemented by each screen of the terminal UI.
pub trait Screen {
    /// Renders the screen into the provided [`Frame`].
    fn render(&self, frame: &mut Frame);

    /// Handles a key event and returns the resulting [`Action`].
    fn handle_key(&mut self, key: KeyEvent) -> Action;
}

/// Moves a list selection one step, wrapping at both ends.
pub(crate) fn step_selection(state: &mut ListState, count: usize, forward: bool) {
    let i = match (state.selected(), forward) {
        (Some(i), true) => (i + 1) % count,
        (Some(i), false) if i > 0 => i - 1,
        (_, false) => count - 1,
        (None, true) => 0,
    };
    state.select(Some(i));
}
