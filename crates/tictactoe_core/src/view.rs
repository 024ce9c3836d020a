//! Notifications from the controller to whatever draws the game.

use super::board::Board;
use super::types::Player;

/// What changed after an event, in the order it should be applied.
///
/// A `Render` replaces the whole board view, including any highlight or
/// terminal message from before; those follow it in the same batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// The main menu is showing.
    ShowMenu,
    /// The difficulty picker is showing.
    ShowDifficultySelect,
    /// Board snapshot with the player to move and a status line.
    Render {
        /// Current cells.
        board: Board,
        /// Player to move (the last mover once the game is over).
        current_player: Player,
        /// "Player X's Turn", "X Wins!", "O Wins!" or "It's a Draw!".
        status: String,
    },
    /// The three cells of the winning line.
    HighlightWinningLine([usize; 3]),
    /// Final result announcement.
    ShowTerminalMessage(String),
}
