//! Win and draw detection for tic-tac-toe.

use super::types::{Cell, Player};
use serde::{Deserialize, Serialize};

/// The eight index triples whose uniform occupancy ends the game.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2], [3, 4, 5], [6, 7, 8], // Rows
    [0, 3, 6], [1, 4, 7], [2, 5, 8], // Columns
    [0, 4, 8], [2, 4, 6],             // Diagonals
];

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Moves remain and nobody has three in a row.
    InProgress,
    /// A player completed a line.
    Win {
        /// The completed triple.
        line: [usize; 3],
        /// The winning mark.
        mark: Player,
    },
    /// The board is full with no completed line.
    Draw,
}

impl Outcome {
    /// Checks if the game has ended.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Returns the winning mark, if any.
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::Win { mark, .. } => Some(mark),
            _ => None,
        }
    }

    /// Returns the terminal message shown to players.
    pub fn message(self) -> Option<String> {
        match self {
            Outcome::InProgress => None,
            Outcome::Win { mark, .. } => Some(format!("{} Wins!", mark)),
            Outcome::Draw => Some("It's a Draw!".to_string()),
        }
    }
}

/// Returns the first completed line and its mark.
pub fn winning_line(cells: &[Cell; 9]) -> Option<([usize; 3], Player)> {
    WIN_LINES.iter().find_map(|&[a, b, c]| match cells[a] {
        Cell::Marked(mark) if cells[b] == cells[a] && cells[c] == cells[a] => {
            Some(([a, b, c], mark))
        }
        _ => None,
    })
}

/// Evaluates the cells: win first, then draw.
pub fn evaluate(cells: &[Cell; 9]) -> Outcome {
    if let Some((line, mark)) = winning_line(cells) {
        return Outcome::Win { line, mark };
    }
    if cells.iter().all(|c| !c.is_empty()) {
        return Outcome::Draw;
    }
    Outcome::InProgress
}
