//! The 3x3 board.

use super::error::{BoardParseError, MoveError};
use super::rules::{self, Outcome};
use super::types::{Cell, Player};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the cell at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Checks if a cell is empty. Out-of-range indices are never empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Places a mark in an empty cell of a board that is still in play.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`], [`MoveError::CellOccupied`] or
    /// [`MoveError::GameOver`]; the board is left untouched in every case.
    #[instrument(skip(self))]
    pub fn apply(&mut self, index: usize, mark: Player) -> Result<(), MoveError> {
        if index >= CELL_COUNT {
            return Err(MoveError::OutOfBounds(index));
        }
        if self.outcome().is_terminal() {
            return Err(MoveError::GameOver);
        }
        if !self.cells[index].is_empty() {
            return Err(MoveError::CellOccupied(index));
        }
        self.cells[index] = Cell::Marked(mark);
        Ok(())
    }

    /// Empties a cell.
    pub fn clear(&mut self, index: usize) {
        self.restore(index, Cell::Empty);
    }

    /// Writes a cell value back unchecked. Used when stepping through history.
    pub(crate) fn restore(&mut self, index: usize, cell: Cell) {
        if let Some(slot) = self.cells.get_mut(index) {
            *slot = cell;
        }
    }

    /// Returns a copy of this board with `mark` placed at `index`.
    ///
    /// Hypothetical placements never touch the live board.
    pub fn with_mark(&self, index: usize, mark: Player) -> Self {
        let mut copy = *self;
        copy.restore(index, Cell::Marked(mark));
        copy
    }

    /// Evaluates the board: win, draw or still in progress.
    pub fn outcome(&self) -> Outcome {
        rules::evaluate(&self.cells)
    }

    /// Indices of the empty cells, ascending.
    pub fn empty_cells(&self) -> Vec<usize> {
        (0..CELL_COUNT).filter(|&i| self.cells[i].is_empty()).collect()
    }

    /// Checks if every cell holds a mark.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Formats the board as rows of text, empty cells numbered 1-9.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                match self.cells[index] {
                    Cell::Empty => result.push_str(&(index + 1).to_string()),
                    Cell::Marked(player) => result.push_str(&player.to_string()),
                }
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl From<[Cell; CELL_COUNT]> for Board {
    fn from(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }
}

/// Parses nine cells from text: `X`, `O`, and `_`, `.` or `-` for empty.
/// Whitespace and `|` or `/` separators are ignored.
impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(CELL_COUNT);
        for ch in s.chars().filter(|c| !c.is_whitespace() && !matches!(c, '|' | '/')) {
            let cell = match ch {
                'X' | 'x' => Cell::Marked(Player::X),
                'O' | 'o' => Cell::Marked(Player::O),
                '_' | '.' | '-' => Cell::Empty,
                other => return Err(BoardParseError::UnexpectedChar(other)),
            };
            cells.push(cell);
        }
        let count = cells.len();
        let cells: [Cell; CELL_COUNT] = cells
            .try_into()
            .map_err(|_| BoardParseError::WrongCellCount(count))?;
        Ok(Self { cells })
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, cell) in self.cells.iter().enumerate() {
            if i > 0 && i % 3 == 0 {
                write!(f, "/")?;
            }
            write!(f, "{}", cell)?;
        }
        Ok(())
    }
}
