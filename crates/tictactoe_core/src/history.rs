//! Undo/redo history of applied moves.

use super::error::HistoryError;
use super::types::{Cell, Player};
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// A reversible move: the cell written, what it held before, and the mark placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Move {
    /// Board index (0-8).
    pub index: usize,
    /// Cell value before the move.
    pub prior: Cell,
    /// The mark placed by the move.
    pub mark: Player,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.index)
    }
}

/// Two stacks for time travel through a game.
///
/// Recording a move after undoing discards the undone future.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    undo: Vec<Move>,
    redo: Vec<Move>,
}

impl History {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an applied move and clears the redo stack.
    #[instrument(skip(self))]
    pub fn record(&mut self, mv: Move) {
        if !self.redo.is_empty() {
            trace!(discarded = self.redo.len(), "New move discards redo stack");
            self.redo.clear();
        }
        self.undo.push(mv);
    }

    /// Pops the last applied move onto the redo stack and returns it.
    ///
    /// The caller restores `mv.prior` at `mv.index` and hands the turn back
    /// to `mv.mark`.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::NothingToUndo`] if no move has been applied.
    #[instrument(skip(self))]
    pub fn undo(&mut self) -> Result<Move, HistoryError> {
        let mv = self.undo.pop().ok_or(HistoryError::NothingToUndo)?;
        self.redo.push(mv);
        Ok(mv)
    }

    /// Pops the last undone move back onto the undo stack and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::NothingToRedo`] if nothing has been undone
    /// since the last recorded move.
    #[instrument(skip(self))]
    pub fn redo(&mut self) -> Result<Move, HistoryError> {
        let mv = self.redo.pop().ok_or(HistoryError::NothingToRedo)?;
        self.undo.push(mv);
        Ok(mv)
    }

    /// Checks if there is a move to undo.
    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    /// Checks if there is a move to redo.
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Number of applied moves.
    pub fn len(&self) -> usize {
        self.undo.len()
    }

    /// Checks if no move has been applied.
    pub fn is_empty(&self) -> bool {
        self.undo.is_empty()
    }

    /// Applied moves, oldest first.
    pub fn applied(&self) -> &[Move] {
        &self.undo
    }
}
