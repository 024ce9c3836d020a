//! Error types for moves, history navigation and board parsing.

/// Error that can occur when applying a move.
///
/// The controller swallows these: an illegal click is a no-op, never a
/// user-visible failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The index is outside 0-8.
    #[display("Cell {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(#[error(not(source))] usize),

    /// The cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(#[error(not(source))] usize),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// The computer is to move; human input is not accepted.
    #[display("It's the computer's turn")]
    NotHumanTurn,
}

/// Error returned when there is nothing to step through in the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum HistoryError {
    /// The undo stack is empty.
    #[display("Nothing to undo")]
    NothingToUndo,

    /// The redo stack is empty.
    #[display("Nothing to redo")]
    NothingToRedo,
}

/// Error parsing a board from text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardParseError {
    /// A character other than a mark or an empty-cell placeholder was found.
    #[display("Unexpected character {:?} in board text", _0)]
    UnexpectedChar(#[error(not(source))] char),

    /// The text did not describe exactly nine cells.
    #[display("Expected 9 cells, found {}", _0)]
    WrongCellCount(#[error(not(source))] usize),
}
