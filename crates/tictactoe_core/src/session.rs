//! One game from start to "back to menu".

use super::ai::Difficulty;
use super::board::Board;
use super::error::{HistoryError, MoveError};
use super::history::{History, Move};
use super::rules::Outcome;
use super::types::{COMPUTER_MARK, Cell, GameMode, Player};
use derive_getters::Getters;
use tracing::{debug, instrument};

/// Board, history and turn order of a single game.
///
/// Created when a game starts and dropped when the players return to the
/// menu; nothing outlives it.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Session {
    board: Board,
    history: History,
    current_player: Player,
    mode: GameMode,
    /// Only set for [`GameMode::HumanVsComputer`].
    difficulty: Option<Difficulty>,
}

impl Session {
    /// Starts a fresh game with X to move.
    ///
    /// A computer game without an explicit difficulty plays [`Difficulty::Easy`].
    #[instrument]
    pub fn new(mode: GameMode, difficulty: Option<Difficulty>) -> Self {
        let difficulty = match mode {
            GameMode::HumanVsHuman => None,
            GameMode::HumanVsComputer => Some(difficulty.unwrap_or_default()),
        };
        Self {
            board: Board::new(),
            history: History::new(),
            current_player: Player::X,
            mode,
            difficulty,
        }
    }

    /// Evaluates the board.
    pub fn outcome(&self) -> Outcome {
        self.board.outcome()
    }

    /// Checks if the computer is due to move.
    pub fn is_computer_turn(&self) -> bool {
        self.mode == GameMode::HumanVsComputer
            && self.current_player == COMPUTER_MARK
            && !self.outcome().is_terminal()
    }

    /// Status line: whose turn it is, or the final result.
    pub fn status_text(&self) -> String {
        self.outcome()
            .message()
            .unwrap_or_else(|| format!("Player {}'s Turn", self.current_player))
    }

    /// Applies a human move.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::NotHumanTurn`] while the computer is to move, or
    /// any error from [`Session::apply_move`].
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn play(&mut self, index: usize) -> Result<Outcome, MoveError> {
        if self.is_computer_turn() {
            return Err(MoveError::NotHumanTurn);
        }
        self.apply_move(index)
    }

    /// Places the current player's mark, records it, and passes the turn
    /// unless the move ended the game.
    ///
    /// # Errors
    ///
    /// Returns the [`MoveError`] from [`Board::apply`]; nothing changes on failure.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn apply_move(&mut self, index: usize) -> Result<Outcome, MoveError> {
        let prior = self.board.get(index).ok_or(MoveError::OutOfBounds(index))?;
        let mark = self.current_player;
        self.board.apply(index, mark)?;
        self.history.record(Move::new(index, prior, mark));

        let outcome = self.outcome();
        if !outcome.is_terminal() {
            self.current_player = mark.opponent();
        }
        debug!(index, %mark, ?outcome, "Move applied");
        Ok(outcome)
    }

    /// Takes back the last move and hands the turn to whoever made it.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::NothingToUndo`] on a fresh board.
    #[instrument(skip(self))]
    pub fn undo(&mut self) -> Result<Move, HistoryError> {
        let mv = self.history.undo()?;
        self.board.restore(mv.index, mv.prior);
        self.current_player = mv.mark;
        debug!(%mv, "Move undone");
        Ok(mv)
    }

    /// Replays the last undone move.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::NothingToRedo`] if nothing is waiting to be replayed.
    #[instrument(skip(self))]
    pub fn redo(&mut self) -> Result<Move, HistoryError> {
        let mv = self.history.redo()?;
        self.board.restore(mv.index, Cell::Marked(mv.mark));
        self.current_player = if self.outcome().is_terminal() {
            mv.mark
        } else {
            mv.mark.opponent()
        };
        debug!(%mv, "Move redone");
        Ok(mv)
    }
}
