//! Computer opponent: random, greedy, or a coin flip between the two.
//!
//! The greedy search looks exactly one ply ahead for an immediate win. It
//! never blocks the opponent's threats.

use super::board::Board;
use super::types::Player;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Computer strength.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::Display,
)]
pub enum Difficulty {
    /// Uniformly random moves.
    #[default]
    Easy,
    /// Half random, half greedy, decided per move.
    Medium,
    /// Takes an immediate win when one exists, random otherwise.
    #[serde(alias = "Difficult")]
    Hard,
}

/// Probability that a Medium move is played greedily.
pub const MEDIUM_GREEDY_PROBABILITY: f64 = 0.5;

/// Picks a move for `mark` at the given difficulty.
///
/// Returns `None` only when the board has no empty cell.
#[instrument(skip(board, rng), fields(board = %board))]
pub fn select_move<R: Rng + ?Sized>(
    board: &Board,
    difficulty: Difficulty,
    mark: Player,
    rng: &mut R,
) -> Option<usize> {
    let choice = match difficulty {
        Difficulty::Easy => random_move(board, rng),
        Difficulty::Medium => {
            if rng.gen_bool(MEDIUM_GREEDY_PROBABILITY) {
                greedy_move(board, mark, rng)
            } else {
                random_move(board, rng)
            }
        }
        Difficulty::Hard => greedy_move(board, mark, rng),
    };
    debug!(?choice, "Computer chose cell");
    choice
}

/// Uniformly random empty cell.
pub fn random_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<usize> {
    board.empty_cells().choose(rng).copied()
}

/// First immediately winning cell in index order, else a random empty cell.
pub fn greedy_move<R: Rng + ?Sized>(board: &Board, mark: Player, rng: &mut R) -> Option<usize> {
    winning_move(board, mark).or_else(|| random_move(board, rng))
}

/// First empty cell, in ascending order, where `mark` completes a line.
pub fn winning_move(board: &Board, mark: Player) -> Option<usize> {
    board
        .empty_cells()
        .into_iter()
        .find(|&index| board.with_mark(index, mark).outcome().winner() == Some(mark))
}
