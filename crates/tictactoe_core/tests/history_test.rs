//! Tests for undo/redo history and session turn order.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tictactoe_core::{
    Cell, GameMode, History, HistoryError, Move, MoveError, Outcome, Player, Session,
};

fn snapshot(session: &Session) -> (tictactoe_core::Board, Player) {
    (*session.board(), *session.current_player())
}

#[test]
fn test_history_undo_redo_stacks() {
    let mut history = History::new();
    let first = Move::new(0, Cell::Empty, Player::X);
    let second = Move::new(4, Cell::Empty, Player::O);
    history.record(first);
    history.record(second);

    assert_eq!(history.undo(), Ok(second));
    assert!(history.can_redo());
    assert_eq!(history.redo(), Ok(second));
    assert!(!history.can_redo());
    assert_eq!(history.applied(), &[first, second]);
}

#[test]
fn test_history_empty_stacks_fail() {
    let mut history = History::new();
    assert_eq!(history.undo(), Err(HistoryError::NothingToUndo));
    assert_eq!(history.redo(), Err(HistoryError::NothingToRedo));
}

#[test]
fn test_record_after_undo_clears_redo() {
    let mut session = Session::new(GameMode::HumanVsHuman, None);
    session.play(0).unwrap();
    session.play(4).unwrap();
    session.undo().unwrap();
    session.undo().unwrap();
    assert!(session.history().can_redo());

    session.play(8).unwrap();
    assert_eq!(session.redo(), Err(HistoryError::NothingToRedo));
    assert_eq!(session.history().len(), 1);
}

#[test]
fn test_players_alternate() {
    let mut session = Session::new(GameMode::HumanVsHuman, None);
    assert_eq!(*session.current_player(), Player::X);
    session.play(0).unwrap();
    assert_eq!(*session.current_player(), Player::O);
    session.play(1).unwrap();
    assert_eq!(*session.current_player(), Player::X);
    assert_eq!(session.status_text(), "Player X's Turn");
}

#[test]
fn test_illegal_move_changes_nothing() {
    let mut session = Session::new(GameMode::HumanVsHuman, None);
    session.play(0).unwrap();
    let before = session.clone();
    assert_eq!(session.play(0), Err(MoveError::CellOccupied(0)));
    assert_eq!(session.play(12), Err(MoveError::OutOfBounds(12)));
    assert_eq!(session, before);
}

#[test]
fn test_winning_move_keeps_winner_as_current() {
    let mut session = Session::new(GameMode::HumanVsHuman, None);
    for index in [0, 3, 1, 4] {
        session.play(index).unwrap();
    }
    let outcome = session.play(2).unwrap();
    assert_eq!(outcome, Outcome::Win { line: [0, 1, 2], mark: Player::X });
    assert_eq!(*session.current_player(), Player::X);
    assert_eq!(session.status_text(), "X Wins!");
    assert_eq!(session.play(5), Err(MoveError::GameOver));
}

#[test]
fn test_undo_winning_move_resumes_game() {
    let mut session = Session::new(GameMode::HumanVsHuman, None);
    for index in [0, 3, 1, 4, 2] {
        session.play(index).unwrap();
    }
    session.undo().unwrap();
    assert_eq!(session.outcome(), Outcome::InProgress);
    assert_eq!(*session.current_player(), Player::X);

    session.redo().unwrap();
    assert_eq!(session.outcome().winner(), Some(Player::X));
    assert_eq!(*session.current_player(), Player::X);
}

#[test]
fn test_undo_redo_are_inverse_for_random_games() {
    let mut rng = StdRng::seed_from_u64(17);
    for _ in 0..200 {
        let mut session = Session::new(GameMode::HumanVsHuman, None);
        while !session.outcome().is_terminal() {
            let empty = session.board().empty_cells();
            let index = *empty.choose(&mut rng).unwrap();

            let before = snapshot(&session);
            session.play(index).unwrap();
            let after = snapshot(&session);

            session.undo().unwrap();
            assert_eq!(snapshot(&session), before);
            session.redo().unwrap();
            assert_eq!(snapshot(&session), after);
        }
    }
}

#[test]
fn test_computer_session_defaults_to_easy() {
    let session = Session::new(GameMode::HumanVsComputer, None);
    assert_eq!(*session.difficulty(), Some(tictactoe_core::Difficulty::Easy));
    let session = Session::new(GameMode::HumanVsHuman, Some(tictactoe_core::Difficulty::Hard));
    assert_eq!(*session.difficulty(), None);
}

#[test]
fn test_human_cannot_move_on_computer_turn() {
    let mut session = Session::new(GameMode::HumanVsComputer, None);
    session.play(0).unwrap();
    assert!(session.is_computer_turn());
    assert_eq!(session.play(1), Err(MoveError::NotHumanTurn));
    assert_eq!(session.apply_move(1).unwrap(), Outcome::InProgress);
    assert!(!session.is_computer_turn());
}
