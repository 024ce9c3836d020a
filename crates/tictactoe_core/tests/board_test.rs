//! Tests for the board and outcome detection.

use tictactoe_core::{Board, Cell, MoveError, Outcome, Player, WIN_LINES, evaluate};

fn board(text: &str) -> Board {
    text.parse().expect("valid board text")
}

#[test]
fn test_new_board_is_empty() {
    let board = Board::new();
    assert_eq!(board.empty_cells(), (0..9).collect::<Vec<_>>());
    assert_eq!(board.outcome(), Outcome::InProgress);
    assert!(!board.is_full());
}

#[test]
fn test_apply_places_mark() {
    let mut board = Board::new();
    board.apply(4, Player::X).unwrap();
    assert_eq!(board.get(4), Some(Cell::Marked(Player::X)));
    assert_eq!(board.empty_cells(), vec![0, 1, 2, 3, 5, 6, 7, 8]);
}

#[test]
fn test_apply_rejects_out_of_bounds() {
    let mut board = Board::new();
    assert_eq!(board.apply(9, Player::X), Err(MoveError::OutOfBounds(9)));
    assert_eq!(board, Board::new());
}

#[test]
fn test_apply_rejects_occupied_cell() {
    let mut board = board("X________");
    let before = board;
    assert_eq!(board.apply(0, Player::O), Err(MoveError::CellOccupied(0)));
    assert_eq!(board, before);
}

#[test]
fn test_apply_rejects_moves_after_win() {
    let mut board = board("XXX/OO_/___");
    assert_eq!(board.apply(5, Player::O), Err(MoveError::GameOver));
    assert!(board.is_empty(5));
}

#[test]
fn test_clear_restores_empty() {
    let mut board = board("X________");
    board.clear(0);
    assert_eq!(board, Board::new());
}

#[test]
fn test_with_mark_leaves_original_untouched() {
    let board = board("OO_/XX_/___");
    let copy = board.with_mark(2, Player::O);
    assert!(board.is_empty(2));
    assert_eq!(copy.outcome().winner(), Some(Player::O));
}

#[test]
fn test_full_board_without_winner_is_draw() {
    let board = board("XOX/OXX/OXO");
    assert!(board.is_full());
    assert_eq!(board.outcome(), Outcome::Draw);
}

#[test]
fn test_win_reports_line_and_mark() {
    assert_eq!(
        board("X_O/XO_/X__").outcome(),
        Outcome::Win { line: [0, 3, 6], mark: Player::X }
    );
}

#[test]
fn test_outcome_matches_line_scan_for_every_board() {
    // All 3^9 cell assignments.
    for code in 0..3usize.pow(9) {
        let mut cells = [Cell::Empty; 9];
        let mut rest = code;
        for cell in cells.iter_mut() {
            *cell = match rest % 3 {
                0 => Cell::Empty,
                1 => Cell::Marked(Player::X),
                _ => Cell::Marked(Player::O),
            };
            rest /= 3;
        }

        let uniform: Vec<[usize; 3]> = WIN_LINES
            .iter()
            .copied()
            .filter(|&[a, b, c]| !cells[a].is_empty() && cells[a] == cells[b] && cells[b] == cells[c])
            .collect();
        let full = cells.iter().all(|c| !c.is_empty());

        match evaluate(&cells) {
            Outcome::Win { line, mark } => {
                assert_eq!(line, uniform[0], "first uniform line wins");
                assert_eq!(cells[line[0]], Cell::Marked(mark));
            }
            Outcome::Draw => assert!(full && uniform.is_empty()),
            Outcome::InProgress => assert!(!full && uniform.is_empty()),
        }
    }
}

#[test]
fn test_parse_and_display() {
    let board = board("X.O|-x-|o__");
    assert_eq!(board.to_string(), "X_O/_X_/O__");
    assert_eq!(board.display(), "X|2|O\n-+-+-\n4|X|6\n-+-+-\nO|8|9");
}

#[test]
fn test_parse_errors() {
    assert!("XO".parse::<Board>().is_err());
    assert!("XO?______".parse::<Board>().is_err());
}
