//! Tests for win and draw detection.

use tictactoe_engine::rules::{self, LINES};
use tictactoe_engine::{Board, Mark, Outcome, Position};

use Mark::{Ai as A, Empty as E, Player as P};

fn board_with_line(line: [Position; 3], mark: Mark) -> Board {
    let mut board = Board::new();
    for pos in line {
        board.set(pos, mark);
    }
    board
}

#[test]
fn test_every_line_wins_for_either_mark() {
    for line in LINES {
        for mark in [Mark::Player, Mark::Ai] {
            let board = board_with_line(line, mark);
            assert_eq!(rules::winner(&board), Some(mark), "line {line:?}");
            assert_eq!(rules::winning_line(&board), Some(line));
            assert!(!rules::is_full(&board));
        }
    }
}

#[test]
fn test_lines_are_distinct_triples() {
    for (i, a) in LINES.iter().enumerate() {
        for b in &LINES[i + 1..] {
            assert_ne!(a, b);
        }
        assert!(a[0] != a[1] && a[1] != a[2] && a[0] != a[2]);
    }
    assert_eq!(LINES.len(), 8);
}

#[test]
fn test_no_line_no_winner() {
    let boards = [
        Board::new(),
        Board::from_marks([P, A, P, E, E, E, E, E, E]),
        Board::from_marks([P, P, E, A, A, E, E, E, E]),
        Board::from_marks([P, A, P, P, A, A, A, P, P]),
    ];
    for board in boards {
        assert_eq!(rules::winner(&board), None, "{}", board.display());
    }
}

#[test]
fn test_full_board_without_line_is_draw() {
    let board = Board::from_marks([P, P, A, A, A, P, P, A, P]);
    assert!(rules::is_full(&board));
    assert_eq!(rules::winner(&board), None);
    assert!(rules::is_draw(&board));
    assert_eq!(rules::outcome(&board), Outcome::Draw);
}

#[test]
fn test_win_on_last_cell_is_not_draw() {
    let board = Board::from_marks([A, P, A, P, A, P, P, A, A]);
    assert!(rules::is_full(&board));
    assert_eq!(rules::outcome(&board), Outcome::AiWin);
}
