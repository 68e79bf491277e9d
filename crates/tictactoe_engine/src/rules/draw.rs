//! Draw detection logic for tic-tac-toe.

use super::win::winner;
use crate::types::Board;

/// Checks if the board is full (no empty cell left).
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|mark| !mark.is_empty())
}

/// A full board with no winner.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use crate::types::Mark;

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.set(Position::Center, Mark::Player);
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        use Mark::{Ai as A, Player as P};
        // P P A / A A P / P A P
        let board = Board::from_marks([P, P, A, A, A, P, P, A, P]);
        assert!(is_full(&board));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        use Mark::{Ai as A, Player as P};
        // Player holds the top row on a full board.
        let board = Board::from_marks([P, P, P, A, A, P, A, P, A]);
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
