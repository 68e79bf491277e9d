//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart from
//! board storage so the engine, the search and the invariants all evaluate
//! positions the same way.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, winner, winning_line};

use crate::types::{Board, Mark, Outcome};

/// Classifies a board.
pub fn outcome(board: &Board) -> Outcome {
    match winner(board) {
        Some(Mark::Player) => Outcome::PlayerWin,
        Some(Mark::Ai) => Outcome::AiWin,
        _ if is_full(board) => Outcome::Draw,
        _ => Outcome::Ongoing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Mark::{Ai as A, Empty as E, Player as P};

    #[test]
    fn test_outcome_ongoing() {
        assert_eq!(outcome(&Board::new()), Outcome::Ongoing);
    }

    #[test]
    fn test_outcome_wins() {
        let board = Board::from_marks([P, P, P, A, A, E, E, E, E]);
        assert_eq!(outcome(&board), Outcome::PlayerWin);
        let board = Board::from_marks([A, P, P, E, A, E, P, E, A]);
        assert_eq!(outcome(&board), Outcome::AiWin);
    }

    #[test]
    fn test_outcome_draw() {
        let board = Board::from_marks([P, P, A, A, A, P, P, A, P]);
        assert_eq!(outcome(&board), Outcome::Draw);
    }
}
