//! Monotonic board invariant: cells never change once set.

use super::Invariant;
use crate::engine::GameSnapshot;
use crate::types::Board;

/// Invariant: cells are written at most once per game.
///
/// Verified by replaying the move history onto an empty board: every move
/// must land on an empty cell and the result must equal the live board.
pub struct MonotonicBoardInvariant;

impl Invariant<GameSnapshot> for MonotonicBoardInvariant {
    fn holds(snapshot: &GameSnapshot) -> bool {
        let mut reconstructed = Board::new();

        for mv in snapshot.history() {
            if !reconstructed.is_empty(mv.position) || mv.mark.is_empty() {
                return false;
            }
            reconstructed.set(mv.position, mv.mark);
        }

        reconstructed == *snapshot.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}
