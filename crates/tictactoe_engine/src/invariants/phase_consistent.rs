//! Phase consistency invariant: the phase agrees with the board.

use super::Invariant;
use crate::engine::GameSnapshot;
use crate::rules;

/// Invariant: the recorded outcome is the board's outcome.
///
/// An ongoing phase means no line and a free cell; an ended phase carries
/// exactly the outcome the rules assign to the board.
pub struct PhaseConsistentInvariant;

impl Invariant<GameSnapshot> for PhaseConsistentInvariant {
    fn holds(snapshot: &GameSnapshot) -> bool {
        snapshot.phase().outcome() == rules::outcome(snapshot.board())
    }

    fn description() -> &'static str {
        "Phase outcome matches the board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Mark::{Ai as A, Empty as E, Player as P};
    use crate::types::{Board, Outcome, Phase};

    fn snapshot(board: Board, phase: Phase) -> GameSnapshot {
        GameSnapshot::new(board, phase, Vec::new(), 1)
    }

    #[test]
    fn test_ended_draw_holds() {
        let board = Board::from_marks([P, P, A, A, A, P, P, A, P]);
        assert!(PhaseConsistentInvariant::holds(&snapshot(
            board,
            Phase::Ended(Outcome::Draw)
        )));
    }

    #[test]
    fn test_ongoing_on_won_board_violates() {
        let board = Board::from_marks([A, A, A, P, P, E, P, E, E]);
        assert!(!PhaseConsistentInvariant::holds(&snapshot(board, Phase::PlayerTurn)));
    }

    #[test]
    fn test_wrong_winner_violates() {
        let board = Board::from_marks([A, A, A, P, P, E, P, E, E]);
        assert!(!PhaseConsistentInvariant::holds(&snapshot(
            board,
            Phase::Ended(Outcome::PlayerWin)
        )));
    }
}
