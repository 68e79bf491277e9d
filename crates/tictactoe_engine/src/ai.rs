//! Computer opponent: exhaustive minimax blended with random play.
//!
//! The random share is the difficulty knob. At probability 0 the selector is
//! a perfect player that never loses; the default of 0.3 lets a careful human
//! win now and then.

use crate::position::Position;
use crate::rules::{is_full, winner};
use crate::types::{Board, Mark};
use rand::Rng;
use tracing::{debug, instrument};

/// Default probability of playing a uniformly random empty cell.
pub const DEFAULT_RANDOM_MOVE_PROBABILITY: f64 = 0.3;

/// Score of a won position before the depth penalty.
const WIN_SCORE: i32 = 10;

/// Accumulator seed for the maximizing side. Must be below any real score.
const MIN_SENTINEL: i32 = -999;

/// Accumulator seed for the minimizing side. Must be above any real score.
const MAX_SENTINEL: i32 = 999;

/// Picks the computer's moves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AiSelector {
    random_move_probability: f64,
}

impl AiSelector {
    /// Creates a selector that plays randomly with the given probability.
    ///
    /// The probability is clamped into `[0, 1]`.
    pub fn new(random_move_probability: f64) -> Self {
        Self {
            random_move_probability: random_move_probability.clamp(0.0, 1.0),
        }
    }

    /// A selector that always searches. It never loses.
    pub fn perfect() -> Self {
        Self::new(0.0)
    }

    /// Probability of the random branch.
    pub fn random_move_probability(&self) -> f64 {
        self.random_move_probability
    }

    /// Chooses the computer's next cell.
    ///
    /// # Panics
    ///
    /// Panics if the board has no empty cell or is already won. The engine
    /// only asks for a move while the game is ongoing.
    #[instrument(skip(board, rng), fields(p_random = self.random_move_probability))]
    pub fn choose_move<R: Rng + ?Sized>(&self, board: &Board, rng: &mut R) -> Position {
        assert!(
            winner(board).is_none(),
            "choose_move called on a decided board"
        );
        let empties: Vec<Position> = board.empties().collect();
        assert!(!empties.is_empty(), "choose_move called on a full board");

        let roll: f64 = rng.random();
        if roll < self.random_move_probability {
            let choice = empties[rng.random_range(0..empties.len())];
            debug!(roll, position = %choice, "Random move");
            return choice;
        }

        let choice = best_move(board);
        debug!(roll, position = %choice, "Minimax move");
        choice
    }
}

impl Default for AiSelector {
    fn default() -> Self {
        Self::new(DEFAULT_RANDOM_MOVE_PROBABILITY)
    }
}

/// Highest-scoring empty cell for the computer. Ties go to the lowest index.
///
/// Works on its own copy of the board so the caller's board is never touched.
fn best_move(board: &Board) -> Position {
    let mut scratch = *board;
    let mut best_score = MIN_SENTINEL;
    let mut best = None;

    for pos in Position::ALL {
        if !scratch.is_empty(pos) {
            continue;
        }
        scratch.set(pos, Mark::Ai);
        let score = minimax(&mut scratch, 0, false);
        scratch.set(pos, Mark::Empty);

        if score > best_score {
            best_score = score;
            best = Some(pos);
        }
    }

    best.expect("best_move needs at least one empty cell")
}

/// Depth-adjusted minimax score of `board` from the computer's point of view.
///
/// `maximizing` says whose move it is: the computer's when true, the
/// player's when false. Quicker wins and slower losses score better.
/// The board is restored before returning.
pub fn minimax(board: &mut Board, depth: i32, maximizing: bool) -> i32 {
    match winner(board) {
        Some(Mark::Ai) => return WIN_SCORE - depth,
        Some(Mark::Player) => return depth - WIN_SCORE,
        _ => {}
    }
    if is_full(board) {
        return 0;
    }

    let (mark, mut best) = if maximizing {
        (Mark::Ai, MIN_SENTINEL)
    } else {
        (Mark::Player, MAX_SENTINEL)
    };

    for pos in Position::ALL {
        if !board.is_empty(pos) {
            continue;
        }
        board.set(pos, mark);
        let score = minimax(board, depth + 1, !maximizing);
        board.set(pos, Mark::Empty);

        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Mark::{Ai as A, Empty as E, Player as P};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_minimax_terminal_scores() {
        let mut won = Board::from_marks([A, A, A, P, P, E, E, E, E]);
        assert_eq!(minimax(&mut won, 3, true), 7);

        let mut lost = Board::from_marks([P, P, P, A, A, E, E, E, E]);
        assert_eq!(minimax(&mut lost, 2, false), -8);

        let mut drawn = Board::from_marks([P, P, A, A, A, P, P, A, P]);
        assert_eq!(minimax(&mut drawn, 5, true), 0);
    }

    #[test]
    fn test_minimax_restores_board() {
        let original = Board::from_marks([P, E, E, E, A, E, E, E, E]);
        let mut board = original;
        minimax(&mut board, 0, false);
        assert_eq!(board, original);
    }

    #[test]
    fn test_takes_immediate_win() {
        // Computer holds 3 and 4; 5 completes the middle row.
        let board = Board::from_marks([P, P, E, A, A, E, P, E, E]);
        assert_eq!(best_move(&board), Position::MiddleRight);
    }

    #[test]
    fn test_blocks_threat() {
        let board = Board::from_marks([P, P, E, E, A, E, E, E, E]);
        assert_eq!(best_move(&board), Position::TopRight);
    }

    #[test]
    fn test_tie_break_prefers_lowest_index() {
        // Against a center opening every corner draws and every edge loses;
        // the first corner wins the tie.
        let board = Board::from_marks([E, E, E, E, P, E, E, E, E]);
        assert_eq!(best_move(&board), Position::TopLeft);
    }

    #[test]
    fn test_random_branch_picks_empty_cell() {
        let selector = AiSelector::new(1.0);
        let board = Board::from_marks([P, A, P, E, A, E, A, P, E]);
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..50 {
            let pos = selector.choose_move(&board, &mut rng);
            assert!(board.is_empty(pos));
        }
    }

    #[test]
    fn test_probability_is_clamped() {
        assert_eq!(AiSelector::new(4.0).random_move_probability(), 1.0);
        assert_eq!(AiSelector::new(-1.0).random_move_probability(), 0.0);
    }

    #[test]
    #[should_panic(expected = "full board")]
    fn test_full_board_is_a_contract_violation() {
        let board = Board::from_marks([P, P, A, A, A, P, P, A, P]);
        let mut rng = StdRng::seed_from_u64(0);
        AiSelector::perfect().choose_move(&board, &mut rng);
    }
}
