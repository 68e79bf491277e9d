//! Moves and move errors.
//!
//! A move is a domain event: the engine records every accepted one so the
//! board can be checked against the history that produced it.

use crate::position::Position;
use crate::types::Mark;
use serde::{Deserialize, Serialize};

/// A mark placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Who moved.
    pub mark: Mark,
    /// Where the mark went.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, position: Position) -> Self {
        Self { mark, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} -> {}", self.mark, self.position.label())
    }
}

/// Why a player move was rejected.
///
/// Every variant is recoverable: the game state is left exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Index outside 0-8.
    #[display("Position {} is out of range (must be 0-8)", _0)]
    OutOfRange(usize),

    /// Target cell already holds a mark.
    #[display("{} is already occupied", _0)]
    CellOccupied(Position),

    /// The computer is still thinking.
    #[display("It's not the player's turn")]
    NotPlayerTurn,

    /// The game is over; reset to play again.
    #[display("Game is already over")]
    GameAlreadyEnded,
}

impl std::error::Error for MoveError {}
