//! Core domain types for tic-tac-toe.

use crate::position::Position;
use serde::{Deserialize, Serialize};

/// Occupant of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mark {
    /// Nobody has played here yet.
    #[default]
    Empty,
    /// The human player's mark.
    Player,
    /// The computer opponent's mark.
    Ai,
}

impl Mark {
    /// Returns the other side, or `None` for [`Mark::Empty`].
    pub fn opponent(self) -> Option<Self> {
        match self {
            Mark::Player => Some(Mark::Ai),
            Mark::Ai => Some(Mark::Player),
            Mark::Empty => None,
        }
    }

    /// Returns true if this is [`Mark::Empty`].
    pub fn is_empty(self) -> bool {
        self == Mark::Empty
    }

    /// Symbol used when rendering the board as text.
    pub fn symbol(self) -> char {
        match self {
            Mark::Empty => ' ',
            Mark::Player => 'O',
            Mark::Ai => 'X',
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Mark; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; 9],
        }
    }

    /// Builds a board from nine marks in row-major order.
    pub fn from_marks(cells: [Mark; 9]) -> Self {
        Self { cells }
    }

    /// Gets the mark at the given position.
    pub fn get(&self, pos: Position) -> Mark {
        self.cells[pos.to_index()]
    }

    /// Sets the mark at the given position.
    ///
    /// The board itself does not enforce that occupied cells stay put; the
    /// engine is the only owner that mutates a live game.
    pub fn set(&mut self, pos: Position, mark: Mark) {
        self.cells[pos.to_index()] = mark;
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Mark; 9] {
        &self.cells
    }

    /// Empty positions in ascending index order.
    pub fn empties(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL.into_iter().filter(|&pos| self.is_empty(pos))
    }

    /// Number of occupied cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|m| !m.is_empty()).count()
    }

    /// Formats the board as a human-readable grid.
    ///
    /// Empty cells show their 1-based number so a player can type it.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let idx = row * 3 + col;
                match self.cells[idx] {
                    Mark::Empty => result.push_str(&(idx + 1).to_string()),
                    mark => result.push(mark.symbol()),
                }
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

/// Whose move is currently permitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Turn {
    /// The human may place a mark.
    Player,
    /// The computer is "thinking"; its move is scheduled.
    AiThinking,
}

/// Result classification of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Outcome {
    /// Still being played.
    #[default]
    Ongoing,
    /// The human completed a line.
    PlayerWin,
    /// The computer completed a line.
    AiWin,
    /// The board filled up with no line.
    Draw,
}

impl Outcome {
    /// Returns true for every outcome except [`Outcome::Ongoing`].
    pub fn is_terminal(self) -> bool {
        self != Outcome::Ongoing
    }

    /// Winning mark, if any.
    pub fn winner(self) -> Option<Mark> {
        match self {
            Outcome::PlayerWin => Some(Mark::Player),
            Outcome::AiWin => Some(Mark::Ai),
            Outcome::Ongoing | Outcome::Draw => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Ongoing => write!(f, "In progress"),
            Outcome::PlayerWin => write!(f, "Player wins"),
            Outcome::AiWin => write!(f, "Computer wins"),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// State-machine state of a game.
///
/// Exactly one of these holds at any time, so "Outcome is Ongoing iff the
/// game has not ended" is true by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the human.
    PlayerTurn,
    /// Waiting for the scheduled computer move.
    AiThinking,
    /// Finished; the outcome is never [`Outcome::Ongoing`].
    Ended(Outcome),
}

impl Phase {
    /// Whose move it is, or `None` once the game has ended.
    pub fn turn(self) -> Option<Turn> {
        match self {
            Phase::PlayerTurn => Some(Turn::Player),
            Phase::AiThinking => Some(Turn::AiThinking),
            Phase::Ended(_) => None,
        }
    }

    /// Outcome of the game so far.
    pub fn outcome(self) -> Outcome {
        match self {
            Phase::Ended(outcome) => outcome,
            Phase::PlayerTurn | Phase::AiThinking => Outcome::Ongoing,
        }
    }

    /// Returns true once the game has ended.
    pub fn is_ended(self) -> bool {
        matches!(self, Phase::Ended(_))
    }
}
