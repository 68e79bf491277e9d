//! Win detection logic for tic-tac-toe.

use crate::position::Position;
use crate::types::{Board, Mark};

/// The 8 winning lines: rows, then columns, then diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first completed line, if any.
pub fn winning_line(board: &Board) -> Option<[Position; 3]> {
    LINES.into_iter().find(|&[a, b, c]| {
        let mark = board.get(a);
        !mark.is_empty() && mark == board.get(b) && mark == board.get(c)
    })
}

/// Checks if there is a winner on the board.
///
/// Returns the mark holding three in a row, `None` otherwise.
pub fn winner(board: &Board) -> Option<Mark> {
    winning_line(board).map(|[a, _, _]| board.get(a))
}
