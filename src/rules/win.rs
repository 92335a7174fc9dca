//! Win detection for tic-tac-toe.

use crate::position::Position;
use crate::types::{Board, Player, Square};

/// The 8 winning lines, in fixed evaluation order.
///
/// Order matters: when several lines complete at once the first
/// match in this table is reported, keeping evaluation deterministic.
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

/// Finds a fully occupied winning line, if any.
///
/// Returns the winner together with the line that won, so callers
/// can highlight it. The first complete line in [`LINES`] order wins
/// the tie when more than one is complete.
pub fn winning_line(board: &Board) -> Option<(Player, [Position; 3])> {
    for line in LINES {
        let [a, b, c] = line;
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            if let Square::Occupied(player) = sq {
                return Some((player, line));
            }
        }
    }

    None
}
