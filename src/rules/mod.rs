//! Game rules for tic-tac-toe.
//!
//! Pure functions that evaluate a board snapshot. Rules are separated
//! from board storage so the search engine and the session can share
//! one terminal test.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, winning_line};

use crate::position::Position;
use crate::types::{Board, Player};
use serde::{Deserialize, Serialize};

/// Result of evaluating a board snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// A player occupies a full line.
    Won {
        /// The winning player.
        player: Player,
        /// The line that won, for highlighting.
        line: [Position; 3],
    },
    /// Board is full with no winner.
    Drawn,
    /// Moves remain and nobody has won.
    Ongoing,
}

impl Verdict {
    /// Returns true for `Won` and `Drawn`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Verdict::Ongoing)
    }
}

/// Evaluates the board: win, draw, or still going.
///
/// Scans the 8 fixed lines in table order and reports the first
/// complete one; otherwise a full board is a draw.
pub fn evaluate(board: &Board) -> Verdict {
    if let Some((player, line)) = winning_line(board) {
        return Verdict::Won { player, line };
    }
    if is_full(board) {
        return Verdict::Drawn;
    }
    Verdict::Ongoing
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Square;

    #[test]
    fn test_empty_board_ongoing() {
        assert_eq!(evaluate(&Board::new()), Verdict::Ongoing);
    }

    #[test]
    fn test_won_reports_player_and_line() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::O));
        board.set(Position::MiddleLeft, Square::Occupied(Player::O));
        board.set(Position::BottomLeft, Square::Occupied(Player::O));
        assert_eq!(
            evaluate(&board),
            Verdict::Won {
                player: Player::O,
                line: [
                    Position::TopLeft,
                    Position::MiddleLeft,
                    Position::BottomLeft
                ],
            }
        );
    }
}
