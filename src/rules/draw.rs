//! Draw detection for tic-tac-toe.

use crate::types::{Board, Square};

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner is a draw.
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

#[cfg(test)]
mod tests {
    use super::super::win::winning_line;
    use super::*;
    use crate::position::Position;
    use crate::types::Player;

    fn is_draw(board: &Board) -> bool {
        is_full(board) && winning_line(board).is_none()
    }

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(Player::X));
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O - full, no line
        let mut board = Board::new();
        for pos in [
            Position::TopLeft,
            Position::Center,
            Position::TopRight,
            Position::MiddleRight,
            Position::BottomCenter,
        ] {
            board.set(pos, Square::Occupied(Player::X));
        }
        for pos in [
            Position::TopCenter,
            Position::MiddleLeft,
            Position::BottomLeft,
            Position::BottomRight,
        ] {
            board.set(pos, Square::Occupied(Player::O));
        }

        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::TopCenter, Square::Occupied(Player::X));
        board.set(Position::TopRight, Square::Occupied(Player::X));
        board.set(Position::MiddleLeft, Square::Occupied(Player::O));
        board.set(Position::Center, Square::Occupied(Player::O));

        assert!(!is_draw(&board));
    }
}
