//! Move selection for computer-controlled players.

use crate::position::Position;
use crate::search;
use crate::types::{Board, MovePolicy, Player};
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::debug;

/// Chooses a move for `mover` under the given policy.
///
/// Returns `None` when the board has no empty square; callers are
/// expected not to invoke the selector on a finished game.
pub fn select_move<R: Rng>(
    board: &Board,
    mover: Player,
    policy: MovePolicy,
    rng: &mut R,
) -> Option<Position> {
    match policy {
        MovePolicy::Random => {
            let empties = Position::valid_moves(board);
            let choice = empties.choose(rng).copied();
            debug!(?choice, candidates = empties.len(), "Random selection");
            choice
        }
        MovePolicy::Optimal => search::best_move(board, mover),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Square;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_random_picks_only_empty_squares() {
        let mut board = Board::new();
        for pos in [Position::TopLeft, Position::Center, Position::BottomRight] {
            board.set(pos, Square::Occupied(Player::X));
        }
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let pos = select_move(&board, Player::O, MovePolicy::Random, &mut rng).unwrap();
            assert!(board.is_empty(pos));
        }
    }

    #[test]
    fn test_random_on_full_board_is_none() {
        let mut board = Board::new();
        for pos in Position::ALL {
            board.set(pos, Square::Occupied(Player::X));
        }
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(
            select_move(&board, Player::O, MovePolicy::Random, &mut rng),
            None
        );
    }

    #[test]
    fn test_optimal_delegates_to_search() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(
            select_move(&Board::new(), Player::X, MovePolicy::Optimal, &mut rng),
            Some(Position::Center)
        );
    }
}
