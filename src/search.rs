//! Exhaustive adversarial search for perfect play.
//!
//! The game tree is small enough (at most 9 plies) that full minimax
//! without pruning is instant, so no alpha-beta or depth limits.

use crate::position::Position;
use crate::rules::{self, Verdict};
use crate::types::{Board, Player, Square};
use tracing::{debug, instrument};

/// Score for a position already won by the searching player.
///
/// The magnitude is fixed rather than depth-adjusted, so the engine
/// does not prefer a faster forced win over a slower one. Property
/// tests are calibrated to this exact move selection.
const WIN_SCORE: i32 = 10;

/// Minimax value of `board` from `mover`'s point of view, with
/// `turn` about to play.
///
/// Each branch recurses on its own copy of the board, so sibling
/// branches can never alias each other's state.
pub fn value(board: &Board, mover: Player, turn: Player) -> i32 {
    match rules::evaluate(board) {
        Verdict::Won { player, .. } => {
            if player == mover {
                WIN_SCORE
            } else {
                -WIN_SCORE
            }
        }
        Verdict::Drawn => 0,
        Verdict::Ongoing => {
            let mut best: Option<i32> = None;
            for pos in Position::ALL {
                if !board.is_empty(pos) {
                    continue;
                }
                let mut child = board.clone();
                child.set(pos, Square::Occupied(turn));
                let score = value(&child, mover, turn.opponent());
                best = Some(match best {
                    // Strict comparison keeps the first occurrence on ties,
                    // matching the deterministic move choice of best_move.
                    Some(b) if turn == mover => {
                        if score > b { score } else { b }
                    }
                    Some(b) => {
                        if score < b { score } else { b }
                    }
                    None => score,
                });
            }
            // Ongoing guarantees at least one empty square.
            best.unwrap_or(0)
        }
    }
}

/// Computes the game-theoretically optimal move for `mover`.
///
/// Defined for ongoing positions; returns `None` when no empty square
/// exists. A completely empty board short-circuits to the center
/// without searching, purely to skip the most expensive tree.
///
/// The returned move never loses against perfect play from the
/// resulting position, and wins whenever a forced win exists.
#[instrument(skip(board))]
pub fn best_move(board: &Board, mover: Player) -> Option<Position> {
    if board.squares().iter().all(|s| *s == Square::Empty) {
        return Some(Position::Center);
    }

    let mut best: Option<(Position, i32)> = None;
    for pos in Position::ALL {
        if !board.is_empty(pos) {
            continue;
        }
        let mut child = board.clone();
        child.set(pos, Square::Occupied(mover));
        let score = value(&child, mover, mover.opponent());
        match best {
            Some((_, b)) if score <= b => {}
            _ => best = Some((pos, score)),
        }
    }

    if let Some((pos, score)) = best {
        debug!(position = %pos, score, "Search selected move");
    }
    best.map(|(pos, _)| pos)
}
