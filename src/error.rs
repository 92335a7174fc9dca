//! Error types for move validation.

use crate::position::Position;
use derive_more::{Display, Error};

/// A rejected move. The session state is unchanged when one of these
/// is returned; callers may treat them as a no-op signal rather than
/// a fatal condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// No game is running (idle or already ended).
    #[display("No game is running")]
    NotRunning,
    /// The square is already occupied.
    #[display("Square {_0} is already occupied")]
    Occupied(#[error(not(source))] Position),
    /// The side to move is computer-controlled; its moves are chosen
    /// internally, not supplied from outside.
    #[display("It is the computer's turn")]
    NotYourTurn,
}
