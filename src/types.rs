//! Core domain types for the tic-tac-toe arena.

use crate::position::Position;
use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player X (goes first by default).
    X,
    /// Player O (computer-controlled in the computer modes).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Single-character mark for display.
    pub fn mark(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.mark())
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty squares show their 1-based cell number so a player
    /// can see what to type.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let idx = row * 3 + col;
                let symbol = match self.squares[idx] {
                    Square::Empty => char::from_digit(idx as u32 + 1, 10).unwrap_or('?'),
                    Square::Occupied(p) => p.mark(),
                };
                result.push(symbol);
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

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// How moves are chosen for a computer-controlled player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MovePolicy {
    /// Uniform choice among empty squares.
    Random,
    /// Exhaustive adversarial search (perfect play).
    Optimal,
}

/// Who supplies the moves for a player slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Controller {
    /// Moves arrive from the outside via [`crate::GameSession::apply_human_move`].
    Human,
    /// Moves are chosen internally with the given policy.
    Computer(MovePolicy),
}

/// Game mode - who is the opponent?
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// Two humans sharing the board.
    HumanVsHuman,
    /// Human as X against a randomly playing computer as O.
    HumanVsRandom,
    /// Human as X against a perfectly playing computer as O.
    HumanVsOptimal,
}

impl Mode {
    /// Returns the controller for the given player slot.
    ///
    /// X is always human; O is the computer in the computer modes.
    pub fn controller(&self, player: Player) -> Controller {
        match (self, player) {
            (Mode::HumanVsHuman, _) => Controller::Human,
            (_, Player::X) => Controller::Human,
            (Mode::HumanVsRandom, Player::O) => Controller::Computer(MovePolicy::Random),
            (Mode::HumanVsOptimal, Player::O) => Controller::Computer(MovePolicy::Optimal),
        }
    }

    /// Returns display name.
    pub fn name(&self) -> &'static str {
        match self {
            Mode::HumanVsHuman => "Human vs Human",
            Mode::HumanVsRandom => "Human vs Computer (random)",
            Mode::HumanVsOptimal => "Human vs Computer (optimal)",
        }
    }
}

impl Default for Mode {
    fn default() -> Self {
        Mode::HumanVsHuman
    }
}
