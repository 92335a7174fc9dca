//! Tic-tac-toe arena - game engine with computer opponents
//!
//! The crate keeps all game logic presentation-free: rendering and
//! input wiring live in whatever front end composes an [`Arena`]
//! (this crate ships a small terminal one).
//!
//! # Architecture
//!
//! - **Rules**: pure win/draw evaluation over a board snapshot
//! - **Search**: exhaustive minimax for perfect play
//! - **Selector**: random or optimal move choice for the computer
//! - **Session**: the per-game state machine
//! - **Ledger**: scores, bounded history and the round counter
//! - **Arena**: application root tying session and ledger together
//!
//! # Example
//!
//! ```
//! use tictactoe_arena::{Arena, Mode, Player, Position};
//!
//! let mut arena = Arena::new(Mode::HumanVsOptimal);
//! arena.new_game(Mode::HumanVsOptimal, Player::X);
//! let report = arena.apply_human_move(Position::TopLeft).unwrap();
//! // The computer has already replied.
//! assert_eq!(report.placements.len(), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod arena;
mod error;
mod ledger;
mod position;
mod rules;
mod search;
mod selector;
mod session;
mod types;

pub mod cli;

pub use arena::{Arena, GameSnapshot};
pub use error::MoveError;
pub use ledger::{HISTORY_CAP, HistoryEntry, Ledger, Scores};
pub use position::Position;
pub use rules::{LINES, Verdict, evaluate, is_full, winning_line};
pub use search::{best_move, value};
pub use selector::select_move;
pub use session::{GameSession, Outcome, Phase, TurnReport};
pub use types::{Board, Controller, Mode, MovePolicy, Player, Square};
