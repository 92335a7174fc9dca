//! Command-line interface for the arena binary.

use crate::types::{Mode, Player};
use clap::{Parser, ValueEnum};

/// Tic-tac-toe arena - play against a friend or the computer
#[derive(Parser, Debug)]
#[command(name = "tictactoe_arena")]
#[command(about = "Tic-tac-toe with random and perfect-play computer opponents", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Game mode
    #[arg(short, long, value_enum, default_value = "pvc")]
    pub mode: ModeArg,

    /// Which player starts
    #[arg(short, long, value_enum, default_value = "x")]
    pub start: StartArg,

    /// Pause before the computer's reply is shown, in milliseconds
    #[arg(long, default_value_t = 350)]
    pub delay_ms: u64,
}

/// Selectable game modes. Unrecognized values are rejected at parse
/// time, so no mode can silently fall through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Two humans sharing the board.
    Pvp,
    /// Against the randomly playing computer.
    Pvc,
    /// Against the perfectly playing computer.
    PvcHard,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Pvp => Mode::HumanVsHuman,
            ModeArg::Pvc => Mode::HumanVsRandom,
            ModeArg::PvcHard => Mode::HumanVsOptimal,
        }
    }
}

/// Starting player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StartArg {
    /// X moves first.
    X,
    /// O moves first.
    O,
}

impl From<StartArg> for Player {
    fn from(arg: StartArg) -> Self {
        match arg {
            StartArg::X => Player::X,
            StartArg::O => Player::O,
        }
    }
}
