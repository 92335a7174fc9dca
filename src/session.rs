//! Game session state machine.
//!
//! A [`GameSession`] owns the board and phase for the lifetime of one
//! game. After every human placement it evaluates the board and, when
//! the side to move is computer-controlled, answers through the move
//! selector along the same evaluation path.

use crate::error::MoveError;
use crate::position::Position;
use crate::rules::{self, Verdict};
use crate::selector;
use crate::types::{Board, Controller, Mode, Player, Square};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Terminal result of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// A player completed a line.
    Won {
        /// The winning player.
        player: Player,
        /// The completed line, for highlighting.
        line: [Position; 3],
    },
    /// Board filled with no winner.
    Drawn,
}

impl Outcome {
    /// Short human-readable summary ("X wins", "Draw").
    pub fn summary(&self) -> String {
        match self {
            Outcome::Won { player, .. } => format!("{player} wins"),
            Outcome::Drawn => "Draw".to_string(),
        }
    }
}

/// Lifecycle phase of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// No game has been started yet.
    Idle,
    /// A game is in progress.
    Running,
    /// The game reached a terminal position.
    Ended(Outcome),
}

/// Everything that happened in response to one external move:
/// the human placement, any computer reply, and at most one
/// terminal outcome.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TurnReport {
    /// Marks placed, in order.
    pub placements: Vec<(Player, Position)>,
    /// Terminal outcome, if this turn ended the game. Reported at
    /// most once per game.
    pub outcome: Option<Outcome>,
}

/// State machine for a single game.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    to_move: Player,
    phase: Phase,
    mode: Mode,
    rng: StdRng,
}

impl GameSession {
    /// Creates an idle session for the given mode.
    #[instrument]
    pub fn new(mode: Mode) -> Self {
        Self::with_rng(mode, StdRng::from_os_rng())
    }

    /// Creates an idle session with an explicit RNG, for deterministic
    /// tests of the random policy.
    pub fn with_rng(mode: Mode, rng: StdRng) -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            phase: Phase::Idle,
            mode,
            rng,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the side to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the session's mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Changes the controller mapping for subsequent placements.
    ///
    /// Takes effect immediately: if the side to move becomes
    /// computer-controlled in a running game, external moves are
    /// rejected until a new game starts.
    pub fn set_mode(&mut self, mode: Mode) {
        debug!(?mode, "Mode changed");
        self.mode = mode;
    }

    /// True while a game is in progress.
    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// Starts a new game with the given starting player.
    ///
    /// Allowed from any phase; a running game is simply abandoned
    /// (whether to log that is the caller's policy). If the starting
    /// player is computer-controlled the computer moves immediately,
    /// so the returned report may already contain a placement.
    #[instrument(skip(self), fields(mode = ?self.mode))]
    pub fn start(&mut self, starting: Player) -> TurnReport {
        info!(starting = %starting, "Starting new game");
        self.board = Board::new();
        self.to_move = starting;
        self.phase = Phase::Running;

        let mut report = TurnReport::default();
        self.run_computer_turns(&mut report);
        report
    }

    /// Applies a move supplied from outside for the human side to move.
    ///
    /// On success the report carries the placement, any computer reply,
    /// and the outcome if the game ended. On rejection the session is
    /// unchanged.
    #[instrument(skip(self), fields(to_move = %self.to_move))]
    pub fn apply_human_move(&mut self, pos: Position) -> Result<TurnReport, MoveError> {
        if self.phase != Phase::Running {
            warn!(position = %pos, "Move rejected: no game running");
            return Err(MoveError::NotRunning);
        }
        if self.mode.controller(self.to_move) != Controller::Human {
            warn!(position = %pos, "Move rejected: computer to move");
            return Err(MoveError::NotYourTurn);
        }
        if !self.board.is_empty(pos) {
            warn!(position = %pos, "Move rejected: square occupied");
            return Err(MoveError::Occupied(pos));
        }

        let mut report = TurnReport::default();
        self.place(pos, &mut report);
        if self.phase == Phase::Running {
            self.run_computer_turns(&mut report);
        }
        Ok(report)
    }

    /// Places the current mover's mark and advances the machine.
    ///
    /// The caller has already validated the square. Exactly one
    /// terminal transition can happen per game, so the outcome is
    /// recorded in the report at most once.
    fn place(&mut self, pos: Position, report: &mut TurnReport) {
        let mover = self.to_move;
        self.board.set(pos, Square::Occupied(mover));
        report.placements.push((mover, pos));
        debug!(player = %mover, position = %pos, "Mark placed");

        match rules::evaluate(&self.board) {
            Verdict::Won { player, line } => {
                let outcome = Outcome::Won { player, line };
                info!(winner = %player, "Game won");
                self.phase = Phase::Ended(outcome);
                report.outcome = Some(outcome);
            }
            Verdict::Drawn => {
                info!("Game drawn");
                self.phase = Phase::Ended(Outcome::Drawn);
                report.outcome = Some(Outcome::Drawn);
            }
            Verdict::Ongoing => {
                self.to_move = mover.opponent();
            }
        }
    }

    /// Lets the computer play while it is the side to move.
    ///
    /// A no-op in human-vs-human mode and whenever the game is over.
    fn run_computer_turns(&mut self, report: &mut TurnReport) {
        while self.phase == Phase::Running {
            let policy = match self.mode.controller(self.to_move) {
                Controller::Human => break,
                Controller::Computer(policy) => policy,
            };
            match selector::select_move(&self.board, self.to_move, policy, &mut self.rng) {
                Some(pos) => self.place(pos, report),
                None => {
                    // Unreachable while Running: an ongoing position
                    // always has an empty square.
                    warn!("Selector returned no move on a running game");
                    break;
                }
            }
        }
    }
}
