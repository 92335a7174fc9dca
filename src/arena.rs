//! Application root composing a session with the ledger.

use crate::error::MoveError;
use crate::ledger::{HistoryEntry, Ledger, Scores};
use crate::position::Position;
use crate::session::{GameSession, Phase, TurnReport};
use crate::types::{Board, Mode, Player};
use derive_getters::Getters;
use rand::rngs::StdRng;
use serde::Serialize;
use tracing::{info, instrument};

/// Read-only snapshot of the current game for display layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct GameSnapshot {
    /// The board.
    board: Board,
    /// Side to move.
    to_move: Player,
    /// Session phase.
    phase: Phase,
    /// Active mode.
    mode: Mode,
}

/// Owns one [`GameSession`] and the [`Ledger`], wiring every terminal
/// outcome into the score and history bookkeeping.
///
/// Starting a new game while one is still running always logs an
/// abandonment entry; the discarded game never touches the counters.
#[derive(Debug, Clone)]
pub struct Arena {
    session: GameSession,
    ledger: Ledger,
    games_started: u32,
}

impl Arena {
    /// Creates an arena for the given mode with no game running.
    #[instrument]
    pub fn new(mode: Mode) -> Self {
        Self {
            session: GameSession::new(mode),
            ledger: Ledger::new(),
            games_started: 0,
        }
    }

    /// Creates an arena with a seeded session RNG, for tests.
    pub fn with_rng(mode: Mode, rng: StdRng) -> Self {
        Self {
            session: GameSession::with_rng(mode, rng),
            ledger: Ledger::new(),
            games_started: 0,
        }
    }

    /// Starts a new game under the given mode, advancing the round
    /// counter on every start after the first since the last score
    /// reset.
    ///
    /// The mode is per game, so the opponent can change between
    /// rounds while scores and history carry over.
    #[instrument(skip(self))]
    pub fn new_game(&mut self, mode: Mode, starting: Player) -> TurnReport {
        if self.session.is_running() {
            self.ledger.note_abandoned();
        }
        if self.games_started > 0 {
            self.ledger.advance_round();
        }
        self.games_started += 1;
        self.session.set_mode(mode);
        info!(round = self.ledger.round(), ?mode, starting = %starting, "New game");

        let report = self.session.start(starting);
        self.absorb(&report);
        report
    }

    /// Applies a human move and records any resulting outcome.
    #[instrument(skip(self))]
    pub fn apply_human_move(&mut self, pos: Position) -> Result<TurnReport, MoveError> {
        let report = self.session.apply_human_move(pos)?;
        self.absorb(&report);
        Ok(report)
    }

    /// Resets scores, history and the round counter. The game in
    /// progress, if any, keeps playing as round 1.
    #[instrument(skip(self))]
    pub fn reset_scores(&mut self) {
        self.ledger.reset_all();
        self.games_started = u32::from(self.games_started > 0);
    }

    /// Returns a snapshot of the current game.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.session.board().clone(),
            to_move: self.session.to_move(),
            phase: self.session.phase(),
            mode: self.session.mode(),
        }
    }

    /// Returns the score tally.
    pub fn scores(&self) -> Scores {
        self.ledger.scores()
    }

    /// Returns the recent-results log, most recent first.
    pub fn history(&self) -> Vec<&HistoryEntry> {
        self.ledger.history().collect()
    }

    /// Returns the current round number.
    pub fn round(&self) -> u32 {
        self.ledger.round()
    }

    /// Feeds a turn's outcome, if any, into the ledger.
    fn absorb(&mut self, report: &TurnReport) {
        if let Some(outcome) = &report.outcome {
            self.ledger.record_outcome(outcome);
        }
    }
}
