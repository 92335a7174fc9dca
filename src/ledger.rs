//! Score and history bookkeeping across games.

use crate::session::Outcome;
use crate::types::Player;
use chrono::{DateTime, Local};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::{debug, info, instrument};

/// How many finished games the history keeps.
pub const HISTORY_CAP: usize = 10;

/// Win/draw tally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Scores {
    /// Games won by X.
    x: u32,
    /// Games won by O.
    o: u32,
    /// Drawn games.
    draws: u32,
}

/// One line in the recent-results log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct HistoryEntry {
    /// What happened ("X wins", "Draw", "Round 3 abandoned").
    summary: String,
    /// When it was recorded.
    recorded_at: DateTime<Local>,
}

/// Process-wide score and history ledger.
///
/// Outlives individual game sessions; mutated only through
/// [`record_outcome`](Ledger::record_outcome),
/// [`reset_all`](Ledger::reset_all),
/// [`advance_round`](Ledger::advance_round) and
/// [`note_abandoned`](Ledger::note_abandoned).
#[derive(Debug, Clone)]
pub struct Ledger {
    scores: Scores,
    history: VecDeque<HistoryEntry>,
    round: u32,
}

impl Ledger {
    /// Creates an empty ledger at round 1.
    pub fn new() -> Self {
        Self {
            scores: Scores::default(),
            history: VecDeque::with_capacity(HISTORY_CAP),
            round: 1,
        }
    }

    /// Returns the current tally.
    pub fn scores(&self) -> Scores {
        self.scores
    }

    /// Returns the recent-results log, most recent first.
    pub fn history(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.history.iter()
    }

    /// Returns the current round number.
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Records a finished game: bumps the matching counter and
    /// prepends a history entry.
    #[instrument(skip(self))]
    pub fn record_outcome(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Won {
                player: Player::X, ..
            } => self.scores.x += 1,
            Outcome::Won {
                player: Player::O, ..
            } => self.scores.o += 1,
            Outcome::Drawn => self.scores.draws += 1,
        }
        info!(summary = %outcome.summary(), scores = ?self.scores, "Outcome recorded");
        self.push_entry(outcome.summary());
    }

    /// Logs that a running game was discarded, without touching the
    /// counters.
    #[instrument(skip(self))]
    pub fn note_abandoned(&mut self) {
        info!(round = self.round, "Game abandoned");
        self.push_entry(format!("Round {} abandoned", self.round));
    }

    /// Moves on to the next round, keeping scores and history.
    #[instrument(skip(self))]
    pub fn advance_round(&mut self) {
        self.round += 1;
        debug!(round = self.round, "Round advanced");
    }

    /// Zeroes the counters, clears the history and rewinds to round 1.
    #[instrument(skip(self))]
    pub fn reset_all(&mut self) {
        info!("Resetting scores and history");
        self.scores = Scores::default();
        self.history.clear();
        self.round = 1;
    }

    /// Prepends an entry, evicting the oldest past the cap.
    fn push_entry(&mut self, summary: String) {
        self.history.push_front(HistoryEntry {
            summary,
            recorded_at: Local::now(),
        });
        self.history.truncate(HISTORY_CAP);
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}
