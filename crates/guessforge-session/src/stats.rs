//! Cross-session win statistics.
//!
//! [`AggregateStats`] is the mutable record the coordinator keeps behind
//! its lock. [`StatsSnapshot`] is a copy taken under that lock, so every
//! message built from it sees a numerator and denominator that belong
//! together.

use serde::Serialize;

/// Shown before any round has ended.
pub const NO_GAMES_MESSAGE: &str = "No game stats yet.";

/// Shown when rounds have ended but the average is still zero.
pub const NO_GAMES_WON_MESSAGE: &str =
    "You have not won a game, yet. But I *feel* your luck changing";

// ---------------------------------------------------------------------------
// AggregateStats
// ---------------------------------------------------------------------------

/// Process-wide totals across all sessions.
///
/// Not thread-safe by itself; the coordinator owns it behind a single
/// `Mutex` so that `record_end` runs as one read-increment-recompute step.
#[derive(Debug, Clone, Default)]
pub(crate) struct AggregateStats {
    total_games_ended: u64,
    total_wins: u64,
    global_win_average: f64,
}

impl AggregateStats {
    /// Counts a won round. The average is left alone until the round's
    /// `record_end`.
    pub(crate) fn record_win(&mut self) {
        self.total_wins += 1;
    }

    /// Counts an ended round and recomputes the average.
    ///
    /// The average only moves once at least one win exists; a loss-only
    /// history keeps it at zero.
    pub(crate) fn record_end(&mut self) {
        self.total_games_ended += 1;
        if self.total_wins > 0 {
            self.global_win_average =
                self.total_wins as f64 / self.total_games_ended as f64;
        }
    }

    pub(crate) fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            total_games_ended: self.total_games_ended,
            total_wins: self.total_wins,
            global_win_average: self.global_win_average,
        }
    }
}

// ---------------------------------------------------------------------------
// StatsSnapshot
// ---------------------------------------------------------------------------

/// A consistent copy of the aggregate statistics at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StatsSnapshot {
    /// Rounds that reached `end`, won or lost.
    pub total_games_ended: u64,

    /// Rounds won.
    pub total_wins: u64,

    /// `total_wins / total_games_ended` as of the most recent `end`.
    pub global_win_average: f64,
}

impl StatsSnapshot {
    /// The site-wide stats line shown to players.
    ///
    /// One of three fixed shapes: no games yet, no wins yet, or the
    /// average over the number of ended games.
    pub fn game_stats_message(&self) -> String {
        if self.total_games_ended == 0 {
            NO_GAMES_MESSAGE.to_string()
        } else if self.global_win_average > 0.0 {
            format!(
                "You have won an average of {:.1} of this session's {} games",
                self.global_win_average, self.total_games_ended
            )
        } else {
            NO_GAMES_WON_MESSAGE.to_string()
        }
    }

    /// The average alone, one decimal place.
    pub fn average_games_won_message(&self) -> String {
        format!("{:.1}", self.global_win_average)
    }
}
