//! Game configuration and round state machine.

use serde::{Deserialize, Serialize};
use tracing::warn;

// ---------------------------------------------------------------------------
// GameConfig
// ---------------------------------------------------------------------------

/// Configuration shared by every game a coordinator creates.
///
/// The guessable range is inclusive on both ends. All fields default, so a
/// partial JSON document like `{"guess_limit": 3}` is a valid config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Smallest number a player may guess.
    pub min_guess: i64,

    /// Largest number a player may guess.
    pub max_guess: i64,

    /// How many guesses a player gets per round.
    pub guess_limit: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min_guess: 0,
            max_guess: 9,
            guess_limit: 5,
        }
    }
}

impl GameConfig {
    /// Repairs out-of-range values so the config is safe to use.
    ///
    /// Rules:
    /// - an inverted range (`min_guess > max_guess`) is swapped.
    /// - `guess_limit` of 0 is raised to 1.
    pub fn validated(mut self) -> Self {
        if self.min_guess > self.max_guess {
            warn!(
                min = self.min_guess,
                max = self.max_guess,
                "guess range is inverted, swapping bounds"
            );
            std::mem::swap(&mut self.min_guess, &mut self.max_guess);
        }
        if self.guess_limit == 0 {
            warn!("guess_limit of 0 would end every round at once, using 1");
            self.guess_limit = 1;
        }
        self
    }

    /// Returns `true` if `n` lies inside the guessable range.
    pub fn contains(&self, n: i64) -> bool {
        (self.min_guess..=self.max_guess).contains(&n)
    }
}

// ---------------------------------------------------------------------------
// GameState
// ---------------------------------------------------------------------------

/// The lifecycle state of one round.
///
/// ```text
/// NotStarted → InProgress → Won | Lost
///      └──────────────────→ Won | Lost
/// ```
///
/// A first guess can end the round immediately (lucky hit, or a one-guess
/// limit), which is why `NotStarted` may skip `InProgress`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    NotStarted,
    InProgress,
    Won,
    Lost,
}

impl GameState {
    /// Returns `true` once the round has been won or lost.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotStarted => write!(f, "NotStarted"),
            Self::InProgress => write!(f, "InProgress"),
            Self::Won => write!(f, "Won"),
            Self::Lost => write!(f, "Lost"),
        }
    }
}
