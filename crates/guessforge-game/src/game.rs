//! A single round of the guessing game.
//!
//! `Game` is a plain state machine with no internal locking: a session
//! is served by one client at a time, so the coordinator only needs to
//! share the instance, not arbitrate writers.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{GameConfig, GameState};

/// Which way the secret lies relative to a missed guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Hint {
    /// The secret is lower than the guess.
    Lower,
    /// The secret is higher than the guess.
    Higher,
}

impl std::fmt::Display for Hint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lower => write!(f, "lower"),
            Self::Higher => write!(f, "higher"),
        }
    }
}

/// One play-through: a secret number and the guesses spent on it.
///
/// ## Lifecycle
///
/// ```text
/// new() ──→ make_guess()* ──→ [Won]  (guess matched)
///                        └──→ [Lost] (limit reached without a match)
/// ```
///
/// Guesses against a finished round, or outside the configured range,
/// are ignored: they return `false` and leave every counter untouched.
/// Callers are expected to check [`is_valid_guess`](Self::is_valid_guess)
/// and [`has_more_guesses`](Self::has_more_guesses) first.
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    secret: i64,
    guesses_made: u32,
    state: GameState,
}

impl Game {
    /// Creates a game with a secret drawn uniformly from the config's range.
    pub fn new(config: GameConfig) -> Self {
        let config = config.validated();
        let secret = rand::rng().random_range(config.min_guess..=config.max_guess);
        Self::from_parts(config, secret)
    }

    /// Creates a game with a known secret.
    ///
    /// The config is validated like in [`Game::new`], and a secret outside
    /// the range is clamped into it so the round stays winnable.
    pub fn with_secret(config: GameConfig, secret: i64) -> Self {
        let config = config.validated();
        let clamped = secret.clamp(config.min_guess, config.max_guess);
        if clamped != secret {
            tracing::warn!(
                secret,
                min = config.min_guess,
                max = config.max_guess,
                "secret outside guess range, clamping"
            );
        }
        Self::from_parts(config, clamped)
    }

    fn from_parts(config: GameConfig, secret: i64) -> Self {
        Self {
            config,
            secret,
            guesses_made: 0,
            state: GameState::NotStarted,
        }
    }

    /// Returns `true` if `n` lies in the configured guessable range.
    pub fn is_valid_guess(&self, n: i64) -> bool {
        self.config.contains(n)
    }

    /// Submits a guess. Returns `true` if it matched the secret.
    ///
    /// A match ends the round as `Won`. A miss that uses up the last
    /// guess ends it as `Lost`.
    pub fn make_guess(&mut self, n: i64) -> bool {
        if self.state.is_terminal() || !self.is_valid_guess(n) {
            tracing::debug!(
                guess = n,
                state = %self.state,
                "ignoring guess: round over or out of range"
            );
            return false;
        }

        self.guesses_made += 1;
        let correct = n == self.secret;

        self.state = if correct {
            GameState::Won
        } else if self.guesses_made >= self.config.guess_limit {
            GameState::Lost
        } else {
            GameState::InProgress
        };

        tracing::debug!(
            guess = n,
            correct,
            guesses_left = self.guesses_left(),
            "guess made"
        );
        correct
    }

    /// Guesses still available this round. Never negative.
    pub fn guesses_left(&self) -> u32 {
        self.config.guess_limit.saturating_sub(self.guesses_made)
    }

    /// Returns `true` while at least one guess remains.
    pub fn has_more_guesses(&self) -> bool {
        self.guesses_left() > 0
    }

    /// Returns `true` only before the first accepted guess.
    pub fn is_game_beginning(&self) -> bool {
        self.guesses_made == 0
    }

    /// Which direction to point the player after a missed guess of `n`.
    pub fn hint(&self, n: i64) -> Hint {
        if self.secret < n {
            Hint::Lower
        } else {
            Hint::Higher
        }
    }

    /// The number to guess.
    pub fn secret(&self) -> i64 {
        self.secret
    }

    pub fn guesses_made(&self) -> u32 {
        self.guesses_made
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// Returns `true` once the round is won or lost.
    pub fn is_finished(&self) -> bool {
        self.state.is_terminal()
    }

    pub fn is_won(&self) -> bool {
        self.state == GameState::Won
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}

// =========================================================================
// Tests
// =========================================================================
