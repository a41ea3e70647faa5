//! What a guess request produces, and the text shown for it.
//!
//! These types are the hand-off point to whatever renders pages or JSON.
//! They carry both the structured facts (hint, guesses left) and the
//! ready-made message, so a renderer never has to re-derive either.

use guessforge_game::{GameConfig, Hint};
use serde::Serialize;

/// Title of the global statistics page.
pub const GLOBAL_SUMMARY_TITLE: &str = "Global Wins Average for All Users";

/// Prefix of every "wrong number" message.
pub const BAD_GUESS: &str = "Nope, try again...";

/// Why a guess was turned away before reaching the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rejection {
    /// The input did not parse as an integer.
    NotANumber,
    /// The number lies outside the guessable range.
    OutOfRange,
}

/// The result of submitting one guess.
///
/// Serialized with a `kind` tag:
///
/// ```json
/// { "kind": "miss", "hint": "Lower", "guesses_left": 3, "message": "..." }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GuessOutcome {
    /// The guess never reached the game; no guess was spent.
    Rejected {
        reason: Rejection,
        message: String,
        game_begins: bool,
        guesses_left: u32,
    },

    /// Wrong number, round continues.
    Miss {
        hint: Hint,
        message: String,
        guesses_left: u32,
    },

    /// Right number. The round has ended and been counted.
    Won {
        guesses_used: u32,
        stats_message: String,
    },

    /// Out of guesses. The round has ended and been counted.
    Lost {
        secret: i64,
        stats_message: String,
    },
}

impl GuessOutcome {
    /// Returns `true` if this guess finished the round.
    pub fn is_round_over(&self) -> bool {
        matches!(self, Self::Won { .. } | Self::Lost { .. })
    }
}

/// Where a session stands before its next guess.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoundStatus {
    pub game_begins: bool,
    pub guesses_left: u32,
    pub stats_message: String,
}

/// The site-wide win average across all sessions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GlobalSummary {
    pub title: &'static str,
    pub global_win_average: f64,
    pub average_message: String,
    pub total_games: u64,
}

pub(crate) fn not_a_number_message(raw: &str) -> String {
    format!("You entered '{raw}' but that's not a number.")
}

pub(crate) fn out_of_range_message(raw: &str, config: &GameConfig) -> String {
    format!(
        "You entered {raw}; make a guess between {} and {}.",
        config.min_guess, config.max_guess
    )
}

pub(crate) fn miss_message(hint: Hint) -> String {
    format!("{BAD_GUESS} The number is {hint} than your guess")
}
