//! Per-request guess handling.
//!
//! This is the flow a web route runs for one submitted guess, without the
//! web framework:
//!   1. Resolve (or create) the session's game
//!   2. Parse and range-check the raw input
//!   3. Apply the guess
//!   4. On a win: record it, then end the round
//!   5. On the last miss: end the round
//!
//! Step 4's order matters. The win must be counted before `end` so the
//! average recomputed at `end` includes it.
//!
//! The game lock is held from step 1 through `end`. Lock order is always
//! game, then the coordinator's internal locks; the coordinator never
//! locks a game itself.

use std::sync::Arc;

use guessforge_game::{Game, GameConfig};
use guessforge_session::{lock_game, SessionCoordinator, SessionKey};

use crate::outcome::{
    miss_message, not_a_number_message, out_of_range_message, GlobalSummary,
    GuessOutcome, Rejection, RoundStatus, GLOBAL_SUMMARY_TITLE,
};

/// Drives guessing rounds against a shared [`SessionCoordinator`].
///
/// Cheap to clone: clones share the same coordinator, so one handler can
/// be handed to every request task.
#[derive(Clone)]
pub struct GuessHandler {
    coordinator: Arc<SessionCoordinator>,
}

impl GuessHandler {
    /// Creates a handler with its own coordinator.
    pub fn new(config: GameConfig) -> Self {
        Self::with_coordinator(Arc::new(SessionCoordinator::new(config)))
    }

    /// Creates a handler on top of an existing coordinator.
    pub fn with_coordinator(coordinator: Arc<SessionCoordinator>) -> Self {
        Self { coordinator }
    }

    pub fn coordinator(&self) -> &Arc<SessionCoordinator> {
        &self.coordinator
    }

    /// Submits one raw guess for `key`'s current round.
    ///
    /// Input that isn't an integer, or falls outside the range, is
    /// rejected without spending a guess.
    pub fn submit(&self, key: &SessionKey, raw: &str) -> GuessOutcome {
        self.with_active_game(key, |game| self.apply_guess(key, game, raw))
    }

    /// Reports `key`'s round before its next guess, starting one if needed.
    pub fn status(&self, key: &SessionKey) -> RoundStatus {
        self.with_active_game(key, |game| RoundStatus {
            game_begins: game.is_game_beginning(),
            guesses_left: game.guesses_left(),
            stats_message: self.coordinator.game_stats_message(),
        })
    }

    /// Runs `f` on the session's unfinished game, holding its lock.
    ///
    /// A game found finished was ended by a concurrent request while we
    /// waited on its lock; `end` has already detached it, so the next
    /// `get` yields the session's new round.
    fn with_active_game<R>(&self, key: &SessionKey, f: impl FnOnce(&mut Game) -> R) -> R {
        loop {
            let shared = self.coordinator.get(key);
            let mut game = lock_game(&shared);
            if game.is_finished() {
                tracing::debug!(session = %key, "round already ended, moving to the next one");
                continue;
            }
            return f(&mut *game);
        }
    }

    /// Steps 2-5 of the flow. The caller holds the game lock throughout,
    /// so a finished round is ended exactly once.
    fn apply_guess(&self, key: &SessionKey, game: &mut Game, raw: &str) -> GuessOutcome {
        let guess: i64 = match raw.trim().parse() {
            Ok(n) => n,
            Err(_) => {
                tracing::debug!(session = %key, input = raw, "guess is not a number");
                return GuessOutcome::Rejected {
                    reason: Rejection::NotANumber,
                    message: not_a_number_message(raw),
                    game_begins: game.is_game_beginning(),
                    guesses_left: game.guesses_left(),
                };
            }
        };

        if !game.is_valid_guess(guess) {
            tracing::debug!(session = %key, guess, "guess out of range");
            return GuessOutcome::Rejected {
                reason: Rejection::OutOfRange,
                message: out_of_range_message(raw.trim(), game.config()),
                game_begins: game.is_game_beginning(),
                guesses_left: game.guesses_left(),
            };
        }

        if game.make_guess(guess) {
            let guesses_used = game.guesses_made();
            self.coordinator.increment_number_of_wins();
            self.coordinator.end(key);
            tracing::info!(session = %key, guesses_used, "round won");

            return GuessOutcome::Won {
                guesses_used,
                stats_message: self.coordinator.game_stats_message(),
            };
        }

        if game.has_more_guesses() {
            let hint = game.hint(guess);
            return GuessOutcome::Miss {
                hint,
                message: miss_message(hint),
                guesses_left: game.guesses_left(),
            };
        }

        let secret = game.secret();
        self.coordinator.end(key);
        tracing::info!(session = %key, secret, "round lost");

        GuessOutcome::Lost {
            secret,
            stats_message: self.coordinator.game_stats_message(),
        }
    }

    /// The global win average across every session.
    pub fn global_summary(&self) -> GlobalSummary {
        let snapshot = self.coordinator.snapshot();
        GlobalSummary {
            title: GLOBAL_SUMMARY_TITLE,
            global_win_average: snapshot.global_win_average,
            average_message: snapshot.average_games_won_message(),
            total_games: snapshot.total_games_ended,
        }
    }
}

impl Default for GuessHandler {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
