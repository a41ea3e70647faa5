//! The session coordinator: one game per session, totals across all of them.
//!
//! This is the only shared state in Guessforge. It's responsible for:
//! - Creating a game the first time a session asks for one
//! - Handing out the same game for the rest of that round
//! - Detaching the game when the round ends
//! - Keeping the site-wide games/wins/average totals consistent
//!
//! # Concurrency note
//!
//! `SessionCoordinator` is shared by every request handler at once, so
//! it synchronizes internally with two independent locks:
//!
//! - `games` guards the session → game map.
//! - `stats` guards the aggregate counters. `end` and
//!   `increment_number_of_wins` both mutate them under this one lock, so
//!   the average is never computed against a half-updated denominator.
//!
//! No method holds both locks at the same time.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use guessforge_game::{Game, GameConfig};

use crate::stats::AggregateStats;
use crate::{SessionKey, StatsSnapshot};

/// A game shared between the coordinator and the session's handlers.
///
/// Handlers hold its lock across `end`, so a request that waited on it
/// can tell the round already finished.
pub type SharedGame = Arc<Mutex<Game>>;

/// Tracks the active game of every session and the totals of all
/// finished rounds.
///
/// ## Lifecycle of a round
///
/// ```text
/// get() ──→ [game attached] ──→ increment_number_of_wins()? ──→ end()
///   ↑                                                            │
///   └──────────────── next get() creates a fresh game ───────────┘
/// ```
pub struct SessionCoordinator {
    /// Settings for every game this coordinator creates.
    config: GameConfig,

    /// The active game per session. A session with no entry has no
    /// round in progress.
    games: Mutex<HashMap<SessionKey, SharedGame>>,

    /// Totals over every ended round, process lifetime.
    stats: Mutex<AggregateStats>,
}

impl SessionCoordinator {
    /// Creates a coordinator whose games use `config`.
    pub fn new(config: GameConfig) -> Self {
        Self {
            config: config.validated(),
            games: Mutex::new(HashMap::new()),
            stats: Mutex::new(AggregateStats::default()),
        }
    }

    /// Returns the game attached to `key`, creating one if absent.
    ///
    /// Repeated calls within a round return the same instance.
    pub fn get(&self, key: &SessionKey) -> SharedGame {
        let mut games = lock(&self.games);
        if let Some(game) = games.get(key) {
            return Arc::clone(game);
        }

        let game = Arc::new(Mutex::new(Game::new(self.config)));
        games.insert(key.clone(), Arc::clone(&game));
        tracing::info!(session = %key, "new game created");
        game
    }

    /// Ends the session's round: detaches its game and counts the round.
    ///
    /// Call exactly once per completed round, after
    /// [`increment_number_of_wins`](Self::increment_number_of_wins) if the
    /// round was won. The round is counted even when no game was attached.
    ///
    /// Returns `true` if a game was detached.
    pub fn end(&self, key: &SessionKey) -> bool {
        let detached = lock(&self.games).remove(key).is_some();

        let snapshot = {
            let mut stats = lock(&self.stats);
            stats.record_end();
            stats.snapshot()
        };

        tracing::info!(
            session = %key,
            detached,
            total_games = snapshot.total_games_ended,
            wins = snapshot.total_wins,
            average = snapshot.global_win_average,
            "round ended"
        );
        detached
    }

    /// Counts a won round. The average is updated by the paired `end`.
    pub fn increment_number_of_wins(&self) {
        lock(&self.stats).record_win();
    }

    /// A consistent copy of all three aggregate values.
    pub fn snapshot(&self) -> StatsSnapshot {
        lock(&self.stats).snapshot()
    }

    /// The site-wide stats line (no games / no wins / average).
    pub fn game_stats_message(&self) -> String {
        self.snapshot().game_stats_message()
    }

    /// The global average formatted to one decimal place.
    pub fn average_games_won_message(&self) -> String {
        self.snapshot().average_games_won_message()
    }

    pub fn global_average_games_won(&self) -> f64 {
        self.snapshot().global_win_average
    }

    pub fn total_games_count(&self) -> u64 {
        self.snapshot().total_games_ended
    }

    pub fn number_of_wins(&self) -> u64 {
        self.snapshot().total_wins
    }

    /// Number of sessions with a round in progress.
    pub fn active_sessions(&self) -> usize {
        lock(&self.games).len()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}

impl Default for SessionCoordinator {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

/// Locks a session's game.
pub fn lock_game(game: &SharedGame) -> MutexGuard<'_, Game> {
    lock(game.as_ref())
}

/// Acquires `mutex`, recovering the guard if a previous holder panicked.
///
/// Every critical section here leaves its data consistent before any
/// point that could panic, so the poisoned value is still valid.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => {
            tracing::warn!("recovering poisoned coordinator lock");
            poisoned.into_inner()
        }
    }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    //! Unit tests for `SessionCoordinator`.
    //!
    //! Naming: `test_{function}_{scenario}_{expected}`. Multi-threaded
    //! behavior lives in `tests/concurrency.rs`.

    use super::*;
    use crate::{NO_GAMES_MESSAGE, NO_GAMES_WON_MESSAGE};

    // -- Helpers ----------------------------------------------------------

    fn key(raw: &str) -> SessionKey {
        SessionKey::new(raw).unwrap()
    }

    /// Plays the session's current game to a loss without ending it.
    fn lose(coord: &SessionCoordinator, k: &SessionKey) {
        let game = coord.get(k);
        let mut game = lock_game(&game);
        let secret = game.secret();
        let misses: Vec<i64> = (0..=9).filter(|n| *n != secret).collect();
        for n in misses {
            if !game.has_more_guesses() {
                break;
            }
            game.make_guess(n);
        }
        assert!(game.is_finished() && !game.is_won());
    }

    /// Plays the session's current game to a win without ending it.
    fn win(coord: &SessionCoordinator, k: &SessionKey) {
        let game = coord.get(k);
        let mut game = lock_game(&game);
        let secret = game.secret();
        assert!(game.make_guess(secret));
    }

    // =====================================================================
    // get()
    // =====================================================================

    #[test]
    fn test_get_new_session_creates_fresh_game() {
        let coord = SessionCoordinator::default();

        let game = coord.get(&key("a"));
        let game = lock_game(&game);

        assert!(game.is_game_beginning());
        assert_eq!(game.guesses_left(), 5);
        assert_eq!(coord.active_sessions(), 1);
    }

    #[test]
    fn test_get_same_session_returns_same_instance() {
        let coord = SessionCoordinator::default();

        let first = coord.get(&key("a"));
        lock_game(&first).make_guess(0);
        let second = coord.get(&key("a"));

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(coord.active_sessions(), 1);
    }

    #[test]
    fn test_get_different_sessions_get_different_games() {
        let coord = SessionCoordinator::default();

        let a = coord.get(&key("a"));
        let b = coord.get(&key("b"));

        assert!(!Arc::ptr_eq(&a, &b));
        assert_eq!(coord.active_sessions(), 2);
    }

    #[test]
    fn test_get_uses_coordinator_config() {
        let coord = SessionCoordinator::new(GameConfig {
            min_guess: 100,
            max_guess: 105,
            guess_limit: 2,
        });

        let game = coord.get(&key("a"));
        let game = lock_game(&game);

        assert_eq!(game.guesses_left(), 2);
        assert!((100..=105).contains(&game.secret()));
    }

    // =====================================================================
    // end()
    // =====================================================================

    #[test]
    fn test_end_detaches_game_and_next_get_is_fresh() {
        let coord = SessionCoordinator::default();
        let k = key("a");
        let first = coord.get(&k);
        lock_game(&first).make_guess(0);

        assert!(coord.end(&k));

        let second = coord.get(&k);
        assert!(!Arc::ptr_eq(&first, &second));
        assert!(lock_game(&second).is_game_beginning());
    }

    #[test]
    fn test_end_counts_round() {
        let coord = SessionCoordinator::default();
        let k = key("a");
        lose(&coord, &k);

        coord.end(&k);

        assert_eq!(coord.total_games_count(), 1);
        assert_eq!(coord.number_of_wins(), 0);
        assert_eq!(coord.active_sessions(), 0);
    }

    #[test]
    fn test_end_without_game_still_counts_round() {
        let coord = SessionCoordinator::default();

        assert!(!coord.end(&key("ghost")));

        assert_eq!(coord.total_games_count(), 1);
    }

    #[test]
    fn test_end_does_not_touch_other_sessions() {
        let coord = SessionCoordinator::default();
        let a = coord.get(&key("a"));
        coord.get(&key("b"));

        coord.end(&key("b"));

        assert!(Arc::ptr_eq(&a, &coord.get(&key("a"))));
        assert_eq!(coord.active_sessions(), 1);
    }

    // =====================================================================
    // increment_number_of_wins()
    // =====================================================================

    #[test]
    fn test_increment_number_of_wins_leaves_average_until_end() {
        let coord = SessionCoordinator::default();
        let k = key("a");
        win(&coord, &k);

        coord.increment_number_of_wins();
        assert_eq!(coord.number_of_wins(), 1);
        assert_eq!(
            coord.global_average_games_won(),
            0.0,
            "readers between win and end see the stale average"
        );

        coord.end(&k);
        assert_eq!(coord.global_average_games_won(), 1.0);
    }

    // =====================================================================
    // game_stats_message()
    // =====================================================================

    #[test]
    fn test_game_stats_message_fresh_coordinator() {
        let coord = SessionCoordinator::default();
        assert_eq!(coord.game_stats_message(), NO_GAMES_MESSAGE);
    }

    #[test]
    fn test_game_stats_message_after_one_loss() {
        let coord = SessionCoordinator::default();
        let k = key("a");
        lose(&coord, &k);
        coord.end(&k);

        assert_eq!(coord.total_games_count(), 1);
        assert_eq!(coord.number_of_wins(), 0);
        assert_eq!(coord.game_stats_message(), NO_GAMES_WON_MESSAGE);
    }

    #[test]
    fn test_game_stats_message_after_win_and_loss() {
        let coord = SessionCoordinator::default();
        let a = key("a");
        let b = key("b");

        win(&coord, &a);
        coord.increment_number_of_wins();
        coord.end(&a);
        lose(&coord, &b);
        coord.end(&b);

        assert_eq!(
            coord.game_stats_message(),
            "You have won an average of 0.5 of this session's 2 games"
        );
        assert_eq!(coord.average_games_won_message(), "0.5");
    }

    // =====================================================================
    // Average semantics
    // =====================================================================

    #[test]
    fn test_average_win_then_losses_is_recomputed_at_each_end() {
        let coord = SessionCoordinator::default();
        let k = key("a");

        win(&coord, &k);
        coord.increment_number_of_wins();
        coord.end(&k);
        for _ in 0..3 {
            lose(&coord, &k);
            coord.end(&k);
        }

        assert_eq!(coord.global_average_games_won(), 0.25);
    }

    #[test]
    fn test_average_losses_only_stays_zero() {
        let coord = SessionCoordinator::default();
        for i in 0..4 {
            let k = key(&format!("s{i}"));
            lose(&coord, &k);
            coord.end(&k);
        }

        assert_eq!(coord.total_games_count(), 4);
        assert_eq!(coord.global_average_games_won(), 0.0);
    }

    #[test]
    fn test_snapshot_is_consistent_copy() {
        let coord = SessionCoordinator::default();
        let k = key("a");
        win(&coord, &k);
        coord.increment_number_of_wins();
        coord.end(&k);

        let snap = coord.snapshot();

        assert_eq!(
            snap,
            StatsSnapshot {
                total_games_ended: 1,
                total_wins: 1,
                global_win_average: 1.0,
            }
        );
    }

    #[test]
    fn test_new_validates_config() {
        let coord = SessionCoordinator::new(GameConfig {
            min_guess: 5,
            max_guess: 1,
            guess_limit: 0,
        });

        assert_eq!(coord.config().min_guess, 1);
        assert_eq!(coord.config().max_guess, 5);
        assert_eq!(coord.config().guess_limit, 1);
    }
}
