//! # Guessforge
//!
//! Number-guessing game backend with cross-session win statistics.
//!
//! Each client session plays its own round against a secret number; a
//! shared [`SessionCoordinator`] tracks the active round per session and
//! the site-wide totals (games ended, wins, global win average).
//! [`GuessHandler`] runs the per-request flow on top, so a web layer only
//! has to map requests to [`SessionKey`]s and render [`GuessOutcome`]s.
//!
//! ## Quick Start
//!
//! ```rust
//! use guessforge::prelude::*;
//!
//! let handler = GuessHandler::new(GameConfig::default());
//! let session = SessionKey::new("cookie-value")?;
//!
//! match handler.submit(&session, "4") {
//!     GuessOutcome::Won { stats_message, .. } => println!("{stats_message}"),
//!     GuessOutcome::Miss { message, .. } => println!("{message}"),
//!     other => println!("{other:?}"),
//! }
//! # Ok::<(), GuessforgeError>(())
//! ```

mod config;
mod error;
mod handler;
mod outcome;
mod telemetry;

pub use config::load_config;
pub use error::GuessforgeError;
pub use handler::GuessHandler;
pub use outcome::{
    GlobalSummary, GuessOutcome, Rejection, RoundStatus, BAD_GUESS,
    GLOBAL_SUMMARY_TITLE,
};
pub use telemetry::init_tracing;

pub use guessforge_game::{Game, GameConfig, GameState, Hint};
pub use guessforge_session::{
    lock_game, SessionCoordinator, SessionError, SessionKey, SharedGame,
    StatsSnapshot, NO_GAMES_MESSAGE, NO_GAMES_WON_MESSAGE,
};

pub mod prelude {
    //! Everything a request layer needs in one import.

    pub use crate::{
        load_config, GameConfig, GlobalSummary, GuessHandler, GuessOutcome,
        GuessforgeError, Hint, Rejection, RoundStatus, SessionCoordinator,
        SessionKey, StatsSnapshot,
    };
}
