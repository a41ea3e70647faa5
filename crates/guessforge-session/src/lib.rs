//! Session coordination for Guessforge.
//!
//! This crate ties games to sessions and keeps the site-wide totals:
//!
//! 1. **Identity** — an opaque, non-empty [`SessionKey`] per client
//! 2. **Game tracking** — one active game per session ([`SessionCoordinator`])
//! 3. **Statistics** — games ended, wins, and the global win average,
//!    updated atomically at the end of each round ([`StatsSnapshot`])
//!
//! # How it fits in the stack
//!
//! ```text
//! Guess handler (above)  ← parses input, drives rounds, reports outcomes
//!     ↕
//! Session Layer (this crate)  ← session → game map, aggregate stats
//!     ↕
//! Game Layer (below)  ← one round's state machine
//! ```

mod coordinator;
mod error;
mod key;
mod stats;

pub use coordinator::{lock_game, SessionCoordinator, SharedGame};
pub use error::SessionError;
pub use key::SessionKey;
pub use stats::{StatsSnapshot, NO_GAMES_MESSAGE, NO_GAMES_WON_MESSAGE};
