//! Number-guessing game state machine for Guessforge.
//!
//! A [`Game`] holds one secret number and counts the guesses spent on
//! it. It knows nothing about sessions or statistics; those live in the
//! session layer above.
//!
//! # Key types
//!
//! - [`Game`] — one round: validate, guess, detect win or loss
//! - [`GameConfig`] — guessable range and guess limit
//! - [`GameState`] — round lifecycle state machine
//! - [`Hint`] — which way the secret lies after a miss

mod config;
mod game;

pub use config::{GameConfig, GameState};
pub use game::{Game, Hint};
