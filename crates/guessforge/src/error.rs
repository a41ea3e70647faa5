//! Unified error type for Guessforge.

use std::path::PathBuf;

use guessforge_session::SessionError;

/// Top-level error that wraps all crate-specific errors.
///
/// Bad guesses are not errors: they come back as
/// [`GuessOutcome::Rejected`](crate::GuessOutcome::Rejected). This type
/// covers the failures a caller cannot turn into a user message.
#[derive(Debug, thiserror::Error)]
pub enum GuessforgeError {
    /// A session-level error (missing session identity).
    #[error(transparent)]
    Session(#[from] SessionError),

    /// The config file exists but is not a valid game config.
    #[error("invalid config in {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The config file could not be read.
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
}
