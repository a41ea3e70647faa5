//! Loading a [`GameConfig`] from disk.
//!
//! The file is JSON with every field optional:
//!
//! ```json
//! { "min_guess": 1, "max_guess": 100, "guess_limit": 7 }
//! ```

use std::path::Path;

use guessforge_game::GameConfig;

use crate::GuessforgeError;

/// Reads and validates a game config from a JSON file.
///
/// # Errors
/// - [`GuessforgeError::Io`] if the file cannot be read
/// - [`GuessforgeError::Config`] if it is not a valid config document
pub fn load_config(path: impl AsRef<Path>) -> Result<GameConfig, GuessforgeError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let config: GameConfig =
        serde_json::from_str(&text).map_err(|source| GuessforgeError::Config {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::info!(
        path = %path.display(),
        min = config.min_guess,
        max = config.max_guess,
        guess_limit = config.guess_limit,
        "game config loaded"
    );
    Ok(config.validated())
}
