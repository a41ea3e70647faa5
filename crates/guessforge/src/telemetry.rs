//! Tracing setup for binaries built on Guessforge.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Installs a global fmt subscriber filtered by `RUST_LOG`.
///
/// Falls back to `info` when `RUST_LOG` is unset or unparsable. Calling
/// this more than once is harmless: later calls leave the first
/// subscriber in place.
pub fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(false))
        .try_init();
}
