use std::time::Instant;

use guessforge::prelude::*;
use guessforge::init_tracing;
use rand::Rng;

const DEFAULT_SESSIONS: usize = 64;
const ROUNDS_PER_SESSION: usize = 3;

// ---------------------------------------------------------------------------
// Simulated players
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug)]
enum Strategy {
    /// Halves the candidate range on every hint.
    Bisect,
    /// Ignores hints and guesses anywhere in range.
    Random,
}

/// Midpoint of `lo..=hi`, computed wide so extreme ranges don't overflow.
fn midpoint(lo: i64, hi: i64) -> i64 {
    ((i128::from(lo) + i128::from(hi)) / 2) as i64
}

fn play_round(handler: &GuessHandler, key: &SessionKey, strategy: Strategy) -> GuessOutcome {
    let config = *handler.coordinator().config();
    let (mut lo, mut hi) = (config.min_guess, config.max_guess);
    let mut rng = rand::rng();

    loop {
        let guess = match strategy {
            Strategy::Bisect => midpoint(lo, hi),
            Strategy::Random => rng.random_range(config.min_guess..=config.max_guess),
        };
        match handler.submit(key, &guess.to_string()) {
            GuessOutcome::Miss { hint: Hint::Lower, .. } => hi = guess - 1,
            GuessOutcome::Miss { hint: Hint::Higher, .. } => lo = guess + 1,
            outcome => return outcome,
        }
    }
}

/// Runs `sessions` concurrent players, each playing a few rounds.
async fn simulate(handler: &GuessHandler, sessions: usize) -> Result<(), GuessforgeError> {
    let mut tasks = Vec::with_capacity(sessions);

    for i in 0..sessions {
        let handler = handler.clone();
        let key = SessionKey::new(format!("sim-{i}"))?;
        let strategy = if i % 2 == 0 { Strategy::Bisect } else { Strategy::Random };

        tasks.push(tokio::spawn(async move {
            for _ in 0..ROUNDS_PER_SESSION {
                let outcome = play_round(&handler, &key, strategy);
                tracing::debug!(session = %key, ?strategy, ?outcome, "round finished");
                tokio::task::yield_now().await;
            }
        }));
    }

    for task in tasks {
        if let Err(e) = task.await {
            tracing::error!(error = %e, "simulated session panicked");
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

/// Usage: `guess-sim [SESSIONS] [CONFIG.json]`
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let mut args = std::env::args().skip(1);
    let sessions = match args.next() {
        Some(n) => n.parse()?,
        None => DEFAULT_SESSIONS,
    };
    let config = match args.next() {
        Some(path) => load_config(path)?,
        None => GameConfig::default(),
    };

    tracing::info!(sessions, ?config, "starting simulation");
    let handler = GuessHandler::new(config);

    let start = Instant::now();
    simulate(&handler, sessions).await?;
    tracing::info!(elapsed_ms = start.elapsed().as_millis() as u64, "simulation done");

    println!("{}", handler.coordinator().game_stats_message());
    println!("{}", serde_json::to_string_pretty(&handler.global_summary())?);
    Ok(())
}
