//! Doomspire headless simulator.
//!
//! Plays bot-vs-bot games and prints one JSON report per game.

use anyhow::Context;
use doomspire_core::EngineConfig;
use std::str::FromStr;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod runner;

use runner::Match;

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let games: u64 = env_or("SIM_GAMES", 1)?;
    let seed: u64 = env_or("SIM_SEED", 42)?;
    let max_rounds: u32 = env_or("SIM_MAX_ROUNDS", 200)?;
    let config = match std::env::var("SIM_CONFIG") {
        Ok(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("reading engine config from {path}"))?;
            EngineConfig::from_json(&json)?
        }
        Err(_) => EngineConfig::default(),
    };

    info!(games, seed, max_rounds, "Starting Doomspire simulation...");

    for game in 0..games {
        let report = Match::new(seed.wrapping_add(game), config.clone())?.run(max_rounds)?;
        println!("{}", serde_json::to_string(&report)?);
    }

    Ok(())
}

/// Parse an environment variable, falling back to `default` when unset
fn env_or<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(value) => value
            .parse()
            .with_context(|| format!("{key} must be a number, got {value:?}")),
        Err(_) => Ok(default),
    }
}
