//! Enemy simulation client binary.
//!
//! Composition root: reads configuration from the environment, loads content,
//! builds the runtime with a frame driver and plays a scripted encounter while
//! logging every runtime event.
//!
//! # Examples
//!
//! ```bash
//! RUST_LOG=runtime=debug SIM_TURNS=40 cargo run -p client-cli
//!
//! ENCOUNTER_PATH=crates/game/content/data/encounter.ron \
//! ENEMY_CONFIG_PATH=crates/game/content/data/enemy.toml \
//!     cargo run -p client-cli
//! ```
mod config;
mod logging;
mod scenario;

use anyhow::{Context, Result};
use tokio::sync::broadcast::error::RecvError;
use tracing::{info, warn};

use config::CliConfig;
use game_content::{ConfigLoader, EncounterLoader};
use game_core::EnemyConfig;
use runtime::{Runtime, Topic};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = CliConfig::from_env();
    let _log_guard = logging::setup_logging(config.log_dir.as_deref())?;

    let enemy_config = match &config.enemy_config_path {
        Some(path) => ConfigLoader::load(path)?,
        None => EnemyConfig::default(),
    };
    let encounter = match &config.encounter_path {
        Some(path) => EncounterLoader::load(path)?,
        None => scenario::default_encounter(),
    };
    info!(
        width = encounter.width,
        height = encounter.height,
        enemies = encounter.enemies.len(),
        "encounter loaded"
    );

    let mut builder = Runtime::builder()
        .encounter(encounter)
        .enemy_config(enemy_config)
        .frame_rate(config.frame_rate_hz);
    if let Some(seed) = config.feedback_seed {
        builder = builder.feedback_seed(seed);
    }
    let runtime = builder.build().await.context("failed to build runtime")?;

    spawn_event_logger(&runtime);

    let ending = scenario::play(
        &runtime,
        config.turns,
        config.player_damage,
        config.turn_pause,
    )
    .await?;

    let snapshot = runtime.handle().snapshot().await?;
    info!(
        ?ending,
        turns = snapshot.turn,
        food = snapshot.player.map(|player| player.food()),
        enemies_left = snapshot.enemies.iter().filter(|enemy| enemy.state.is_alive()).count(),
        "encounter finished"
    );

    runtime.shutdown().await?;
    Ok(())
}

/// Logs every event on every topic until the runtime goes away.
fn spawn_event_logger(runtime: &Runtime) {
    let receivers = runtime
        .handle()
        .subscribe_multiple(&[Topic::Turn, Topic::Combat, Topic::Animation]);

    for (topic, mut rx) in receivers {
        tokio::spawn(async move {
            loop {
                match rx.recv().await {
                    Ok(event) => info!(target: "client::events", ?topic, ?event),
                    Err(RecvError::Lagged(skipped)) => {
                        warn!(target: "client::events", ?topic, skipped, "event logger lagged");
                    }
                    Err(RecvError::Closed) => break,
                }
            }
        });
    }
}
