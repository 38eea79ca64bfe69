//! Client configuration read from the environment.
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Scripted-encounter settings.
#[derive(Clone, Debug)]
pub struct CliConfig {
    /// TOML enemy tuning. Built-in defaults when unset.
    pub enemy_config_path: Option<PathBuf>,
    /// RON encounter layout. Built-in arena when unset.
    pub encounter_path: Option<PathBuf>,
    /// Number of turns to play before stopping.
    pub turns: u32,
    /// Frame driver rate in ticks per second.
    pub frame_rate_hz: f32,
    /// Damage the scripted player deals per hit.
    pub player_damage: i32,
    /// Wall-clock pause between turns so knockbacks can play out.
    pub turn_pause: Duration,
    /// Seed for feedback clip selection.
    pub feedback_seed: Option<u64>,
    /// Directory for a log file in addition to stderr.
    pub log_dir: Option<PathBuf>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            enemy_config_path: None,
            encounter_path: None,
            turns: 24,
            frame_rate_hz: 60.0,
            player_damage: 1,
            turn_pause: Duration::from_millis(150),
            feedback_seed: None,
            log_dir: None,
        }
    }
}

impl CliConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `ENEMY_CONFIG_PATH` - Enemy tuning TOML file
    /// - `ENCOUNTER_PATH` - Encounter layout RON file
    /// - `SIM_TURNS` - Turns to play (default: 24)
    /// - `SIM_FRAME_HZ` - Frame ticks per second (default: 60)
    /// - `SIM_PLAYER_DAMAGE` - Player hit strength (default: 1)
    /// - `SIM_TURN_PAUSE_MS` - Pause between turns in milliseconds (default: 150)
    /// - `SIM_SEED` - Feedback RNG seed (default: random)
    /// - `SIM_LOG_DIR` - Also write `client.log` into this directory
    pub fn from_env() -> Self {
        let mut config = Self::default();

        config.enemy_config_path = env::var_os("ENEMY_CONFIG_PATH").map(PathBuf::from);
        config.encounter_path = env::var_os("ENCOUNTER_PATH").map(PathBuf::from);
        config.log_dir = env::var_os("SIM_LOG_DIR").map(PathBuf::from);

        if let Some(turns) = read_env::<u32>("SIM_TURNS") {
            config.turns = turns;
        }
        if let Some(hz) = read_env::<f32>("SIM_FRAME_HZ") {
            config.frame_rate_hz = hz;
        }
        if let Some(damage) = read_env::<i32>("SIM_PLAYER_DAMAGE") {
            config.player_damage = damage.max(1);
        }
        if let Some(pause) = read_env::<u64>("SIM_TURN_PAUSE_MS") {
            config.turn_pause = Duration::from_millis(pause);
        }
        config.feedback_seed = read_env::<u64>("SIM_SEED");

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
