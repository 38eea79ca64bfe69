//! Enemy tuning loader.

use std::path::Path;

use game_core::EnemyConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for enemy tuning from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load enemy tuning from a TOML file.
    ///
    /// Keys missing from the file keep their built-in defaults. The result is
    /// validated, so a zero `move_time` or non-positive `hit_points` is
    /// rejected here rather than surfacing mid-simulation.
    pub fn load(path: &Path) -> LoadResult<EnemyConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load enemy config {}: {}", path.display(), e))
    }

    /// Parse and validate enemy tuning from TOML text.
    pub fn parse(content: &str) -> LoadResult<EnemyConfig> {
        let config: EnemyConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        config
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid enemy config: {}", e))?;

        Ok(config)
    }
}
