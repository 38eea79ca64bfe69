//! Content loaders for reading simulation data from files.
//!
//! Enemy tuning is TOML and deserializes straight into
//! [`game_core::EnemyConfig`]; encounter layouts are RON and go through a
//! private file format before being checked and converted into
//! [`crate::Encounter`].

pub mod config;
pub mod encounter;

pub use config::ConfigLoader;
pub use encounter::EncounterLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
