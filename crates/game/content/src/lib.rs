//! Data-driven content definitions and loaders.
//!
//! This crate houses the static inputs of a simulation and provides loaders
//! for the files that describe them:
//! - Enemy tuning (data-driven via TOML)
//! - Encounter layouts: grid bounds, walls, player start and enemy spawns
//!   (data-driven via RON)
//!
//! Content is consumed by the runtime when it builds a world and never
//! appears in actor state.

pub mod encounter;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use encounter::{Encounter, EnemySpawn, PlayerSpawn};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, EncounterLoader, LoadResult};
