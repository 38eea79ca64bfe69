//! Encounter layout loader.
//!
//! Loads grid bounds, walls and spawn points from RON files.

use std::collections::HashSet;
use std::path::Path;

use game_core::Position;
use serde::{Deserialize, Serialize};

use crate::encounter::{Encounter, EnemySpawn, PlayerSpawn};
use crate::loaders::{LoadResult, read_file};

/// Encounter data structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct EncounterRon {
    dimensions: (u32, u32),
    #[serde(default)]
    walls: Vec<(i32, i32)>,
    player: PlayerRon,
    enemies: Vec<EnemyRon>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PlayerRon {
    position: (i32, i32),
    food: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct EnemyRon {
    position: (i32, i32),
    #[serde(default)]
    hit_points: Option<i32>,
}

/// Loader for encounter layouts from RON files.
pub struct EncounterLoader;

impl EncounterLoader {
    /// Load an encounter from a RON file.
    ///
    /// Every wall and spawn must lie inside the grid and no two may share a
    /// cell.
    pub fn load(path: &Path) -> LoadResult<Encounter> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load encounter {}: {}", path.display(), e))
    }

    /// Parse and check an encounter from RON text.
    pub fn parse(content: &str) -> LoadResult<Encounter> {
        let data: EncounterRon = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse encounter RON: {}", e))?;

        let (width, height) = data.dimensions;
        if width == 0 || height == 0 {
            anyhow::bail!("Encounter grid must not be empty (got {}x{})", width, height);
        }

        let encounter = Encounter {
            width,
            height,
            walls: data
                .walls
                .into_iter()
                .map(|(x, y)| Position::new(x, y))
                .collect(),
            player: PlayerSpawn {
                position: Position::new(data.player.position.0, data.player.position.1),
                food: data.player.food,
            },
            enemies: data
                .enemies
                .into_iter()
                .map(|enemy| EnemySpawn {
                    position: Position::new(enemy.position.0, enemy.position.1),
                    hit_points: enemy.hit_points,
                })
                .collect(),
        };

        check_layout(&encounter)?;
        Ok(encounter)
    }
}

fn check_layout(encounter: &Encounter) -> LoadResult<()> {
    let mut seen = HashSet::new();
    for cell in encounter.occupied_cells() {
        if !encounter.contains(cell) {
            anyhow::bail!(
                "Cell {} lies outside the {}x{} grid",
                cell,
                encounter.width,
                encounter.height
            );
        }
        if !seen.insert(cell) {
            anyhow::bail!("Cell {} is occupied more than once", cell);
        }
    }

    let dead_spawn = encounter
        .enemies
        .iter()
        .find_map(|spawn| spawn.hit_points.filter(|hp| *hp <= 0).map(|hp| (spawn, hp)));
    if let Some((spawn, hit_points)) = dead_spawn {
        anyhow::bail!(
            "Enemy at {} must spawn with positive hit points (got {})",
            spawn.position,
            hit_points
        );
    }

    Ok(())
}
