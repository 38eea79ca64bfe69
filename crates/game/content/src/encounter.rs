//! Encounter layout: the grid an enemy group is spawned into.

use game_core::Position;

/// Where the player starts and how much food they carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerSpawn {
    pub position: Position,
    pub food: i32,
}

/// One enemy placement. `hit_points` overrides the tuning default.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemySpawn {
    pub position: Position,
    #[cfg_attr(feature = "serde", serde(default))]
    pub hit_points: Option<i32>,
}

impl EnemySpawn {
    pub fn at(position: Position) -> Self {
        Self {
            position,
            hit_points: None,
        }
    }
}

/// A rectangular grid with blocking walls, one player and any number of
/// enemies. Cells run from `(0, 0)` to `(width - 1, height - 1)`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Encounter {
    pub width: u32,
    pub height: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub walls: Vec<Position>,
    pub player: PlayerSpawn,
    #[cfg_attr(feature = "serde", serde(default))]
    pub enemies: Vec<EnemySpawn>,
}

impl Encounter {
    pub fn new(width: u32, height: u32, player: PlayerSpawn) -> Self {
        Self {
            width,
            height,
            walls: Vec::new(),
            player,
            enemies: Vec::new(),
        }
    }

    pub fn with_wall(mut self, position: Position) -> Self {
        self.walls.push(position);
        self
    }

    pub fn with_enemy(mut self, spawn: EnemySpawn) -> Self {
        self.enemies.push(spawn);
        self
    }

    /// True when `position` lies inside the grid bounds.
    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && (position.x as u32) < self.width
            && (position.y as u32) < self.height
    }

    /// Every occupied cell in spawn order: walls, then the player, then enemies.
    pub fn occupied_cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.walls
            .iter()
            .copied()
            .chain(std::iter::once(self.player.position))
            .chain(self.enemies.iter().map(|spawn| spawn.position))
    }
}
