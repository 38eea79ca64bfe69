use glam::Vec2;

use super::common::{EntityId, Position, TargetRef, Tint};
use crate::config::EnemyConfig;

/// Whether an enemy still takes part in the simulation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Liveness {
    #[default]
    Active,
    /// Hit points reached zero. Terminal: nothing writes to a destroyed enemy.
    Destroyed,
}

/// Mutable state of a single enemy.
///
/// `position` is continuous but grid-aligned whenever no knockback is in
/// flight. `hit_points` never increases after spawn.
#[derive(Clone, Debug, PartialEq)]
pub struct EnemyState {
    pub id: EntityId,
    pub position: Vec2,
    pub hit_points: i32,
    /// Set after every acting turn; the next turn is spent resting.
    pub skip_move: bool,
    /// Rest-state tint captured at spawn.
    pub base_tint: Tint,
    pub tint: Tint,
    pub contact_damage: i32,
    pub target: TargetRef,
    pub liveness: Liveness,
}

impl EnemyState {
    pub fn new(id: EntityId, cell: Position, target: TargetRef, config: &EnemyConfig) -> Self {
        Self {
            id,
            position: cell.to_world(),
            hit_points: config.hit_points,
            skip_move: false,
            base_tint: config.base_tint,
            tint: config.base_tint,
            contact_damage: config.contact_damage,
            target,
            liveness: Liveness::Active,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.liveness == Liveness::Active
    }

    /// Grid cell the enemy currently occupies.
    pub fn cell(&self) -> Position {
        Position::from_world(self.position)
    }
}
