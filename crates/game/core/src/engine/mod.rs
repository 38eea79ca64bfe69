//! The enemy actor: state plus the two processes that mutate it.
//!
//! - [`Enemy::decide_and_act`] (`turns`) runs once per discrete turn and either
//!   steps one tile, attacks the target, or rests.
//! - [`Enemy::apply_damage`] and [`Enemy::tick`] (`damage`) resolve hits and
//!   drive the knockback animation one frame at a time.
//!
//! Both processes share the same position and tint but never run within the
//! same call, so the owner serializes them simply by owning the `Enemy`.
mod damage;
mod errors;
mod turns;

#[cfg(test)]
mod testing;

pub use errors::EnemyError;
pub use turns::TurnOutcome;

use glam::Vec2;

use crate::animation::KnockbackAnimation;
use crate::config::EnemyConfig;
use crate::state::{EnemyState, EntityId, Position, TargetRef, Tint};

/// A single hostile grid actor.
#[derive(Clone, Debug)]
pub struct Enemy {
    state: EnemyState,
    animation: KnockbackAnimation,
    config: EnemyConfig,
}

impl Enemy {
    /// Spawns an enemy on `cell`, tracking `target`.
    ///
    /// The base tint is captured here and restored after every knockback.
    pub fn spawn(id: EntityId, cell: Position, target: TargetRef, config: EnemyConfig) -> Self {
        Self {
            state: EnemyState::new(id, cell, target, &config),
            animation: KnockbackAnimation::Idle,
            config,
        }
    }

    pub fn id(&self) -> EntityId {
        self.state.id
    }

    pub fn state(&self) -> &EnemyState {
        &self.state
    }

    pub fn position(&self) -> Vec2 {
        self.state.position
    }

    /// Grid cell the enemy occupies. While a knockback is in flight this is
    /// the anchor's cell, not the cell nearest the displaced position.
    pub fn cell(&self) -> Position {
        self.animation
            .anchor()
            .map(Position::from_world)
            .unwrap_or_else(|| self.state.cell())
    }

    pub fn hit_points(&self) -> i32 {
        self.state.hit_points
    }

    pub fn tint(&self) -> Tint {
        self.state.tint
    }

    pub fn skip_move(&self) -> bool {
        self.state.skip_move
    }

    pub fn is_alive(&self) -> bool {
        self.state.is_alive()
    }

    pub fn animation(&self) -> &KnockbackAnimation {
        &self.animation
    }

    pub fn config(&self) -> &EnemyConfig {
        &self.config
    }

    fn ensure_alive(&self) -> Result<(), EnemyError> {
        if self.state.is_alive() {
            Ok(())
        } else {
            Err(EnemyError::AlreadyDestroyed(self.state.id))
        }
    }
}
