//! Concrete collaborators for enemies and the world that bundles them.
//!
//! [`World`] is owned by the simulation worker. Its fields are disjoint so a
//! turn can borrow the grid, the target slot and the feedback sink at the same
//! time the scheduler iterates its enemies.

mod feedback;
mod grid;
mod player;
mod scheduler;

pub use feedback::{FeedbackCue, RandomizedFeedback};
pub use grid::GridWorld;
pub use player::{PlayerTarget, TargetSlot};
pub use scheduler::{FrameReport, TurnReport, TurnScheduler};

use game_content::Encounter;
use game_core::{
    AnimationPhase, Enemy, EnemyConfig, EnemyState, EntityId, Position, TargetRef, TurnEnv,
};

use crate::api::{Result, RuntimeError};

/// Everything the simulation worker owns.
#[derive(Debug)]
pub struct World {
    pub grid: GridWorld,
    pub targets: TargetSlot,
    pub feedback: RandomizedFeedback,
    pub scheduler: TurnScheduler,
}

impl World {
    /// Lays out an encounter: walls first, then the player, then enemies in
    /// spawn order with ids counting up from 1.
    pub fn from_encounter(
        encounter: &Encounter,
        config: &EnemyConfig,
        feedback: RandomizedFeedback,
    ) -> Result<Self> {
        let mut grid = GridWorld::new(encounter.width, encounter.height);
        for &cell in &encounter.walls {
            if !grid.add_wall(cell) {
                return Err(RuntimeError::InvalidWall(cell));
            }
        }

        let player_cell = encounter.player.position;
        if !grid.place(EntityId::PLAYER, player_cell) {
            return Err(RuntimeError::InvalidSpawn {
                entity: EntityId::PLAYER,
                cell: player_cell,
            });
        }
        let targets = TargetSlot::new(PlayerTarget::new(player_cell, encounter.player.food));

        let mut scheduler = TurnScheduler::new();
        for (index, spawn) in encounter.enemies.iter().enumerate() {
            let id = EntityId(index as u32 + 1);
            if !grid.place(id, spawn.position) {
                return Err(RuntimeError::InvalidSpawn {
                    entity: id,
                    cell: spawn.position,
                });
            }
            let mut enemy_config = config.clone();
            if let Some(hit_points) = spawn.hit_points {
                enemy_config.hit_points = hit_points;
            }
            scheduler.register(Enemy::spawn(
                id,
                spawn.position,
                TargetRef::PLAYER,
                enemy_config,
            ));
        }

        Ok(Self {
            grid,
            targets,
            feedback,
            scheduler,
        })
    }

    /// Runs one enemy turn against the world's own collaborators.
    pub fn run_turn(&mut self) -> TurnReport {
        let World {
            grid,
            targets,
            feedback,
            scheduler,
        } = self;
        let mut env = TurnEnv::new(grid, targets, feedback);
        scheduler.run_turn(&mut env)
    }

    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot {
            turn: self.scheduler.turn(),
            player: self.targets.player().copied(),
            enemies: self
                .scheduler
                .enemies()
                .iter()
                .map(|enemy| EnemySnapshot {
                    cell: enemy.cell(),
                    animation: enemy.animation().phase(),
                    state: enemy.state().clone(),
                })
                .collect(),
        }
    }
}

/// Read-only copy of the world for clients.
#[derive(Clone, Debug, PartialEq)]
pub struct WorldSnapshot {
    pub turn: u64,
    /// `None` once the player has left the world.
    pub player: Option<PlayerTarget>,
    /// Enemies in registration order, destroyed ones included until the
    /// next turn drops them.
    pub enemies: Vec<EnemySnapshot>,
}

impl WorldSnapshot {
    pub fn enemy(&self, id: EntityId) -> Option<&EnemySnapshot> {
        self.enemies.iter().find(|enemy| enemy.state.id == id)
    }
}

/// One enemy as seen from outside.
#[derive(Clone, Debug, PartialEq)]
pub struct EnemySnapshot {
    /// Occupied grid cell; stays on the anchor during a knockback.
    pub cell: Position,
    /// Knockback phase in flight, if any.
    pub animation: Option<AnimationPhase>,
    pub state: EnemyState,
}
