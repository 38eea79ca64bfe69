//! Turn and frame scheduling for registered enemies.

use tracing::{debug, info, warn};

use game_core::{AnimationStatus, Enemy, EnemyError, EntityId, GameError, TurnEnv, TurnOutcome};

/// What happened during one scheduled turn.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TurnReport {
    pub turn: u64,
    /// Outcomes in registration order.
    pub actions: Vec<(EntityId, TurnOutcome)>,
    /// Enemies that could not act this turn.
    pub skipped: Vec<(EntityId, EnemyError)>,
    /// Destroyed enemies dropped before the turn ran.
    pub removed: Vec<EntityId>,
}

/// What happened during one frame tick.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameReport {
    /// Knockbacks still in flight after the tick.
    pub running: usize,
    /// Enemies whose knockback returned to rest on this tick.
    pub finished: Vec<EntityId>,
}

/// Owns the enemies and drives both cadences over them.
///
/// Each enemy's `decide_and_act` is called exactly once per turn, in the
/// order the enemies were registered.
#[derive(Clone, Debug, Default)]
pub struct TurnScheduler {
    enemies: Vec<Enemy>,
    turn: u64,
}

impl TurnScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, enemy: Enemy) {
        info!(
            target: "runtime::scheduler",
            enemy = %enemy.id(),
            cell = %enemy.cell(),
            hit_points = enemy.hit_points(),
            "enemy registered"
        );
        self.enemies.push(enemy);
    }

    /// Number of turns run so far.
    pub fn turn(&self) -> u64 {
        self.turn
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn enemy(&self, id: EntityId) -> Option<&Enemy> {
        self.enemies.iter().find(|enemy| enemy.id() == id)
    }

    pub fn enemy_mut(&mut self, id: EntityId) -> Option<&mut Enemy> {
        self.enemies.iter_mut().find(|enemy| enemy.id() == id)
    }

    pub fn len(&self) -> usize {
        self.enemies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enemies.is_empty()
    }

    /// Runs one turn for every live enemy.
    ///
    /// Errors are per-enemy: an enemy whose target is gone is skipped and the
    /// rest still act.
    pub fn run_turn(&mut self, env: &mut TurnEnv<'_>) -> TurnReport {
        self.turn += 1;
        let mut report = TurnReport {
            turn: self.turn,
            removed: self.prune_destroyed(),
            ..TurnReport::default()
        };

        for enemy in &mut self.enemies {
            match enemy.decide_and_act(env) {
                Ok(outcome) => {
                    debug!(
                        target: "runtime::scheduler",
                        turn = self.turn,
                        enemy = %enemy.id(),
                        ?outcome,
                        "enemy turn"
                    );
                    report.actions.push((enemy.id(), outcome));
                }
                Err(error) => {
                    warn!(
                        target: "runtime::scheduler",
                        turn = self.turn,
                        enemy = %enemy.id(),
                        code = error.error_code(),
                        %error,
                        "enemy skipped"
                    );
                    report.skipped.push((enemy.id(), error));
                }
            }
        }

        report
    }

    /// Advances every knockback by `dt` seconds.
    pub fn tick(&mut self, dt: f32) -> FrameReport {
        let mut report = FrameReport::default();
        for enemy in &mut self.enemies {
            match enemy.tick(dt) {
                AnimationStatus::Running(_) => report.running += 1,
                AnimationStatus::Finished => report.finished.push(enemy.id()),
                AnimationStatus::Idle | AnimationStatus::Destroyed => {}
            }
        }
        report
    }

    fn prune_destroyed(&mut self) -> Vec<EntityId> {
        let mut removed = Vec::new();
        self.enemies.retain(|enemy| {
            if enemy.is_alive() {
                true
            } else {
                removed.push(enemy.id());
                false
            }
        });
        for id in &removed {
            info!(target: "runtime::scheduler", enemy = %id, "destroyed enemy dropped");
        }
        removed
    }
}
