//! Simulation worker that owns the authoritative [`World`].
//!
//! Receives commands from [`crate::RuntimeHandle`], runs enemy turns, hits
//! and frame ticks against the world, and publishes events to the EventBus.
//! Commands are handled strictly one at a time, which is what keeps the turn
//! cadence and the frame cadence from ever touching an enemy concurrently.

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};

use game_core::{
    CardinalDirection, DamageOutcome, EntityId, GameError, GridMover, MoveOutcome, TurnOutcome,
    Vec2,
};

use crate::api::{Result, RuntimeError};
use crate::events::{AnimationEvent, CombatEvent, Event, EventBus, TurnEvent};
use crate::world::{FrameReport, TurnReport, World, WorldSnapshot};

/// Commands that can be sent to the simulation worker
pub enum Command {
    /// Run one enemy turn.
    AdvanceTurn {
        reply: oneshot::Sender<TurnReport>,
    },
    /// Hit an enemy from `attacker`.
    ApplyDamage {
        enemy: EntityId,
        amount: i32,
        attacker: Vec2,
        reply: oneshot::Sender<Result<DamageOutcome>>,
    },
    /// Advance knockback animations by `dt` seconds.
    Tick {
        dt: f32,
        reply: oneshot::Sender<FrameReport>,
    },
    /// Step the player one tile.
    MovePlayer {
        direction: CardinalDirection,
        reply: oneshot::Sender<Result<MoveOutcome>>,
    },
    /// Query the current world (read-only).
    Snapshot {
        reply: oneshot::Sender<WorldSnapshot>,
    },
    /// Stop processing; commands still queued are dropped.
    Shutdown,
}

/// Background task that processes simulation commands.
pub struct SimulationWorker {
    world: World,
    command_rx: mpsc::Receiver<Command>,
    event_bus: EventBus,
}

impl SimulationWorker {
    /// Creates a new simulation worker.
    pub fn new(world: World, command_rx: mpsc::Receiver<Command>, event_bus: EventBus) -> Self {
        info!(
            target: "runtime::worker",
            enemies = world.scheduler.len(),
            width = world.grid.width(),
            height = world.grid.height(),
            "SimulationWorker initialized"
        );

        Self {
            world,
            command_rx,
            event_bus,
        }
    }

    /// Main worker loop. Ends on [`Command::Shutdown`] or once every
    /// command sender is gone.
    pub async fn run(mut self) {
        while let Some(cmd) = self.command_rx.recv().await {
            if matches!(cmd, Command::Shutdown) {
                debug!(target: "runtime::worker", "shutdown requested, worker exiting");
                return;
            }
            self.handle_command(cmd);
        }
        debug!(target: "runtime::worker", "command channel closed, worker exiting");
    }

    fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::AdvanceTurn { reply } => {
                let report = self.handle_advance_turn();
                if reply.send(report).is_err() {
                    debug!("AdvanceTurn reply channel closed (caller dropped)");
                }
            }
            Command::ApplyDamage {
                enemy,
                amount,
                attacker,
                reply,
            } => {
                let result = self.handle_apply_damage(enemy, amount, attacker);
                if reply.send(result).is_err() {
                    debug!("ApplyDamage reply channel closed (caller dropped)");
                }
            }
            Command::Tick { dt, reply } => {
                let report = self.handle_tick(dt);
                if reply.send(report).is_err() {
                    debug!("Tick reply channel closed (caller dropped)");
                }
            }
            Command::MovePlayer { direction, reply } => {
                let result = self.handle_move_player(direction);
                if reply.send(result).is_err() {
                    debug!("MovePlayer reply channel closed (caller dropped)");
                }
            }
            Command::Snapshot { reply } => {
                if reply.send(self.world.snapshot()).is_err() {
                    debug!("Snapshot reply channel closed (caller dropped)");
                }
            }
            Command::Shutdown => {}
        }
    }

    /// Runs every enemy once, then checks whether the player survived.
    fn handle_advance_turn(&mut self) -> TurnReport {
        let turn = self.world.scheduler.turn() + 1;
        self.publish(Event::Turn(TurnEvent::Started { turn }));

        let report = self.world.run_turn();

        for (enemy, outcome) in &report.actions {
            self.publish(Event::Turn(TurnEvent::EnemyActed {
                turn,
                enemy: *enemy,
                outcome: *outcome,
            }));
            if let TurnOutcome::Attacked { damage, .. } = outcome {
                let food_left = self
                    .world
                    .targets
                    .player()
                    .map(|player| player.food())
                    .unwrap_or_default();
                self.publish(Event::Combat(CombatEvent::PlayerHit {
                    enemy: *enemy,
                    damage: *damage,
                    food_left,
                }));
            }
        }
        for (enemy, error) in &report.skipped {
            self.publish(Event::Turn(TurnEvent::EnemySkipped {
                turn,
                enemy: *enemy,
                code: error.error_code().to_string(),
                reason: error.to_string(),
            }));
        }
        self.publish_feedback();

        let starved = self
            .world
            .targets
            .player()
            .filter(|player| player.is_starved())
            .copied();
        if let Some(player) = starved {
            self.world.targets.remove();
            self.world.grid.vacate(EntityId::PLAYER, player.cell());
            info!(target: "runtime::worker", turn, "player starved, game over");
            self.publish(Event::Turn(TurnEvent::GameOver { turn }));
        }

        report
    }

    /// Resolves a hit; destroyed enemies free their cell immediately.
    fn handle_apply_damage(
        &mut self,
        enemy_id: EntityId,
        amount: i32,
        attacker: Vec2,
    ) -> Result<DamageOutcome> {
        let World {
            feedback,
            scheduler,
            ..
        } = &mut self.world;
        let enemy = scheduler
            .enemy_mut(enemy_id)
            .ok_or(RuntimeError::UnknownEnemy(enemy_id))?;

        let cell = enemy.cell();
        let outcome = enemy.apply_damage(amount, attacker, feedback)?;

        debug!(
            target: "runtime::worker",
            enemy = %enemy_id,
            amount,
            ?outcome,
            "enemy damaged"
        );
        self.publish_feedback();
        self.publish(Event::Combat(CombatEvent::EnemyDamaged {
            enemy: enemy_id,
            amount,
            outcome,
        }));

        if outcome.is_destroyed() {
            self.world.grid.vacate(enemy_id, cell);
            info!(target: "runtime::worker", enemy = %enemy_id, %cell, "enemy destroyed");
            self.publish(Event::Combat(CombatEvent::EnemyDestroyed {
                enemy: enemy_id,
                cell,
            }));
        }

        Ok(outcome)
    }

    fn handle_tick(&mut self, dt: f32) -> FrameReport {
        let report = self.world.scheduler.tick(dt);
        for enemy in &report.finished {
            if let Some(position) = self.world.scheduler.enemy(*enemy).map(|e| e.position()) {
                self.publish(Event::Animation(AnimationEvent::KnockbackFinished {
                    enemy: *enemy,
                    position,
                }));
            }
        }
        report
    }

    fn handle_move_player(&mut self, direction: CardinalDirection) -> Result<MoveOutcome> {
        let World { grid, targets, .. } = &mut self.world;
        let player = targets.player_mut().ok_or(RuntimeError::PlayerGone)?;

        let outcome = grid.attempt_move(EntityId::PLAYER, player.cell(), direction);
        if let MoveOutcome::Moved { destination } = outcome {
            player.set_cell(destination);
        }
        debug!(target: "runtime::worker", %direction, ?outcome, "player moved");
        Ok(outcome)
    }

    fn publish_feedback(&mut self) {
        for cue in self.world.feedback.drain() {
            self.publish(Event::Combat(CombatEvent::Feedback { cue }));
        }
    }

    fn publish(&self, event: Event) {
        self.event_bus.publish(event);
    }
}
