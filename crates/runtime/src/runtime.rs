//! High-level runtime orchestrator.
//!
//! The runtime owns background workers, wires up command/event channels, and
//! exposes a builder-based API for clients to drive the simulation.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use game_content::Encounter;
use game_core::EnemyConfig;

use crate::api::{Result, RuntimeError, RuntimeHandle};
use crate::events::EventBus;
use crate::workers::{Command, FrameDriver, SimulationWorker, frame_period};
use crate::world::{RandomizedFeedback, TurnReport, World};

/// Runtime configuration shared across the orchestrator and workers.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub enemy_config: EnemyConfig,
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
    /// Ticks per second for the frame driver. `None` leaves ticking to the
    /// caller through [`RuntimeHandle::tick`].
    pub frame_rate_hz: Option<f32>,
    /// Seed for feedback clip selection. `None` draws from OS entropy.
    pub feedback_seed: Option<u64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            enemy_config: EnemyConfig::default(),
            event_buffer_size: 100,
            command_buffer_size: 32,
            frame_rate_hz: None,
            feedback_seed: None,
        }
    }
}

/// Main runtime that orchestrates the simulation
///
/// Design: Runtime owns workers and coordinates execution.
/// [`RuntimeHandle`] provides a cloneable façade for clients.
pub struct Runtime {
    // Shared handle (can be cloned for clients)
    handle: RuntimeHandle,

    // Background workers
    sim_worker_handle: JoinHandle<()>,
    frame_driver_handle: Option<JoinHandle<()>>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime
    ///
    /// The handle can be shared across clients and async tasks.
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    /// Execute a single enemy turn
    pub async fn step(&self) -> Result<TurnReport> {
        self.handle.advance_turn().await
    }

    /// Shutdown the runtime gracefully
    ///
    /// The frame driver is stopped first, then the simulation worker finishes
    /// the commands queued ahead of the shutdown request and exits. Handles
    /// still held by clients start failing with channel errors.
    ///
    /// The simulation worker is always asked to stop, even when the frame
    /// driver failed; that failure is reported after the worker has exited.
    pub async fn shutdown(self) -> Result<()> {
        let frame_result = match self.frame_driver_handle {
            Some(frame_handle) => {
                frame_handle.abort();
                match frame_handle.await {
                    Err(error) if !error.is_cancelled() => Err(RuntimeError::WorkerJoin(error)),
                    _ => Ok(()),
                }
            }
            None => Ok(()),
        };

        // A worker that already stopped has closed its channel; nothing to ask.
        if self.handle.request_shutdown().await.is_err() {
            debug!(target: "runtime::worker", "worker already stopped");
        }
        drop(self.handle);

        self.sim_worker_handle
            .await
            .map_err(RuntimeError::WorkerJoin)?;
        frame_result?;

        info!(target: "runtime::worker", "runtime shut down");
        Ok(())
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    encounter: Option<Encounter>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            encounter: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the required encounter layout
    pub fn encounter(mut self, encounter: Encounter) -> Self {
        self.encounter = Some(encounter);
        self
    }

    /// Tuning shared by every spawned enemy
    pub fn enemy_config(mut self, enemy_config: EnemyConfig) -> Self {
        self.config.enemy_config = enemy_config;
        self
    }

    /// Spawn a frame driver ticking at `hz`
    pub fn frame_rate(mut self, hz: f32) -> Self {
        self.config.frame_rate_hz = Some(hz);
        self
    }

    /// Make feedback clip selection reproducible
    pub fn feedback_seed(mut self, seed: u64) -> Self {
        self.config.feedback_seed = Some(seed);
        self
    }

    /// Build the runtime
    pub async fn build(self) -> Result<Runtime> {
        let encounter = self.encounter.ok_or(RuntimeError::MissingEncounter)?;
        let period = self.config.frame_rate_hz.map(frame_period).transpose()?;

        let feedback = match self.config.feedback_seed {
            Some(seed) => RandomizedFeedback::seeded(seed),
            None => RandomizedFeedback::from_entropy(),
        };
        let world = World::from_encounter(&encounter, &self.config.enemy_config, feedback)?;

        let (command_tx, command_rx) = mpsc::channel::<Command>(self.config.command_buffer_size);
        let event_bus = EventBus::with_capacity(self.config.event_buffer_size);

        let handle = RuntimeHandle::new(command_tx, event_bus.clone());

        // Create simulation worker
        let sim_worker = SimulationWorker::new(world, command_rx, event_bus);
        let sim_worker_handle = tokio::spawn(async move {
            sim_worker.run().await;
        });

        // Create frame driver (if enabled)
        let frame_driver_handle = period.map(|period| {
            let driver = FrameDriver::new(handle.clone(), period);
            tokio::spawn(async move {
                driver.run().await;
            })
        });

        Ok(Runtime {
            handle,
            sim_worker_handle,
            frame_driver_handle,
        })
    }
}
