//! Runtime orchestration for the enemy simulation.
//!
//! This crate hosts [`game_core::Enemy`] actors in a concrete world: a bounded
//! grid with walls and occupancy, a player target, randomized feedback and a
//! turn scheduler. A single simulation worker owns that world and processes
//! turn and frame commands one at a time, so the two cadences never
//! interleave. Consumers embed [`Runtime`] and talk to it through
//! [`RuntimeHandle`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] provides topic-based event bus for flexible event routing
//! - [`world`] implements the collaborators enemies are driven through
//! - `workers` keeps background tasks internal to the crate
pub mod api;
pub mod events;
pub mod runtime;
pub mod world;

mod workers;

pub use api::{Result, RuntimeError, RuntimeHandle};
pub use events::{AnimationEvent, CombatEvent, Event, EventBus, Topic, TurnEvent};
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
pub use world::{
    EnemySnapshot, FeedbackCue, FrameReport, GridWorld, PlayerTarget, RandomizedFeedback,
    TargetSlot, TurnReport, TurnScheduler, World, WorldSnapshot,
};
