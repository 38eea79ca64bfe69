//! Deterministic rules for a grid-bound hostile actor.
//!
//! `game-core` defines the canonical enemy behaviour: the per-turn movement
//! decision (move, attack or rest) and the damage response that plays a
//! knockback-and-return animation over frame ticks. All collaborators the
//! actor talks to (grid occupancy, the tracked target, audio/visual feedback)
//! are reached through the traits in [`env`], so the crate stays free of I/O
//! and can be driven by any scheduler.
//!
//! All state mutation flows through [`engine::Enemy`].
pub mod action;
pub mod animation;
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod state;

pub use action::{CardinalDirection, step_toward};
pub use animation::{AnimationPhase, AnimationStatus, KnockbackAnimation};
pub use combat::{DamageOutcome, KnockbackDirection, knockback_direction};
pub use config::{ConfigError, EnemyConfig};
pub use engine::{Enemy, EnemyError, TurnOutcome};
pub use env::{
    EntityKind, FeedbackSink, GridMover, MoveOutcome, TargetEntity, TargetLookup, TurnEnv,
};
pub use error::{ErrorSeverity, GameError};
pub use state::{EnemyState, EntityId, Liveness, Position, TargetRef, Tint};

/// Continuous 2D coordinate used for actor and target positions.
pub use glam::Vec2;
