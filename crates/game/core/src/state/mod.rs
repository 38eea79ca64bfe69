//! Authoritative enemy state representation.
//!
//! This module owns the data structures that describe a single enemy and the
//! value types shared with its collaborators. Runtime layers read this state
//! but mutate it exclusively through [`crate::engine::Enemy`].
pub mod types;

pub use types::{EnemyState, EntityId, Liveness, Position, TargetRef, Tint};
