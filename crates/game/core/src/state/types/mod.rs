pub mod common;
pub mod enemy;

pub use common::{EntityId, Position, TargetRef, Tint};
pub use enemy::{EnemyState, Liveness};
