//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from worker coordination, world construction and enemy
//! operations so clients can bubble them up with consistent context.
use thiserror::Error;
use tokio::sync::oneshot;

use game_core::{EnemyError, EntityId, Position};

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("simulation worker command channel closed")]
    CommandChannelClosed,

    #[error("simulation worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("simulation worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error("runtime requires an encounter to be configured before building")]
    MissingEncounter,

    #[error("cannot build a wall on {0}: cell is taken or outside the grid")]
    InvalidWall(Position),

    #[error("cannot place {entity} on {cell}: cell is blocked or outside the grid")]
    InvalidSpawn { entity: EntityId, cell: Position },

    #[error("frame rate must be a positive number of ticks per second (got {0})")]
    InvalidFrameRate(f32),

    #[error("no enemy with id {0}")]
    UnknownEnemy(EntityId),

    #[error("the player has left the world")]
    PlayerGone,

    #[error(transparent)]
    Enemy(#[from] EnemyError),
}
