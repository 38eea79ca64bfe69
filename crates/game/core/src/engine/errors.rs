//! Error types for enemy operations.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{EntityId, TargetRef};

/// Errors surfaced by [`super::Enemy`] operations.
///
/// Every variant leaves the enemy untouched, so callers can always skip the
/// actor for the current cycle and carry on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EnemyError {
    #[error("{0} is no longer available")]
    MissingTarget(TargetRef),

    #[error("damage amount must be positive (got {0})")]
    InvalidDamageAmount(i32),

    #[error("enemy {0} has already been destroyed")]
    AlreadyDestroyed(EntityId),
}

impl GameError for EnemyError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::MissingTarget(_) | Self::AlreadyDestroyed(_) => ErrorSeverity::Recoverable,
            Self::InvalidDamageAmount(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingTarget(_) => "missing_target",
            Self::InvalidDamageAmount(_) => "invalid_damage_amount",
            Self::AlreadyDestroyed(_) => "already_destroyed",
        }
    }
}
