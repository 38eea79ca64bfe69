//! Common error infrastructure for game-core.
//!
//! Domain-specific errors (e.g., [`crate::EnemyError`], [`crate::ConfigError`])
//! live next to the operations that produce them. This module only provides
//! the shared classification used by callers to pick a recovery strategy.
//!
//! None of the errors in this crate are fatal to a simulation: a failing actor
//! is skipped for the cycle or removed, never allowed to halt its neighbours.

/// How a caller should react to a failed enemy operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Skip the actor for this cycle and carry on (lost target, actor
    /// already destroyed).
    Recoverable,

    /// The input itself is wrong; retrying with the same values fails again
    /// (non-positive damage, bad tuning).
    Validation,
}

impl ErrorSeverity {
    /// Label used in log fields.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Classification shared by [`crate::EnemyError`] and [`crate::ConfigError`].
///
/// Severity follows whether the caller can keep going, not how bad the
/// failure looks.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Stable snake_case identifier, used as a structured log field and in
    /// skip events. Falls back to the type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_labels() {
        assert_eq!(ErrorSeverity::Recoverable.as_str(), "recoverable");
        assert_eq!(ErrorSeverity::Validation.as_str(), "validation");
        assert!(ErrorSeverity::Recoverable.is_recoverable());
        assert!(!ErrorSeverity::Validation.is_recoverable());
    }
}
