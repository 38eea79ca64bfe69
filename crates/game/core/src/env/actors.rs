use glam::Vec2;

use crate::state::TargetRef;

/// The entity an enemy chases and hits on contact.
pub trait TargetEntity {
    /// Current world position.
    fn position(&self) -> Vec2;

    /// Applies contact damage. Health bookkeeping belongs to the target.
    fn lose_health(&mut self, amount: i32);
}

/// Resolves target handles to live entities.
///
/// Returning `None` means the handle went stale (the target was destroyed or
/// replaced); enemies report that as [`crate::EnemyError::MissingTarget`].
pub trait TargetLookup {
    fn target(&mut self, target: TargetRef) -> Option<&mut dyn TargetEntity>;
}
