//! Damage application.

use super::KnockbackDirection;

/// Result of a hit that was accepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DamageOutcome {
    /// The enemy is still standing and knocked back (unless the attacker
    /// shares its position, in which case `knockback` is `None`).
    Survived {
        remaining: i32,
        knockback: Option<KnockbackDirection>,
    },
    /// Hit points reached zero. The enemy has been removed.
    Destroyed,
}

impl DamageOutcome {
    pub fn is_destroyed(&self) -> bool {
        matches!(self, DamageOutcome::Destroyed)
    }
}

/// Apply damage to current hit points.
///
/// Hit points may go negative; callers check [`is_lethal`].
pub fn apply_damage(current_hp: i32, damage: i32) -> i32 {
    current_hp.saturating_sub(damage)
}

pub fn is_lethal(hit_points: i32) -> bool {
    hit_points <= 0
}
