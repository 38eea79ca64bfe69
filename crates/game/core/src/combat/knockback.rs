//! Knockback direction selection.

use glam::Vec2;

/// Axis-aligned direction an enemy is pushed when hit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum KnockbackDirection {
    Right,
    Left,
    Down,
    Up,
}

impl KnockbackDirection {
    pub fn unit(self) -> Vec2 {
        match self {
            KnockbackDirection::Right => Vec2::X,
            KnockbackDirection::Left => Vec2::NEG_X,
            KnockbackDirection::Down => Vec2::NEG_Y,
            KnockbackDirection::Up => Vec2::Y,
        }
    }
}

/// Picks the knockback direction away from `attacker`.
///
/// The comparisons are checked in a fixed order and the first true one wins:
///
/// 1. actor right of attacker → `Right`
/// 2. actor left of attacker → `Left`
/// 3. actor below attacker → `Down`
/// 4. actor above attacker → `Up`
///
/// Magnitudes are never compared, so any horizontal difference beats a larger
/// vertical one. Returns `None` when both positions coincide.
pub fn knockback_direction(actor: Vec2, attacker: Vec2) -> Option<KnockbackDirection> {
    if actor.x > attacker.x {
        Some(KnockbackDirection::Right)
    } else if actor.x < attacker.x {
        Some(KnockbackDirection::Left)
    } else if actor.y < attacker.y {
        Some(KnockbackDirection::Down)
    } else if actor.y > attacker.y {
        Some(KnockbackDirection::Up)
    } else {
        None
    }
}
