//! Combat rules: hit point loss and knockback direction.
//!
//! This module contains pure functions; the animation that plays out the
//! knockback lives in [`crate::animation`].

pub mod damage;
pub mod knockback;

pub use damage::{DamageOutcome, apply_damage, is_lethal};
pub use knockback::{KnockbackDirection, knockback_direction};
