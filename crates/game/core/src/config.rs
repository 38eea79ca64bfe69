use crate::error::{ErrorSeverity, GameError};
use crate::state::Tint;

/// Enemy tuning values and feedback cue names.
///
/// Deserializable (behind the `serde` feature) so content files only need to
/// list the fields they override.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct EnemyConfig {
    /// Hit points at spawn.
    pub hit_points: i32,
    /// Damage inflicted on the target on melee contact.
    pub contact_damage: i32,
    /// Seconds a full grid step takes; knockback speed derives from it.
    pub move_time: f32,
    /// Knockback displacement in grid units.
    pub knockback_distance: f32,
    /// Knockback speed is `knockback_speed_scale / move_time` units per second.
    pub knockback_speed_scale: f32,
    /// Squared-distance tolerance that ends the outbound phase.
    pub arrival_epsilon: f32,
    pub base_tint: Tint,
    pub hit_tint: Tint,
    /// Clips played (one at random) when the enemy attacks.
    pub attack_sounds: [String; 2],
    /// Clips played (one at random) when the enemy is hit.
    pub hit_sounds: [String; 2],
    /// Sprite animation trigger fired on attack.
    pub attack_trigger: String,
}

impl EnemyConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_HIT_POINTS: i32 = 2;
    pub const DEFAULT_CONTACT_DAMAGE: i32 = 10;
    pub const DEFAULT_MOVE_TIME: f32 = 0.1;
    pub const DEFAULT_KNOCKBACK_DISTANCE: f32 = 0.5;
    pub const DEFAULT_KNOCKBACK_SPEED_SCALE: f32 = 2.0;
    pub const DEFAULT_ARRIVAL_EPSILON: f32 = f32::EPSILON;
    pub const DEFAULT_ATTACK_TRIGGER: &'static str = "enemyAttack";

    pub fn new() -> Self {
        Self {
            hit_points: Self::DEFAULT_HIT_POINTS,
            contact_damage: Self::DEFAULT_CONTACT_DAMAGE,
            move_time: Self::DEFAULT_MOVE_TIME,
            knockback_distance: Self::DEFAULT_KNOCKBACK_DISTANCE,
            knockback_speed_scale: Self::DEFAULT_KNOCKBACK_SPEED_SCALE,
            arrival_epsilon: Self::DEFAULT_ARRIVAL_EPSILON,
            base_tint: Tint::WHITE,
            hit_tint: Tint::RED,
            attack_sounds: ["enemy_attack_1".into(), "enemy_attack_2".into()],
            hit_sounds: ["chop_1".into(), "chop_2".into()],
            attack_trigger: Self::DEFAULT_ATTACK_TRIGGER.into(),
        }
    }

    pub fn with_hit_points(mut self, hit_points: i32) -> Self {
        self.hit_points = hit_points;
        self
    }

    pub fn with_contact_damage(mut self, contact_damage: i32) -> Self {
        self.contact_damage = contact_damage;
        self
    }

    /// Knockback travel speed in world units per second.
    pub fn knockback_speed(&self) -> f32 {
        self.knockback_speed_scale / self.move_time
    }

    /// Rejects values the actor cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hit_points <= 0 {
            return Err(ConfigError::NonPositiveHitPoints(self.hit_points));
        }
        if self.contact_damage < 0 {
            return Err(ConfigError::NegativeContactDamage(self.contact_damage));
        }
        for (field, value) in [
            ("move_time", self.move_time),
            ("knockback_distance", self.knockback_distance),
            ("knockback_speed_scale", self.knockback_speed_scale),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NonPositive { field, value });
            }
        }
        if !(self.arrival_epsilon.is_finite() && self.arrival_epsilon >= 0.0) {
            return Err(ConfigError::NonPositive {
                field: "arrival_epsilon",
                value: self.arrival_epsilon,
            });
        }
        Ok(())
    }
}

impl Default for EnemyConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors raised by [`EnemyConfig::validate`].
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("hit_points must be positive (got {0})")]
    NonPositiveHitPoints(i32),

    #[error("contact_damage must not be negative (got {0})")]
    NegativeContactDamage(i32),

    #[error("{field} must be a positive finite number (got {value})")]
    NonPositive { field: &'static str, value: f32 },
}

impl GameError for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NonPositiveHitPoints(_) => "config_hit_points",
            Self::NegativeContactDamage(_) => "config_contact_damage",
            Self::NonPositive { .. } => "config_non_positive",
        }
    }
}
