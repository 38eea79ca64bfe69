use glam::Vec2;

use crate::animation::{AnimationStatus, AnimationStep};
use crate::combat::{DamageOutcome, apply_damage, is_lethal, knockback_direction};
use crate::env::FeedbackSink;
use crate::state::Liveness;

use super::{Enemy, EnemyError};

/// Damage and knockback animation methods for Enemy.
impl Enemy {
    /// Resolves one melee hit from an attacker standing at `attacker`.
    ///
    /// Audio, hit point loss and the death check all complete before this
    /// returns; only the knockback travel is left for [`Enemy::tick`].
    ///
    /// A lethal hit destroys the enemy on the spot and abandons any running
    /// animation without restoring the base tint. A surviving hit (re)starts
    /// the knockback from the current, possibly mid-flight, position. The
    /// direction compares that current position with the attacker, so a hit
    /// landing mid-flight can push along the axis the enemy is already
    /// displaced on. The return point stays the original anchor.
    pub fn apply_damage(
        &mut self,
        amount: i32,
        attacker: Vec2,
        feedback: &mut dyn FeedbackSink,
    ) -> Result<DamageOutcome, EnemyError> {
        self.ensure_alive()?;
        if amount <= 0 {
            return Err(EnemyError::InvalidDamageAmount(amount));
        }

        let [first, second] = &self.config.hit_sounds;
        feedback.play_random_feedback([first.as_str(), second.as_str()]);

        self.state.hit_points = apply_damage(self.state.hit_points, amount);
        if is_lethal(self.state.hit_points) {
            self.state.liveness = Liveness::Destroyed;
            self.animation.abandon();
            return Ok(DamageOutcome::Destroyed);
        }

        let knockback = knockback_direction(self.state.position, attacker);
        if let Some(direction) = knockback {
            self.animation.restart(
                self.state.position,
                direction.unit() * self.config.knockback_distance,
            );
        }

        Ok(DamageOutcome::Survived {
            remaining: self.state.hit_points,
            knockback,
        })
    }

    /// Resumes the knockback animation after `dt` seconds of frame time.
    ///
    /// Destroyed enemies report [`AnimationStatus::Destroyed`] and are never
    /// written to.
    pub fn tick(&mut self, dt: f32) -> AnimationStatus {
        let step = AnimationStep {
            max_delta: self.config.knockback_speed() * dt,
            arrival_epsilon: self.config.arrival_epsilon,
            hit_tint: self.config.hit_tint,
            base_tint: self.state.base_tint,
        };
        self.animation
            .advance(&mut self.state.position, &mut self.state.tint, step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::{AnimationPhase, KnockbackAnimation};
    use crate::combat::KnockbackDirection;
    use crate::config::EnemyConfig;
    use crate::engine::testing::RecordingFeedback;
    use crate::state::{EntityId, Position, TargetRef, Tint};

    const FRAME: f32 = 1.0 / 60.0;

    fn enemy_with_hp(hit_points: i32) -> Enemy {
        Enemy::spawn(
            EntityId(7),
            Position::new(4, 4),
            TargetRef::PLAYER,
            EnemyConfig::default().with_hit_points(hit_points),
        )
    }

    fn run_until_settled(enemy: &mut Enemy) -> usize {
        for frame in 1..=600 {
            match enemy.tick(FRAME) {
                AnimationStatus::Finished => return frame,
                AnimationStatus::Running(_) => {}
                other => panic!("unexpected status {other:?} at frame {frame}"),
            }
        }
        panic!("knockback did not finish within 600 frames");
    }

    #[test]
    fn non_lethal_hit_returns_to_start_from_every_side() {
        let start = Vec2::new(4.0, 4.0);
        for attacker in [
            Vec2::new(3.0, 4.0),
            Vec2::new(5.0, 4.0),
            Vec2::new(4.0, 5.0),
            Vec2::new(4.0, 3.0),
            Vec2::new(1.0, 9.0),
        ] {
            let mut enemy = enemy_with_hp(2);
            let mut feedback = RecordingFeedback::default();

            let outcome = enemy.apply_damage(1, attacker, &mut feedback).unwrap();
            assert!(matches!(
                outcome,
                DamageOutcome::Survived { remaining: 1, knockback: Some(_) }
            ));

            run_until_settled(&mut enemy);

            assert_eq!(enemy.position(), start, "attacker {attacker:?}");
            assert_eq!(enemy.tint(), Tint::WHITE);
            assert_eq!(enemy.hit_points(), 1);
            assert_eq!(enemy.tick(FRAME), AnimationStatus::Idle);
        }
    }

    #[test]
    fn knockback_reaches_half_a_tile_with_hit_tint() {
        let mut enemy = enemy_with_hp(2);
        let mut feedback = RecordingFeedback::default();
        enemy
            .apply_damage(1, Vec2::new(4.0, 5.0), &mut feedback)
            .unwrap();

        let mut lowest = f32::MAX;
        loop {
            let status = enemy.tick(FRAME);
            lowest = lowest.min(enemy.position().y);
            if status == AnimationStatus::Running(AnimationPhase::Outbound) {
                assert_eq!(enemy.tint(), EnemyConfig::default().hit_tint);
            }
            if status == AnimationStatus::Finished {
                break;
            }
        }
        assert!((lowest - 3.5).abs() < 1e-5, "lowest point {lowest}");
    }

    #[test]
    fn hit_plays_one_of_the_chop_clips() {
        let mut enemy = enemy_with_hp(2);
        let mut feedback = RecordingFeedback::default();
        enemy
            .apply_damage(1, Vec2::new(3.0, 4.0), &mut feedback)
            .unwrap();
        assert_eq!(
            feedback.sounds,
            vec![["chop_1".to_string(), "chop_2".to_string()]]
        );
        assert!(feedback.triggers.is_empty());
    }

    #[test]
    fn lethal_hit_destroys_and_freezes_state() {
        let mut enemy = enemy_with_hp(1);
        let mut feedback = RecordingFeedback::default();

        let outcome = enemy
            .apply_damage(2, Vec2::new(3.0, 4.0), &mut feedback)
            .unwrap();
        assert_eq!(outcome, DamageOutcome::Destroyed);
        assert!(!enemy.is_alive());
        assert_eq!(enemy.hit_points(), -1);

        let frozen = enemy.state().clone();
        for _ in 0..30 {
            assert_eq!(enemy.tick(FRAME), AnimationStatus::Destroyed);
        }
        assert_eq!(enemy.state(), &frozen);
    }

    #[test]
    fn lethal_hit_mid_flight_abandons_animation() {
        let mut enemy = enemy_with_hp(2);
        let mut feedback = RecordingFeedback::default();
        enemy
            .apply_damage(1, Vec2::new(3.0, 4.0), &mut feedback)
            .unwrap();
        enemy.tick(FRAME);
        let mid_flight = enemy.position();
        assert_ne!(mid_flight, Vec2::new(4.0, 4.0));

        let outcome = enemy
            .apply_damage(1, Vec2::new(3.0, 4.0), &mut feedback)
            .unwrap();
        assert_eq!(outcome, DamageOutcome::Destroyed);
        assert_eq!(enemy.animation(), &KnockbackAnimation::Destroyed);

        for _ in 0..30 {
            enemy.tick(FRAME);
        }
        assert_eq!(enemy.position(), mid_flight);
        assert_eq!(enemy.tint(), EnemyConfig::default().hit_tint);
    }

    #[test]
    fn second_hit_restarts_from_mid_flight_with_new_direction() {
        let anchor = Vec2::new(4.0, 4.0);
        let mut enemy = enemy_with_hp(3);
        let mut feedback = RecordingFeedback::default();

        // Attacker on the left pushes right.
        enemy
            .apply_damage(1, Vec2::new(3.0, 4.0), &mut feedback)
            .unwrap();
        enemy.tick(FRAME);
        let mid_flight = enemy.position();
        assert!(mid_flight.x > anchor.x && mid_flight.x < anchor.x + 0.5);

        // Attacker below the tile, but the enemy is already right of it:
        // x is compared first, so the push is still to the right.
        let outcome = enemy
            .apply_damage(1, Vec2::new(4.0, 3.0), &mut feedback)
            .unwrap();
        assert_eq!(
            outcome,
            DamageOutcome::Survived {
                remaining: 1,
                knockback: Some(KnockbackDirection::Right),
            }
        );
        assert_eq!(
            enemy.animation(),
            &KnockbackAnimation::Outbound {
                anchor,
                target: Vec2::new(4.5, 4.0),
            }
        );
        assert_eq!(enemy.position(), mid_flight);

        enemy.tick(FRAME);
        let next = enemy.position();
        assert!(next.x > mid_flight.x);
        assert_eq!(next.y, anchor.y);

        run_until_settled(&mut enemy);
        assert_eq!(enemy.position(), anchor);
        assert_eq!(enemy.tint(), Tint::WHITE);
    }

    #[test]
    fn rejects_non_positive_damage_without_side_effects() {
        let mut enemy = enemy_with_hp(2);
        let mut feedback = RecordingFeedback::default();

        for amount in [0, -3] {
            let err = enemy
                .apply_damage(amount, Vec2::new(3.0, 4.0), &mut feedback)
                .unwrap_err();
            assert_eq!(err, EnemyError::InvalidDamageAmount(amount));
        }
        assert_eq!(enemy.hit_points(), 2);
        assert!(feedback.is_empty());
        assert!(!enemy.animation().is_running());
    }

    #[test]
    fn damage_on_destroyed_enemy_is_a_no_op() {
        let mut enemy = enemy_with_hp(1);
        let mut feedback = RecordingFeedback::default();
        enemy
            .apply_damage(1, Vec2::new(3.0, 4.0), &mut feedback)
            .unwrap();
        let sounds_before = feedback.sounds.len();

        let err = enemy
            .apply_damage(5, Vec2::new(3.0, 4.0), &mut feedback)
            .unwrap_err();
        assert_eq!(err, EnemyError::AlreadyDestroyed(EntityId(7)));
        assert_eq!(enemy.hit_points(), 0);
        assert_eq!(feedback.sounds.len(), sounds_before);
    }

    #[test]
    fn attacker_on_same_spot_causes_no_knockback() {
        let mut enemy = enemy_with_hp(2);
        let mut feedback = RecordingFeedback::default();
        let outcome = enemy
            .apply_damage(1, Vec2::new(4.0, 4.0), &mut feedback)
            .unwrap();
        assert_eq!(
            outcome,
            DamageOutcome::Survived {
                remaining: 1,
                knockback: None,
            }
        );
        assert_eq!(enemy.tick(FRAME), AnimationStatus::Idle);
    }
}
