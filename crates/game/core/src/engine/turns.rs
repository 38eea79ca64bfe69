use crate::action::{CardinalDirection, step_toward};
use crate::env::{EntityKind, MoveOutcome, TurnEnv};
use crate::state::Position;

use super::{Enemy, EnemyError};

/// What an enemy did with its turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnOutcome {
    /// Resting turn; nothing happened.
    Rested,
    /// Stepped one tile.
    Moved { from: Position, to: Position },
    /// The target stood in the way and took contact damage.
    Attacked {
        direction: CardinalDirection,
        damage: i32,
    },
    /// Something other than the target stood in the way. The turn is still spent.
    Blocked {
        direction: CardinalDirection,
        by: EntityKind,
    },
}

impl TurnOutcome {
    /// True for moves and attacks.
    pub fn acted(&self) -> bool {
        matches!(self, TurnOutcome::Moved { .. } | TurnOutcome::Attacked { .. })
    }

    pub fn is_rest(&self) -> bool {
        matches!(self, TurnOutcome::Rested)
    }
}

/// Turn decision methods for Enemy.
impl Enemy {
    /// Takes this enemy's turn. Must be called at most once per turn.
    ///
    /// Enemies alternate: after any non-resting turn (move, attack or a
    /// blocked step) the next call rests and clears the flag.
    ///
    /// The target is resolved before anything else; a stale target handle
    /// fails with [`EnemyError::MissingTarget`] and leaves the enemy untouched,
    /// including the skip flag.
    ///
    /// A knockback still in flight is settled onto its anchor before stepping,
    /// so grid steps always start from a tile centre.
    pub fn decide_and_act(&mut self, env: &mut TurnEnv<'_>) -> Result<TurnOutcome, EnemyError> {
        self.ensure_alive()?;

        let target_ref = self.state.target;
        let target_position = env
            .targets
            .target(target_ref)
            .map(|target| target.position())
            .ok_or(EnemyError::MissingTarget(target_ref))?;

        if self.state.skip_move {
            self.state.skip_move = false;
            return Ok(TurnOutcome::Rested);
        }

        self.animation.settle(
            &mut self.state.position,
            &mut self.state.tint,
            self.state.base_tint,
        );

        let direction = step_toward(self.state.position, target_position);
        let from = self.state.cell();

        let outcome = match env.mover.attempt_move(self.state.id, from, direction) {
            MoveOutcome::Moved { destination } => {
                self.state.position = destination.to_world();
                TurnOutcome::Moved {
                    from,
                    to: destination,
                }
            }
            MoveOutcome::BlockedBy(EntityKind::Target) => {
                let damage = self.state.contact_damage;
                let target = env
                    .targets
                    .target(target_ref)
                    .ok_or(EnemyError::MissingTarget(target_ref))?;
                target.lose_health(damage);

                env.feedback.trigger_animation(&self.config.attack_trigger);
                let [first, second] = &self.config.attack_sounds;
                env.feedback
                    .play_random_feedback([first.as_str(), second.as_str()]);

                TurnOutcome::Attacked { direction, damage }
            }
            MoveOutcome::BlockedBy(by) => TurnOutcome::Blocked { direction, by },
        };

        self.state.skip_move = true;
        Ok(outcome)
    }
}
