//! Knockback-and-return animation as an explicit state machine.
//!
//! The animation is resumed by an external frame driver once per tick with
//! the elapsed time. Each tick moves the actor a bounded distance toward the
//! current phase's goal:
//!
//! ```text
//!           restart                  within epsilon            == anchor
//!   Idle ───────────► Outbound ───────────────────► Return ─────────────► Idle
//!     ▲                  │  ▲ restart                  │ restart
//!     │                  │  └──────────────────────────┘
//!     │                  └──── abandon ────► Destroyed ◄──── abandon ──── (any)
//! ```
//!
//! The outbound phase ends once the squared remaining distance drops to the
//! configured epsilon. The return phase ends only on exact arrival at the
//! anchor. [`move_towards`] snaps onto its goal when the goal is within one
//! step, so exact arrival is always reached in a finite number of ticks.
//!
//! A restart while running keeps the original anchor, so however many hits
//! land mid-flight the actor still returns to the tile it was standing on.

use glam::Vec2;

use crate::state::Tint;

/// Phase of a running knockback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum AnimationPhase {
    /// Travelling from the hit position to the knockback target.
    Outbound,
    /// Travelling back to the anchor.
    Return,
}

/// Knockback state of one actor. At most one is active per actor.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum KnockbackAnimation {
    #[default]
    Idle,
    Outbound {
        anchor: Vec2,
        target: Vec2,
    },
    Return {
        anchor: Vec2,
    },
    /// The actor was destroyed; the animation never runs again.
    Destroyed,
}

/// What a tick did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationStatus {
    /// Nothing in flight.
    Idle,
    /// Still running in the given phase after this tick.
    Running(AnimationPhase),
    /// The return phase reached the anchor on this tick.
    Finished,
    /// The actor is gone; nothing was written.
    Destroyed,
}

impl AnimationStatus {
    pub fn is_running(self) -> bool {
        matches!(self, AnimationStatus::Running(_))
    }
}

/// Per-tick parameters supplied by the owner of the animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationStep {
    /// Distance the actor may travel this tick (`speed * dt`).
    pub max_delta: f32,
    /// Squared-distance tolerance ending the outbound phase.
    pub arrival_epsilon: f32,
    pub hit_tint: Tint,
    pub base_tint: Tint,
}

impl KnockbackAnimation {
    /// Starts (or restarts) a knockback displaced by `offset` from the anchor.
    ///
    /// The anchor of an animation already in flight is kept; otherwise
    /// `current` becomes the anchor. Travel starts from wherever the actor is
    /// when the next tick runs.
    pub fn restart(&mut self, current: Vec2, offset: Vec2) {
        if matches!(self, KnockbackAnimation::Destroyed) {
            return;
        }
        let anchor = self.anchor().unwrap_or(current);
        *self = KnockbackAnimation::Outbound {
            anchor,
            target: anchor + offset,
        };
    }

    /// Advances the animation by one tick, writing position and tint.
    ///
    /// A tick with `max_delta <= 0` (or non-finite) makes no progress and
    /// writes nothing.
    pub fn advance(
        &mut self,
        position: &mut Vec2,
        tint: &mut Tint,
        step: AnimationStep,
    ) -> AnimationStatus {
        let stalled = !(step.max_delta.is_finite() && step.max_delta > 0.0);

        match *self {
            KnockbackAnimation::Idle => AnimationStatus::Idle,
            KnockbackAnimation::Destroyed => AnimationStatus::Destroyed,
            KnockbackAnimation::Outbound { .. } | KnockbackAnimation::Return { .. } if stalled => {
                self.status()
            }
            KnockbackAnimation::Outbound { anchor, target } => {
                *position = move_towards(*position, target, step.max_delta);
                *tint = step.hit_tint;
                if position.distance_squared(target) <= step.arrival_epsilon {
                    *self = KnockbackAnimation::Return { anchor };
                    AnimationStatus::Running(AnimationPhase::Return)
                } else {
                    AnimationStatus::Running(AnimationPhase::Outbound)
                }
            }
            KnockbackAnimation::Return { anchor } => {
                *position = move_towards(*position, anchor, step.max_delta);
                *tint = step.base_tint;
                if position.distance_squared(anchor) == 0.0 {
                    *self = KnockbackAnimation::Idle;
                    AnimationStatus::Finished
                } else {
                    AnimationStatus::Running(AnimationPhase::Return)
                }
            }
        }
    }

    /// Ends a running animation immediately: the actor is put back on its
    /// anchor with the base tint. Returns false when nothing was running.
    pub fn settle(&mut self, position: &mut Vec2, tint: &mut Tint, base_tint: Tint) -> bool {
        match self.anchor() {
            Some(anchor) => {
                *position = anchor;
                *tint = base_tint;
                *self = KnockbackAnimation::Idle;
                true
            }
            None => false,
        }
    }

    /// Drops any remaining phases. Terminal.
    pub fn abandon(&mut self) {
        *self = KnockbackAnimation::Destroyed;
    }

    pub fn anchor(&self) -> Option<Vec2> {
        match *self {
            KnockbackAnimation::Outbound { anchor, .. } | KnockbackAnimation::Return { anchor } => {
                Some(anchor)
            }
            KnockbackAnimation::Idle | KnockbackAnimation::Destroyed => None,
        }
    }

    pub fn phase(&self) -> Option<AnimationPhase> {
        match self {
            KnockbackAnimation::Outbound { .. } => Some(AnimationPhase::Outbound),
            KnockbackAnimation::Return { .. } => Some(AnimationPhase::Return),
            KnockbackAnimation::Idle | KnockbackAnimation::Destroyed => None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase().is_some()
    }

    pub fn status(&self) -> AnimationStatus {
        match self.phase() {
            Some(phase) => AnimationStatus::Running(phase),
            None if matches!(self, KnockbackAnimation::Destroyed) => AnimationStatus::Destroyed,
            None => AnimationStatus::Idle,
        }
    }
}

/// Moves `current` toward `target` by at most `max_delta`, landing exactly
/// on `target` when it is within reach.
pub fn move_towards(current: Vec2, target: Vec2, max_delta: f32) -> Vec2 {
    let delta = target - current;
    let distance = delta.length();
    if distance <= max_delta || distance == 0.0 {
        target
    } else {
        current + delta / distance * max_delta
    }
}
