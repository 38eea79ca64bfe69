//! In-crate fakes for the collaborator traits.

use glam::Vec2;

use crate::action::CardinalDirection;
use crate::env::{EntityKind, FeedbackSink, GridMover, MoveOutcome, TargetEntity, TargetLookup};
use crate::state::{EntityId, Position, TargetRef};

/// Mover that either always succeeds or always reports the same blocker.
pub(crate) struct ScriptedMover {
    blocker: Option<EntityKind>,
    pub calls: Vec<(EntityId, Position, CardinalDirection)>,
}

impl ScriptedMover {
    pub fn free() -> Self {
        Self {
            blocker: None,
            calls: Vec::new(),
        }
    }

    pub fn blocked_by(kind: EntityKind) -> Self {
        Self {
            blocker: Some(kind),
            calls: Vec::new(),
        }
    }
}

impl GridMover for ScriptedMover {
    fn attempt_move(
        &mut self,
        actor: EntityId,
        from: Position,
        direction: CardinalDirection,
    ) -> MoveOutcome {
        self.calls.push((actor, from, direction));
        match self.blocker {
            Some(kind) => MoveOutcome::BlockedBy(kind),
            None => MoveOutcome::Moved {
                destination: direction.step_from(from),
            },
        }
    }
}

/// Player stand-in answering to [`TargetRef::PLAYER`] while `present`.
pub(crate) struct Dummy {
    pub position: Vec2,
    pub health: i32,
    pub present: bool,
}

impl Dummy {
    pub const STARTING_HEALTH: i32 = 100;

    pub fn at(position: Vec2) -> Self {
        Self {
            position,
            health: Self::STARTING_HEALTH,
            present: true,
        }
    }
}

impl TargetEntity for Dummy {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn lose_health(&mut self, amount: i32) {
        self.health -= amount;
    }
}

impl TargetLookup for Dummy {
    fn target(&mut self, target: TargetRef) -> Option<&mut dyn TargetEntity> {
        if self.present && target == TargetRef::PLAYER {
            Some(self as &mut dyn TargetEntity)
        } else {
            None
        }
    }
}

#[derive(Default)]
pub(crate) struct RecordingFeedback {
    pub sounds: Vec<[String; 2]>,
    pub triggers: Vec<String>,
}

impl RecordingFeedback {
    pub fn is_empty(&self) -> bool {
        self.sounds.is_empty() && self.triggers.is_empty()
    }
}

impl FeedbackSink for RecordingFeedback {
    fn play_random_feedback(&mut self, clips: [&str; 2]) {
        self.sounds.push(clips.map(str::to_string));
    }

    fn trigger_animation(&mut self, name: &str) {
        self.triggers.push(name.to_string());
    }
}
