//! Event types for different topics.

use game_core::{DamageOutcome, EntityId, Position, TurnOutcome, Vec2};
use serde::{Deserialize, Serialize};

use crate::world::FeedbackCue;

/// Events related to the turn cadence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TurnEvent {
    /// A scheduled turn began.
    Started { turn: u64 },

    /// An enemy took its turn.
    EnemyActed {
        turn: u64,
        enemy: EntityId,
        outcome: TurnOutcome,
    },

    /// An enemy could not act this turn.
    EnemySkipped {
        turn: u64,
        enemy: EntityId,
        code: String,
        reason: String,
    },

    /// The player ran out of food and left the world.
    GameOver { turn: u64 },
}

/// Events related to hits in either direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CombatEvent {
    /// An enemy hit the player on contact.
    PlayerHit {
        enemy: EntityId,
        damage: i32,
        food_left: i32,
    },

    /// An enemy took damage.
    EnemyDamaged {
        enemy: EntityId,
        amount: i32,
        outcome: DamageOutcome,
    },

    /// An enemy's hit points reached zero and it left the grid.
    EnemyDestroyed { enemy: EntityId, cell: Position },

    /// Audio or sprite cue emitted by an enemy.
    Feedback { cue: FeedbackCue },
}

/// Events related to the frame cadence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AnimationEvent {
    /// A knockback returned to its anchor.
    KnockbackFinished { enemy: EntityId, position: Vec2 },
}
