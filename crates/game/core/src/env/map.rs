use crate::action::CardinalDirection;
use crate::state::{EntityId, Position};

/// What stands in a cell an actor tried to enter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum EntityKind {
    /// The entity the mover is tracking (the player).
    Target,
    /// Another enemy.
    Enemy,
    /// Impassable terrain or the map edge.
    Wall,
}

/// Result of a single grid step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveOutcome {
    /// The actor now occupies `destination`.
    Moved { destination: Position },
    /// The destination is occupied; nothing moved.
    BlockedBy(EntityKind),
}

/// Shared grid movement primitive (collision and occupancy).
///
/// Implementations own the occupancy bookkeeping. On `Moved` the caller is
/// responsible for updating its own position to the destination tile.
pub trait GridMover {
    fn attempt_move(
        &mut self,
        actor: EntityId,
        from: Position,
        direction: CardinalDirection,
    ) -> MoveOutcome;
}
