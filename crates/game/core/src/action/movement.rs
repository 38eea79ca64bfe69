use glam::Vec2;

use crate::state::Position;

/// One of the four grid directions an actor may step in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum CardinalDirection {
    North,
    South,
    East,
    West,
}

impl CardinalDirection {
    pub const ALL: [CardinalDirection; 4] = [
        CardinalDirection::North,
        CardinalDirection::South,
        CardinalDirection::East,
        CardinalDirection::West,
    ];

    pub fn delta(self) -> (i32, i32) {
        match self {
            CardinalDirection::North => (0, 1),
            CardinalDirection::South => (0, -1),
            CardinalDirection::East => (1, 0),
            CardinalDirection::West => (-1, 0),
        }
    }

    pub fn is_vertical(self) -> bool {
        matches!(self, CardinalDirection::North | CardinalDirection::South)
    }

    /// Cell one step away from `origin`.
    pub fn step_from(self, origin: Position) -> Position {
        let (dx, dy) = self.delta();
        Position::new(origin.x + dx, origin.y + dy)
    }
}

/// Greedy axis-priority step from `from` toward `to`.
///
/// When the horizontal gap is below `f32::EPSILON` the step is vertical
/// (north if the target is above, south otherwise); in every other case it is
/// horizontal. Only one axis is stepped, so a diagonal target is approached
/// along x first.
pub fn step_toward(from: Vec2, to: Vec2) -> CardinalDirection {
    if (to.x - from.x).abs() < f32::EPSILON {
        if to.y > from.y {
            CardinalDirection::North
        } else {
            CardinalDirection::South
        }
    } else if to.x > from.x {
        CardinalDirection::East
    } else {
        CardinalDirection::West
    }
}
