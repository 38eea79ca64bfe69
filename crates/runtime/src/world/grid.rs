//! Bounded grid with walls and single-occupant cells.

use std::collections::{HashMap, HashSet};

use game_core::{CardinalDirection, EntityId, EntityKind, GridMover, MoveOutcome, Position};
use tracing::trace;

/// Shared move primitive for every actor in the world.
///
/// Cells outside the bounds behave like walls. Each cell holds at most one
/// actor; the player is reported as [`EntityKind::Target`] so enemies bumping
/// into it turn the move into an attack.
#[derive(Clone, Debug)]
pub struct GridWorld {
    width: u32,
    height: u32,
    walls: HashSet<Position>,
    occupants: HashMap<Position, EntityId>,
}

impl GridWorld {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            walls: HashSet::new(),
            occupants: HashMap::new(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn in_bounds(&self, cell: Position) -> bool {
        cell.x >= 0 && cell.y >= 0 && (cell.x as u32) < self.width && (cell.y as u32) < self.height
    }

    /// Adds a wall. Returns false when the cell is outside the grid or taken.
    pub fn add_wall(&mut self, cell: Position) -> bool {
        if !self.in_bounds(cell) || self.occupants.contains_key(&cell) {
            return false;
        }
        self.walls.insert(cell)
    }

    pub fn is_wall(&self, cell: Position) -> bool {
        self.walls.contains(&cell)
    }

    pub fn occupant(&self, cell: Position) -> Option<EntityId> {
        self.occupants.get(&cell).copied()
    }

    /// What a mover would bump into when entering `cell`, if anything.
    pub fn blocker_at(&self, cell: Position) -> Option<EntityKind> {
        if !self.in_bounds(cell) || self.is_wall(cell) {
            return Some(EntityKind::Wall);
        }
        self.occupant(cell).map(|id| {
            if id.is_player() {
                EntityKind::Target
            } else {
                EntityKind::Enemy
            }
        })
    }

    /// Puts `entity` on a free cell. Returns false when the cell is blocked.
    pub fn place(&mut self, entity: EntityId, cell: Position) -> bool {
        if self.blocker_at(cell).is_some() {
            return false;
        }
        self.occupants.insert(cell, entity);
        true
    }

    /// Removes `entity` from `cell`. Returns false when it was not there.
    pub fn vacate(&mut self, entity: EntityId, cell: Position) -> bool {
        if self.occupant(cell) == Some(entity) {
            self.occupants.remove(&cell);
            true
        } else {
            false
        }
    }
}

impl GridMover for GridWorld {
    fn attempt_move(
        &mut self,
        actor: EntityId,
        from: Position,
        direction: CardinalDirection,
    ) -> MoveOutcome {
        let destination = direction.step_from(from);
        if let Some(kind) = self.blocker_at(destination) {
            trace!(
                target: "runtime::grid",
                %actor,
                %from,
                %direction,
                blocker = %kind,
                "move blocked"
            );
            return MoveOutcome::BlockedBy(kind);
        }

        self.vacate(actor, from);
        self.occupants.insert(destination, actor);
        MoveOutcome::Moved { destination }
    }
}
