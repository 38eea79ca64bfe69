//! The player as seen by enemies: a position and a food counter.

use game_core::{EntityId, Position, TargetEntity, TargetLookup, TargetRef, Vec2};

/// Player bookkeeping needed by enemies. Contact damage is paid in food.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayerTarget {
    cell: Position,
    food: i32,
}

impl PlayerTarget {
    pub fn new(cell: Position, food: i32) -> Self {
        Self { cell, food }
    }

    pub fn cell(&self) -> Position {
        self.cell
    }

    pub fn set_cell(&mut self, cell: Position) {
        self.cell = cell;
    }

    pub fn food(&self) -> i32 {
        self.food
    }

    /// Out of food; the run is over.
    pub fn is_starved(&self) -> bool {
        self.food <= 0
    }
}

impl TargetEntity for PlayerTarget {
    fn position(&self) -> Vec2 {
        self.cell.to_world()
    }

    fn lose_health(&mut self, amount: i32) {
        self.food = self.food.saturating_sub(amount);
    }
}

/// Holds the player while it is in the world.
///
/// Enemies keep a [`TargetRef`] to the player; once the slot is emptied that
/// handle no longer resolves and their turns fail with a missing target.
#[derive(Clone, Debug, Default)]
pub struct TargetSlot {
    player: Option<PlayerTarget>,
}

impl TargetSlot {
    pub fn new(player: PlayerTarget) -> Self {
        Self {
            player: Some(player),
        }
    }

    pub fn player(&self) -> Option<&PlayerTarget> {
        self.player.as_ref()
    }

    pub fn player_mut(&mut self) -> Option<&mut PlayerTarget> {
        self.player.as_mut()
    }

    pub fn remove(&mut self) -> Option<PlayerTarget> {
        self.player.take()
    }
}

impl TargetLookup for TargetSlot {
    fn target(&mut self, target: TargetRef) -> Option<&mut dyn TargetEntity> {
        if target.entity() != EntityId::PLAYER {
            return None;
        }
        self.player
            .as_mut()
            .map(|player| player as &mut dyn TargetEntity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_damage_is_paid_in_food() {
        let mut player = PlayerTarget::new(Position::new(2, 3), 15);
        player.lose_health(10);
        assert_eq!(player.food(), 5);
        assert!(!player.is_starved());
        player.lose_health(10);
        assert!(player.is_starved());
        assert_eq!(player.position(), Vec2::new(2.0, 3.0));
    }

    #[test]
    fn slot_resolves_only_the_player() {
        let mut slot = TargetSlot::new(PlayerTarget::new(Position::ORIGIN, 10));
        assert!(slot.target(TargetRef::PLAYER).is_some());
        assert!(slot.target(TargetRef(EntityId(4))).is_none());

        slot.remove();
        assert!(slot.target(TargetRef::PLAYER).is_none());
    }
}
