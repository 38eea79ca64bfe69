//! Scripted player that walks toward the nearest enemy and hits it.

use std::time::Duration;

use anyhow::{Context, Result};
use tracing::info;

use game_content::{Encounter, EnemySpawn, PlayerSpawn};
use game_core::{CardinalDirection, EntityKind, MoveOutcome, Position, step_toward};
use runtime::{EnemySnapshot, Runtime, RuntimeHandle, WorldSnapshot};

/// How a scripted run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ending {
    AllEnemiesDestroyed,
    PlayerStarved,
    OutOfTurns,
}

/// Arena used when no encounter file is configured.
pub fn default_encounter() -> Encounter {
    Encounter::new(
        7,
        7,
        PlayerSpawn {
            position: Position::new(0, 0),
            food: 60,
        },
    )
    .with_wall(Position::new(2, 2))
    .with_wall(Position::new(3, 2))
    .with_wall(Position::new(4, 4))
    .with_enemy(EnemySpawn::at(Position::new(6, 6)))
    .with_enemy(EnemySpawn::at(Position::new(5, 1)))
}

fn distance(a: Position, b: Position) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

fn nearest_enemy(snapshot: &WorldSnapshot, from: Position) -> Option<&EnemySnapshot> {
    snapshot
        .enemies
        .iter()
        .filter(|enemy| enemy.state.is_alive())
        .min_by_key(|enemy| distance(from, enemy.cell))
}

/// Steps toward `to`, sliding sideways when a wall is in the way.
async fn walk_toward(
    handle: &RuntimeHandle,
    from: Position,
    to: Position,
) -> Result<(CardinalDirection, MoveOutcome)> {
    let primary = step_toward(from.to_world(), to.to_world());
    let sidesteps = CardinalDirection::ALL
        .into_iter()
        .filter(|direction| direction.is_vertical() != primary.is_vertical());

    let mut last = (primary, MoveOutcome::BlockedBy(EntityKind::Wall));
    for direction in std::iter::once(primary).chain(sidesteps) {
        let outcome = handle.move_player(direction).await?;
        last = (direction, outcome);
        if outcome != MoveOutcome::BlockedBy(EntityKind::Wall) {
            break;
        }
    }
    Ok(last)
}

/// Plays up to `turns` rounds: the player moves or attacks, then every enemy
/// takes its turn.
pub async fn play(
    runtime: &Runtime,
    turns: u32,
    player_damage: i32,
    pause: Duration,
) -> Result<Ending> {
    let handle = runtime.handle();

    for round in 1..=turns {
        let snapshot = handle.snapshot().await?;
        let Some(player) = snapshot.player else {
            return Ok(Ending::PlayerStarved);
        };
        let Some(target) = nearest_enemy(&snapshot, player.cell()) else {
            return Ok(Ending::AllEnemiesDestroyed);
        };

        let enemy = target.state.id;
        if distance(player.cell(), target.cell) == 1 {
            let outcome = handle
                .apply_damage(enemy, player_damage, player.cell().to_world())
                .await
                .with_context(|| format!("player attack on {enemy} failed"))?;
            info!(round, %enemy, ?outcome, "player attacks");
        } else {
            let (direction, outcome) = walk_toward(&handle, player.cell(), target.cell).await?;
            info!(round, %direction, ?outcome, "player moves");
        }

        let report = runtime.step().await?;
        info!(
            round,
            acted = report.actions.len(),
            skipped = report.skipped.len(),
            "enemy turn done"
        );

        tokio::time::sleep(pause).await;
    }

    Ok(Ending::OutOfTurns)
}
