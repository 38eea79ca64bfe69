//! End-to-end runtime tests: commands through the handle, events off the bus.

use std::path::PathBuf;
use std::time::Duration;

use game_content::{ConfigLoader, Encounter, EncounterLoader, EnemySpawn, PlayerSpawn};
use game_core::{
    AnimationPhase, CardinalDirection, DamageOutcome, EntityId, EntityKind, KnockbackDirection,
    Liveness, MoveOutcome, Position, Tint, TurnOutcome, Vec2,
};
use runtime::{AnimationEvent, CombatEvent, Event, Runtime, RuntimeError, Topic, TurnEvent};
use tokio::sync::broadcast;

const ENEMY: EntityId = EntityId(1);

/// Player at the west end of a one-row corridor, one enemy at `enemy_x`.
fn corridor(food: i32, enemy_x: i32) -> Encounter {
    Encounter::new(
        6,
        1,
        PlayerSpawn {
            position: Position::ORIGIN,
            food,
        },
    )
    .with_enemy(EnemySpawn::at(Position::new(enemy_x, 0)))
}

async fn start(encounter: Encounter) -> Runtime {
    Runtime::builder()
        .encounter(encounter)
        .feedback_seed(11)
        .build()
        .await
        .expect("runtime should build")
}

/// Collects everything already published on a topic.
fn drain(rx: &mut broadcast::Receiver<Event>) -> Vec<Event> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}

#[tokio::test]
async fn build_requires_an_encounter() {
    let err = Runtime::builder().build().await.err().unwrap();
    assert!(matches!(err, RuntimeError::MissingEncounter));
}

#[tokio::test]
async fn build_rejects_frame_rates_without_a_usable_period() {
    // 1e12 Hz is finite and positive, but its period rounds to zero.
    for hz in [0.0, -30.0, f32::NAN, 1.0e12] {
        let err = Runtime::builder()
            .encounter(corridor(10, 3))
            .frame_rate(hz)
            .build()
            .await
            .err()
            .unwrap();
        assert!(matches!(err, RuntimeError::InvalidFrameRate(_)), "{hz}");
    }
}

#[tokio::test]
async fn fast_frame_driver_shuts_down_cleanly() {
    let runtime = Runtime::builder()
        .encounter(corridor(10, 3))
        .frame_rate(10_000.0)
        .build()
        .await
        .unwrap();
    let handle = runtime.handle();
    assert_eq!(handle.snapshot().await.unwrap().turn, 0);

    runtime.shutdown().await.unwrap();
    assert!(matches!(
        handle.snapshot().await,
        Err(RuntimeError::CommandChannelClosed)
    ));
}

#[tokio::test]
async fn enemy_attack_is_reported_on_turn_and_combat_topics() {
    let runtime = start(corridor(100, 1)).await;
    let handle = runtime.handle();
    let mut turns = handle.subscribe(Topic::Turn);
    let mut combat = handle.subscribe(Topic::Combat);

    let report = runtime.step().await.unwrap();
    assert!(matches!(
        report.actions[0],
        (ENEMY, TurnOutcome::Attacked { damage: 10, .. })
    ));

    let turn_events = drain(&mut turns);
    assert_eq!(turn_events[0], Event::Turn(TurnEvent::Started { turn: 1 }));
    assert!(matches!(
        turn_events[1],
        Event::Turn(TurnEvent::EnemyActed { turn: 1, enemy: ENEMY, .. })
    ));

    let combat_events = drain(&mut combat);
    assert_eq!(
        combat_events[0],
        Event::Combat(CombatEvent::PlayerHit {
            enemy: ENEMY,
            damage: 10,
            food_left: 90,
        })
    );
    assert!(combat_events[1..].iter().all(|event| matches!(
        event,
        Event::Combat(CombatEvent::Feedback { .. })
    )));

    let snapshot = handle.snapshot().await.unwrap();
    assert_eq!(snapshot.player.map(|p| p.food()), Some(90));

    runtime.shutdown().await.unwrap();
}

#[tokio::test]
async fn knockback_runs_on_manual_ticks_and_returns_home() {
    let runtime = start(corridor(100, 3)).await;
    let handle = runtime.handle();
    let mut animation = handle.subscribe(Topic::Animation);

    let outcome = handle
        .apply_damage(ENEMY, 1, Vec2::new(2.0, 0.0))
        .await
        .unwrap();
    assert_eq!(
        outcome,
        DamageOutcome::Survived {
            remaining: 1,
            knockback: Some(KnockbackDirection::Right),
        }
    );

    let first = handle.tick(1.0 / 60.0).await.unwrap();
    assert_eq!(first.running, 1);
    let mid_flight = handle.snapshot().await.unwrap();
    let enemy = mid_flight.enemy(ENEMY).unwrap();
    assert!(enemy.state.position.x > 3.0);
    assert_eq!(enemy.state.tint, Tint::RED);
    assert_eq!(enemy.cell, Position::new(3, 0));
    assert_eq!(enemy.animation, Some(AnimationPhase::Outbound));

    let mut ticks = 0;
    loop {
        ticks += 1;
        assert!(ticks < 100, "knockback never finished");
        if handle.tick(1.0 / 60.0).await.unwrap().finished == vec![ENEMY] {
            break;
        }
    }

    assert_eq!(
        animation.recv().await.unwrap(),
        Event::Animation(AnimationEvent::KnockbackFinished {
            enemy: ENEMY,
            position: Vec2::new(3.0, 0.0),
        })
    );
    let settled = handle.snapshot().await.unwrap();
    let enemy = settled.enemy(ENEMY).unwrap();
    assert_eq!(enemy.state.position, Vec2::new(3.0, 0.0));
    assert_eq!(enemy.state.tint, Tint::WHITE);
    assert_eq!(enemy.state.hit_points, 1);
    assert_eq!(enemy.animation, None);

    runtime.shutdown().await.unwrap();
}

#[tokio::test]
async fn lethal_hit_frees_the_cell() {
    let runtime = start(corridor(100, 1)).await;
    let handle = runtime.handle();
    let mut combat = handle.subscribe(Topic::Combat);

    // The enemy blocks the player until it is destroyed.
    assert_eq!(
        handle.move_player(CardinalDirection::East).await.unwrap(),
        MoveOutcome::BlockedBy(EntityKind::Enemy)
    );

    let outcome = handle
        .apply_damage(ENEMY, 2, Vec2::new(0.0, 0.0))
        .await
        .unwrap();
    assert_eq!(outcome, DamageOutcome::Destroyed);

    let events = drain(&mut combat);
    assert!(events.contains(&Event::Combat(CombatEvent::EnemyDestroyed {
        enemy: ENEMY,
        cell: Position::new(1, 0),
    })));

    let snapshot = handle.snapshot().await.unwrap();
    assert_eq!(snapshot.enemy(ENEMY).unwrap().state.liveness, Liveness::Destroyed);

    assert_eq!(
        handle.move_player(CardinalDirection::East).await.unwrap(),
        MoveOutcome::Moved {
            destination: Position::new(1, 0)
        }
    );

    let err = handle
        .apply_damage(ENEMY, 1, Vec2::ZERO)
        .await
        .unwrap_err();
    assert!(matches!(err, RuntimeError::Enemy(_)));

    let report = runtime.step().await.unwrap();
    assert_eq!(report.removed, vec![ENEMY]);
    assert!(handle.snapshot().await.unwrap().enemies.is_empty());

    runtime.shutdown().await.unwrap();
}

#[tokio::test]
async fn starving_player_ends_the_game_and_enemies_lose_their_target() {
    let runtime = start(corridor(10, 1)).await;
    let handle = runtime.handle();
    let mut turns = handle.subscribe(Topic::Turn);

    runtime.step().await.unwrap();
    let events = drain(&mut turns);
    assert_eq!(
        events.last(),
        Some(&Event::Turn(TurnEvent::GameOver { turn: 1 }))
    );
    assert!(handle.snapshot().await.unwrap().player.is_none());

    // Resting turn still needs the target, so it is skipped too.
    let report = runtime.step().await.unwrap();
    assert!(report.actions.is_empty());
    assert_eq!(report.skipped.len(), 1);
    let events = drain(&mut turns);
    assert!(events.iter().any(|event| matches!(
        event,
        Event::Turn(TurnEvent::EnemySkipped { code, .. }) if code == "missing_target"
    )));

    let err = handle
        .move_player(CardinalDirection::North)
        .await
        .unwrap_err();
    assert!(matches!(err, RuntimeError::PlayerGone));

    runtime.shutdown().await.unwrap();
}

#[tokio::test]
async fn unknown_enemy_is_an_error() {
    let runtime = start(corridor(10, 3)).await;
    let err = runtime
        .handle()
        .apply_damage(EntityId(42), 1, Vec2::ZERO)
        .await
        .unwrap_err();
    assert!(matches!(err, RuntimeError::UnknownEnemy(EntityId(42))));
    runtime.shutdown().await.unwrap();
}

#[tokio::test]
async fn frame_driver_finishes_knockback_without_manual_ticks() {
    let runtime = Runtime::builder()
        .encounter(corridor(100, 3))
        .frame_rate(120.0)
        .feedback_seed(5)
        .build()
        .await
        .unwrap();
    let handle = runtime.handle();
    let mut animation = handle.subscribe(Topic::Animation);

    handle
        .apply_damage(ENEMY, 1, Vec2::new(3.0, 1.0))
        .await
        .unwrap();

    let event = tokio::time::timeout(Duration::from_secs(5), animation.recv())
        .await
        .expect("frame driver should finish the knockback")
        .unwrap();
    assert_eq!(
        event,
        Event::Animation(AnimationEvent::KnockbackFinished {
            enemy: ENEMY,
            position: Vec2::new(3.0, 0.0),
        })
    );

    drop(handle);
    runtime.shutdown().await.unwrap();
}

#[tokio::test]
async fn bundled_content_builds_a_runtime() {
    let data = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../game/content/data");
    let config = ConfigLoader::load(&data.join("enemy.toml")).unwrap();
    let encounter = EncounterLoader::load(&data.join("encounter.ron")).unwrap();

    let runtime = Runtime::builder()
        .encounter(encounter)
        .enemy_config(config)
        .feedback_seed(1)
        .build()
        .await
        .unwrap();

    let snapshot = runtime.handle().snapshot().await.unwrap();
    let hit_points: Vec<i32> = snapshot.enemies.iter().map(|e| e.state.hit_points).collect();
    assert_eq!(hit_points, vec![2, 3]);

    for _ in 0..4 {
        runtime.step().await.unwrap();
    }
    assert_eq!(runtime.handle().snapshot().await.unwrap().turn, 4);

    runtime.shutdown().await.unwrap();
}
