//! Tests for the simulation engine: jump feel, landing classification,
//! wave propagation, enemies, zones, and the respawn cycle.

use ekko_core::commands::{InputFrame, PlayerCommand};
use ekko_core::components::ZoneKind;
use ekko_core::constants::*;
use ekko_core::enums::*;
use ekko_core::events::FeedbackEvent;
use ekko_core::state::GameStateSnapshot;
use ekko_core::types::{Bounds, Position};
use ekko_level::level::{
    EnemySpawnDef, LevelDef, LightWellDef, PlatformDef, ReactiveDef, RevealableDef, ZoneDef,
};

use crate::engine::{SimConfig, SimulationEngine};

// ---- Helpers ----

fn ground() -> PlatformDef {
    PlatformDef {
        id: 1,
        bounds: Bounds::new(Position::new(-30.0, -1.0), Position::new(30.0, 0.0)),
        reactive: None,
    }
}

fn base_level(spawn: Position) -> LevelDef {
    LevelDef {
        name: "test".to_string(),
        spawn,
        floor_y: -10.0,
        platforms: vec![ground()],
        zones: Vec::new(),
        revealables: Vec::new(),
        light_wells: Vec::new(),
        enemies: Vec::new(),
    }
}

fn started(level: LevelDef) -> SimulationEngine {
    let mut engine = SimulationEngine::with_level(SimConfig::default(), level);
    engine.queue_command(PlayerCommand::StartLevel);
    engine
}

fn tick_with(engine: &mut SimulationEngine, frame: InputFrame) -> GameStateSnapshot {
    engine.queue_command(PlayerCommand::Input { frame });
    engine.tick()
}

fn right() -> InputFrame {
    InputFrame {
        move_x: 1.0,
        ..Default::default()
    }
}

/// Tick with a fixed frame until the predicate matches, up to `max_ticks`.
fn run_until(
    engine: &mut SimulationEngine,
    frame: InputFrame,
    max_ticks: u32,
    pred: impl Fn(&GameStateSnapshot) -> bool,
) -> Option<GameStateSnapshot> {
    for _ in 0..max_ticks {
        let snap = tick_with(engine, frame);
        if pred(&snap) {
            return Some(snap);
        }
    }
    None
}

fn landed_event(snap: &GameStateSnapshot) -> Option<(LandingKind, f64, bool)> {
    snap.events.iter().find_map(|e| match e {
        FeedbackEvent::Landed {
            kind,
            impact_force,
            heavy,
        } => Some((*kind, *impact_force, *heavy)),
        _ => None,
    })
}

// ---- Determinism ----

#[test]
fn test_determinism_same_seed() {
    let mut engine_a = SimulationEngine::new(SimConfig {
        seed: 12345,
        ..Default::default()
    });
    let mut engine_b = SimulationEngine::new(SimConfig {
        seed: 12345,
        ..Default::default()
    });

    engine_a.queue_command(PlayerCommand::StartLevel);
    engine_b.queue_command(PlayerCommand::StartLevel);

    for i in 0..300u32 {
        let frame = InputFrame {
            move_x: 1.0,
            jump_pressed: i % 50 == 10,
            jump_released: i % 50 == 20,
            down_held: i % 70 > 55,
            ..Default::default()
        };
        let snap_a = tick_with(&mut engine_a, frame);
        let snap_b = tick_with(&mut engine_b, frame);

        let json_a = serde_json::to_string(&snap_a).unwrap();
        let json_b = serde_json::to_string(&snap_b).unwrap();
        assert_eq!(json_a, json_b, "Snapshots diverged with same seed");
    }
}

#[test]
fn test_determinism_different_seeds() {
    let mut engine_a = SimulationEngine::new(SimConfig {
        seed: 111,
        ..Default::default()
    });
    let mut engine_b = SimulationEngine::new(SimConfig {
        seed: 222,
        ..Default::default()
    });

    engine_a.queue_command(PlayerCommand::StartLevel);
    engine_b.queue_command(PlayerCommand::StartLevel);

    // Ambient scenery is scattered from the seed, so the very first
    // snapshots already differ.
    let mut diverged = false;
    for _ in 0..10 {
        let json_a = serde_json::to_string(&engine_a.tick()).unwrap();
        let json_b = serde_json::to_string(&engine_b.tick()).unwrap();
        if json_a != json_b {
            diverged = true;
            break;
        }
    }
    assert!(diverged, "Different seeds should produce divergent output");
}

// ---- Phases and commands ----

#[test]
fn test_start_level_enters_active() {
    let mut engine = SimulationEngine::new(SimConfig::default());

    let snap = engine.tick();
    assert_eq!(snap.phase, GamePhase::MainMenu);

    engine.queue_command(PlayerCommand::StartLevel);
    let snap = engine.tick();
    assert_eq!(snap.phase, GamePhase::Active);
    assert_eq!(snap.player.light, MAX_LIGHT);
}

#[test]
fn test_pause_freezes_time() {
    let mut engine = started(base_level(Position::new(0.0, 0.0)));
    for _ in 0..10 {
        engine.tick();
    }

    engine.queue_command(PlayerCommand::Pause);
    let frozen = engine.tick();
    assert_eq!(frozen.phase, GamePhase::Paused);
    let tick_at_pause = frozen.time.tick;

    for _ in 0..20 {
        let snap = engine.tick();
        assert_eq!(snap.time.tick, tick_at_pause);
    }

    engine.queue_command(PlayerCommand::Resume);
    engine.tick();
    let snap = engine.tick();
    assert!(snap.time.tick > tick_at_pause);
}

#[test]
fn test_return_to_menu_clears_world() {
    let mut engine = started(base_level(Position::new(0.0, 0.0)));
    engine.tick();

    engine.queue_command(PlayerCommand::ReturnToMenu);
    let snap = engine.tick();
    assert_eq!(snap.phase, GamePhase::MainMenu);
    assert!(snap.enemies.is_empty());
    assert!(snap.revealables.is_empty());
}

// ---- Falling and landing ----

#[test]
fn test_fall_produces_normal_landing_and_wave() {
    let mut engine = started(base_level(Position::new(0.0, 3.0)));

    let snap = run_until(&mut engine, InputFrame::default(), 120, |s| {
        landed_event(s).is_some()
    })
    .expect("player should land within two seconds");

    let (kind, force, heavy) = landed_event(&snap).unwrap();
    assert_eq!(kind, LandingKind::Normal);
    assert!(!heavy);
    // Free fall from 3 units is roughly sqrt(2 * 9.81 * 3).
    assert!((6.5..9.0).contains(&force), "impact force was {force}");
    assert!(snap
        .events
        .iter()
        .any(|e| matches!(e, FeedbackEvent::WaveEmitted { .. })));
    assert!(snap.player.grounded);
    assert_eq!(snap.player.last_landing.unwrap().kind, LandingKind::Normal);
}

#[test]
fn test_buffered_jump_fires_on_touchdown() {
    let mut engine = started(base_level(Position::new(0.0, 2.0)));

    // Fall until just above the ground, then press jump early.
    run_until(&mut engine, InputFrame::default(), 120, |s| {
        s.player.position.y < 0.5
    })
    .expect("player should approach the ground");

    let press = InputFrame {
        jump_pressed: true,
        ..Default::default()
    };
    tick_with(&mut engine, press);

    // The buffered press fires on the first grounded tick.
    let snap = run_until(&mut engine, InputFrame::default(), 20, |s| {
        s.player.velocity.y > 10.0
    });
    assert!(snap.is_some(), "buffered jump should fire after touchdown");
}

#[test]
fn test_coyote_jump_after_leaving_ledge() {
    let mut level = base_level(Position::new(-1.0, 0.0));
    level.platforms = vec![PlatformDef {
        id: 1,
        bounds: Bounds::new(Position::new(-5.0, -1.0), Position::new(0.0, 0.0)),
        reactive: None,
    }];
    let mut engine = started(level);

    run_until(&mut engine, right(), 60, |s| !s.player.grounded)
        .expect("player should walk off the ledge");

    // One tick into the fall, still inside the coyote window.
    let press = InputFrame {
        move_x: 1.0,
        jump_pressed: true,
        ..Default::default()
    };
    let snap = tick_with(&mut engine, press);
    assert!(
        snap.player.velocity.y > 10.0,
        "coyote jump should fire, velocity was {}",
        snap.player.velocity.y
    );
}

#[test]
fn test_jump_cut_halves_ascent() {
    let mut engine = started(base_level(Position::new(0.0, 0.0)));
    engine.tick(); // settle onto the ground

    let press = InputFrame {
        jump_pressed: true,
        ..Default::default()
    };
    let snap = tick_with(&mut engine, press);
    assert!(snap.player.velocity.y > 13.0);

    engine.tick();
    let release = InputFrame {
        jump_released: true,
        ..Default::default()
    };
    let snap = tick_with(&mut engine, release);
    assert!(
        (4.0..7.5).contains(&snap.player.velocity.y),
        "cut should halve the ascent, velocity was {}",
        snap.player.velocity.y
    );
}

#[test]
fn test_slam_landing_is_heavy() {
    let mut engine = started(base_level(Position::new(0.0, 6.0)));
    let slam = InputFrame {
        down_held: true,
        ..Default::default()
    };

    let snap = run_until(&mut engine, slam, 180, |s| landed_event(s).is_some())
        .expect("player should land");
    let (kind, _, heavy) = landed_event(&snap).unwrap();
    assert_eq!(kind, LandingKind::Slam);
    assert!(heavy, "every slam counts as a heavy impact");
}

#[test]
fn test_cushioned_landing_softens_wave() {
    let mut engine = started(base_level(Position::new(0.0, 4.0)));

    run_until(&mut engine, InputFrame::default(), 120, |s| {
        s.player.position.y < 0.35
    })
    .expect("player should approach the ground");

    let cushion = InputFrame {
        control_fall_pressed: true,
        ..Default::default()
    };
    tick_with(&mut engine, cushion);

    let snap = run_until(&mut engine, InputFrame::default(), 60, |s| {
        landed_event(s).is_some()
    })
    .expect("player should land");

    let (kind, _, heavy) = landed_event(&snap).unwrap();
    assert_eq!(kind, LandingKind::Cushioned);
    assert!(!heavy);

    let radius = snap
        .events
        .iter()
        .find_map(|e| match e {
            FeedbackEvent::WaveEmitted { target_radius, .. } => Some(*target_radius),
            _ => None,
        })
        .unwrap();
    assert!(radius < 1.5, "cushioned wave should be tiny, was {radius}");
}

// ---- Waves, scenery, enemies ----

#[test]
fn test_wave_reveals_scenery() {
    let mut level = base_level(Position::new(0.0, 5.0));
    level.revealables.push(RevealableDef {
        id: 1,
        position: Position::new(2.5, 1.0),
        radius: 1.0,
    });
    let mut engine = started(level);

    let slam = InputFrame {
        down_held: true,
        ..Default::default()
    };
    let snap = run_until(&mut engine, slam, 240, |s| {
        s.events
            .iter()
            .any(|e| matches!(e, FeedbackEvent::SceneryRevealed { id: 1 }))
    })
    .expect("slam wave should reveal the scenery");

    let piece = snap.revealables.iter().find(|r| r.id == 1).unwrap();
    assert_eq!(piece.phase, RevealPhase::FadingIn);

    // Fade-in completes, the hold runs out, the piece fades back.
    let snap = run_until(&mut engine, InputFrame::default(), 60, |s| {
        s.revealables
            .iter()
            .any(|r| r.id == 1 && r.phase == RevealPhase::Visible && r.alpha >= 1.0)
    })
    .expect("scenery should reach full visibility");
    assert!(snap.revealables.iter().any(|r| r.id == 1));

    // The wave refreshes the hold while it is still alive, so the full
    // cycle takes the wave fade plus the hold duration.
    let faded = run_until(&mut engine, InputFrame::default(), 600, |s| {
        s.revealables.iter().any(|r| {
            r.id == 1 && matches!(r.phase, RevealPhase::FadingOut | RevealPhase::Hidden)
        })
    });
    assert!(faded.is_some(), "scenery should fade after its hold expires");
}

#[test]
fn test_wave_alerts_dormant_enemy() {
    let mut level = base_level(Position::new(0.0, 5.0));
    level.enemies.push(EnemySpawnDef {
        id: 1,
        archetype: EnemyArchetype::Lurker,
        position: Position::new(3.0, 1.0),
    });
    let mut engine = started(level);

    let slam = InputFrame {
        down_held: true,
        ..Default::default()
    };
    let snap = run_until(&mut engine, slam, 240, |s| {
        s.events
            .iter()
            .any(|e| matches!(e, FeedbackEvent::EnemyAlerted { enemy: 1, .. }))
    })
    .expect("slam wave should wake the enemy");

    let enemy = snap.enemies.iter().find(|e| e.id == 1).unwrap();
    assert_ne!(enemy.state, EnemyState::Dormant);
    assert!(enemy.revealed, "an alerted enemy flashes visible");
}

#[test]
fn test_chase_and_contact_damage() {
    let mut level = base_level(Position::new(0.0, 5.0));
    level.enemies.push(EnemySpawnDef {
        id: 1,
        archetype: EnemyArchetype::Lurker,
        position: Position::new(3.0, 1.0),
    });
    let mut engine = started(level);

    let slam = InputFrame {
        down_held: true,
        ..Default::default()
    };
    run_until(&mut engine, slam, 240, |s| {
        s.events
            .iter()
            .any(|e| matches!(e, FeedbackEvent::EnemyChaseStarted { enemy: 1 }))
    })
    .expect("the alerted enemy should spot the grounded player");

    let snap = run_until(&mut engine, InputFrame::default(), 120, |s| {
        s.events
            .iter()
            .any(|e| matches!(e, FeedbackEvent::DamageTaken { .. }))
    })
    .expect("the chasing enemy should reach the player");
    assert_eq!(snap.player.light, MAX_LIGHT - ENEMY_CONTACT_DAMAGE);
}

// ---- Zones, death, respawn ----

#[test]
fn test_kill_zone_death_and_respawn() {
    let mut level = base_level(Position::new(0.0, 0.0));
    level.zones.push(ZoneDef {
        id: 1,
        bounds: Bounds::new(Position::new(3.0, 0.0), Position::new(4.0, 1.0)),
        kind: ZoneKind::Kill,
        amount: 0.0,
        apply_once: false,
    });
    let mut engine = started(level);

    let snap = run_until(&mut engine, right(), 120, |s| {
        s.events.iter().any(|e| matches!(e, FeedbackEvent::PlayerDied))
    })
    .expect("kill zone should drain all light");
    assert_eq!(snap.player.light, 0.0);

    let snap = run_until(&mut engine, InputFrame::default(), 120, |s| {
        s.events
            .iter()
            .any(|e| matches!(e, FeedbackEvent::Respawned { .. }))
    })
    .expect("player should respawn after the delay");
    assert_eq!(snap.player.light, MAX_LIGHT);
    assert!((snap.player.position.x - 0.0).abs() < 0.01);
}

#[test]
fn test_checkpoint_sets_respawn_point() {
    let mut level = base_level(Position::new(0.0, 0.0));
    level.zones.push(ZoneDef {
        id: 1,
        bounds: Bounds::new(Position::new(2.0, 0.0), Position::new(3.0, 2.0)),
        kind: ZoneKind::Checkpoint,
        amount: 0.0,
        apply_once: true,
    });
    level.zones.push(ZoneDef {
        id: 2,
        bounds: Bounds::new(Position::new(5.0, 0.0), Position::new(6.0, 1.0)),
        kind: ZoneKind::Kill,
        amount: 0.0,
        apply_once: false,
    });
    let mut engine = started(level);

    run_until(&mut engine, right(), 120, |s| {
        s.events
            .iter()
            .any(|e| matches!(e, FeedbackEvent::CheckpointReached { id: 1 }))
    })
    .expect("player should reach the checkpoint");

    run_until(&mut engine, right(), 120, |s| {
        s.events.iter().any(|e| matches!(e, FeedbackEvent::PlayerDied))
    })
    .expect("player should die in the kill zone");

    let snap = run_until(&mut engine, InputFrame::default(), 120, |s| {
        s.events
            .iter()
            .any(|e| matches!(e, FeedbackEvent::Respawned { .. }))
    })
    .expect("player should respawn");
    assert!(
        (snap.player.position.x - 2.5).abs() < 0.01,
        "respawn should be at the checkpoint, x was {}",
        snap.player.position.x
    );
}

#[test]
fn test_respawn_clears_waves_and_resets_wells() {
    let mut level = base_level(Position::new(0.0, 0.0));
    level.light_wells.push(LightWellDef {
        id: 1,
        position: Position::new(3.0, 1.0),
        radius: 1.5,
        restore_amount: 30.0,
    });
    level.zones.push(ZoneDef {
        id: 1,
        bounds: Bounds::new(Position::new(5.0, 0.0), Position::new(6.0, 1.0)),
        kind: ZoneKind::Kill,
        amount: 0.0,
        apply_once: false,
    });
    let mut engine = started(level);

    run_until(&mut engine, right(), 120, |s| {
        s.events
            .iter()
            .any(|e| matches!(e, FeedbackEvent::PulseStarted { well: 1 }))
    })
    .expect("player should activate the well on the way");

    run_until(&mut engine, right(), 120, |s| {
        s.events.iter().any(|e| matches!(e, FeedbackEvent::PlayerDied))
    })
    .expect("player should die in the kill zone");

    // Pulse waves live for several seconds, but none survive the death.
    let snap = run_until(&mut engine, InputFrame::default(), 120, |s| {
        s.events
            .iter()
            .any(|e| matches!(e, FeedbackEvent::Respawned { .. }))
    })
    .expect("player should respawn");
    assert!(
        snap.waves.is_empty(),
        "waves must not survive a respawn, found {}",
        snap.waves.len()
    );

    // The well is back to dormant: no more pulses without a new touch.
    // (The respawn touchdown still emits its own small landing wave.)
    for _ in 0..90 {
        let snap = engine.tick();
        let pulsed = snap.events.iter().any(|e| {
            matches!(e, FeedbackEvent::WaveEmitted { target_radius, .. } if *target_radius > 10.0)
        });
        assert!(!pulsed, "a reset well must not keep pulsing");
    }
}

#[test]
fn test_checkpoint_pins_enemy_reset_positions() {
    let mut level = base_level(Position::new(0.0, 5.0));
    level.enemies.push(EnemySpawnDef {
        id: 1,
        archetype: EnemyArchetype::Lurker,
        position: Position::new(4.0, 1.0),
    });
    level.zones.push(ZoneDef {
        id: 1,
        bounds: Bounds::new(Position::new(1.0, 0.0), Position::new(2.0, 2.0)),
        kind: ZoneKind::Checkpoint,
        amount: 0.0,
        apply_once: true,
    });
    level.zones.push(ZoneDef {
        id: 2,
        bounds: Bounds::new(Position::new(6.0, 0.0), Position::new(7.0, 1.0)),
        kind: ZoneKind::Kill,
        amount: 0.0,
        apply_once: false,
    });
    let mut engine = started(level);

    // Slam so the wave wakes the enemy, then let it wander off its spawn.
    let slam = InputFrame {
        down_held: true,
        ..Default::default()
    };
    run_until(&mut engine, slam, 240, |s| {
        s.events
            .iter()
            .any(|e| matches!(e, FeedbackEvent::EnemyAlerted { enemy: 1, .. }))
    })
    .expect("slam wave should wake the enemy");
    for _ in 0..30 {
        engine.tick();
    }

    let snap = run_until(&mut engine, right(), 120, |s| {
        s.events
            .iter()
            .any(|e| matches!(e, FeedbackEvent::CheckpointReached { id: 1 }))
    })
    .expect("player should reach the checkpoint");
    let stamped = snap.enemies.iter().find(|e| e.id == 1).unwrap().position;
    assert!(
        (stamped.x - 4.0).abs() > 0.05,
        "enemy should have left its spawn before the checkpoint"
    );

    // The checkpoint pinned the enemy's reset point at its current spot.
    let pinned = engine
        .world()
        .query::<(&ekko_core::components::EnemyMind, &Position)>()
        .iter()
        .next()
        .map(|(_, (mind, _))| mind.checkpoint_position)
        .unwrap();
    assert!((pinned.x - stamped.x).abs() < 1e-9);
    assert!((pinned.y - stamped.y).abs() < 1e-9);

    run_until(&mut engine, right(), 240, |s| {
        s.events.iter().any(|e| matches!(e, FeedbackEvent::PlayerDied))
    })
    .expect("player should die in the kill zone");

    let snap = run_until(&mut engine, InputFrame::default(), 120, |s| {
        s.events
            .iter()
            .any(|e| matches!(e, FeedbackEvent::Respawned { .. }))
    })
    .expect("player should respawn");
    let enemy = snap.enemies.iter().find(|e| e.id == 1).unwrap();
    assert_eq!(enemy.state, EnemyState::Dormant);
    assert!(
        (enemy.position.x - stamped.x).abs() < 1e-9,
        "enemy should reset to its checkpoint-time position {}, was {}",
        stamped.x,
        enemy.position.x
    );
}

#[test]
fn test_damage_zone_applies_once() {
    let mut level = base_level(Position::new(0.0, 0.0));
    level.zones.push(ZoneDef {
        id: 1,
        bounds: Bounds::new(Position::new(2.0, 0.0), Position::new(2.5, 1.0)),
        kind: ZoneKind::Damage,
        amount: 25.0,
        apply_once: true,
    });
    let mut engine = started(level);

    let snap = run_until(&mut engine, right(), 120, |s| {
        s.events
            .iter()
            .any(|e| matches!(e, FeedbackEvent::DamageTaken { .. }))
    })
    .expect("damage zone should fire on entry");
    assert_eq!(snap.player.light, MAX_LIGHT - 25.0);

    // Walk out and back in: a one-shot zone stays quiet.
    run_until(&mut engine, right(), 60, |s| s.player.position.x > 4.0).unwrap();
    let retrigger = run_until(
        &mut engine,
        InputFrame {
            move_x: -1.0,
            ..Default::default()
        },
        120,
        |s| {
            s.events
                .iter()
                .any(|e| matches!(e, FeedbackEvent::DamageTaken { .. }))
        },
    );
    assert!(retrigger.is_none(), "apply_once zone must not re-fire");
}

#[test]
fn test_end_zone_completes_level() {
    let mut level = base_level(Position::new(0.0, 0.0));
    level.zones.push(ZoneDef {
        id: 1,
        bounds: Bounds::new(Position::new(2.0, 0.0), Position::new(3.0, 2.0)),
        kind: ZoneKind::EndLevel,
        amount: 0.0,
        apply_once: true,
    });
    let mut engine = started(level);

    let snap = run_until(&mut engine, right(), 120, |s| {
        s.events.iter().any(|e| matches!(e, FeedbackEvent::LevelComplete))
    })
    .expect("player should reach the exit");
    assert_eq!(snap.phase, GamePhase::LevelComplete);

    let snap = engine.tick();
    assert_eq!(snap.phase, GamePhase::LevelComplete, "phase is terminal");
}

#[test]
fn test_floor_kills_the_player() {
    let mut level = base_level(Position::new(0.0, 0.0));
    level.floor_y = -5.0;
    level.platforms = vec![PlatformDef {
        id: 1,
        bounds: Bounds::new(Position::new(-2.0, -1.0), Position::new(2.0, 0.0)),
        reactive: None,
    }];
    let mut engine = started(level);

    let snap = run_until(&mut engine, right(), 300, |s| {
        s.events.iter().any(|e| matches!(e, FeedbackEvent::PlayerDied))
    });
    assert!(snap.is_some(), "falling past the floor should kill");
}

// ---- Light wells and reactive platforms ----

#[test]
fn test_light_well_restores_and_pulses() {
    let mut level = base_level(Position::new(0.0, 0.0));
    level.zones.push(ZoneDef {
        id: 1,
        bounds: Bounds::new(Position::new(2.0, 0.0), Position::new(2.5, 1.0)),
        kind: ZoneKind::Damage,
        amount: 25.0,
        apply_once: true,
    });
    level.light_wells.push(LightWellDef {
        id: 1,
        position: Position::new(5.0, 1.0),
        radius: 1.5,
        restore_amount: 30.0,
    });
    let mut engine = started(level);

    let snap = run_until(&mut engine, right(), 240, |s| {
        s.events
            .iter()
            .any(|e| matches!(e, FeedbackEvent::PulseStarted { well: 1 }))
    })
    .expect("player should reach the well");

    let restored = snap.events.iter().find_map(|e| match e {
        FeedbackEvent::LightRestored { amount, remaining } => Some((*amount, *remaining)),
        _ => None,
    });
    assert_eq!(restored, Some((25.0, MAX_LIGHT)), "restore clamps at max");

    // First pulse this tick, a stronger one an interval later.
    let first = snap.events.iter().find_map(|e| match e {
        FeedbackEvent::WaveEmitted { target_radius, .. } => Some(*target_radius),
        _ => None,
    });
    assert_eq!(first, Some(PULSE_BASE_RADIUS + PULSE_GROWTH_PER_BEAT));

    let snap = run_until(&mut engine, InputFrame::default(), 90, |s| {
        s.events
            .iter()
            .any(|e| matches!(e, FeedbackEvent::WaveEmitted { .. }))
    })
    .expect("the well should keep pulsing");
    let second = snap.events.iter().find_map(|e| match e {
        FeedbackEvent::WaveEmitted { target_radius, .. } => Some(*target_radius),
        _ => None,
    });
    assert_eq!(second, Some(PULSE_BASE_RADIUS + 2.0 * PULSE_GROWTH_PER_BEAT));
}

#[test]
fn test_reactive_platform_descends_under_slam() {
    let mut level = base_level(Position::new(0.0, 6.0));
    level.platforms.push(PlatformDef {
        id: 2,
        bounds: Bounds::new(Position::new(-1.0, 1.5), Position::new(1.0, 2.0)),
        reactive: Some(ReactiveDef::default()),
    });
    let mut engine = started(level);

    let slam = InputFrame {
        down_held: true,
        ..Default::default()
    };
    run_until(&mut engine, slam, 240, |s| {
        s.events
            .iter()
            .any(|e| matches!(e, FeedbackEvent::PlatformTriggered { platform: 2 }))
    })
    .expect("a slam onto the plate should trigger it");

    let snap = run_until(&mut engine, InputFrame::default(), 60, |s| {
        s.platforms
            .iter()
            .any(|p| p.id == 2 && p.offset >= REACTIVE_DESCEND_DISTANCE)
    })
    .expect("the plate should sink to full depth");
    let plate = snap.platforms.iter().find(|p| p.id == 2).unwrap();
    assert_eq!(plate.motion, PlatformMotion::Depressed);
    assert!(snap.player.grounded, "the player rides the plate down");
}

// ---- Snapshot ----

#[test]
fn test_snapshot_round_trips_through_json() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    engine.queue_command(PlayerCommand::StartLevel);
    for _ in 0..120 {
        tick_with(&mut engine, right());
    }

    let snap = engine.tick();
    let json = serde_json::to_string(&snap).unwrap();
    assert!(json.len() > 100, "snapshot should carry substantial data");

    let parsed: GameStateSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.time.tick, snap.time.tick);
    assert_eq!(parsed.enemies.len(), snap.enemies.len());
    assert_eq!(parsed.revealables.len(), snap.revealables.len());
}
