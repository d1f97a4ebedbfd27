//! Entity spawn factories for setting up the simulation world.
//!
//! Builds the player, enemies, scenery, light wells, trigger zones,
//! and reactive platform state from a level definition.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use ekko_core::components::*;
use ekko_core::constants::MAX_LIGHT;
use ekko_core::enums::PlatformMotion;
use ekko_core::types::{Position, Velocity};
use ekko_level::level::LevelDef;

/// Small hidden motes scattered around the level on top of the authored
/// scenery, so even quiet corners answer a strong wave.
const AMBIENT_SCENERY_COUNT: usize = 6;
const AMBIENT_SCENERY_RADIUS: f64 = 0.6;

/// Id offset separating scattered motes from authored scenery.
const AMBIENT_SCENERY_ID_BASE: u32 = 1000;

/// Set up the initial world for a level.
pub fn setup_level(world: &mut World, level: &LevelDef) {
    spawn_player(world, level.spawn);

    for def in &level.enemies {
        world.spawn((
            Enemy,
            def.position,
            Velocity::default(),
            EnemyMind {
                id: def.id,
                archetype: def.archetype,
                state: Default::default(),
                state_start_tick: 0,
                alert_position: None,
                checkpoint_position: def.position,
                revealed_until_secs: 0.0,
                player_hit: false,
            },
        ));
    }

    for def in &level.revealables {
        world.spawn((SceneryReveal {
            id: def.id,
            position: def.position,
            radius: def.radius,
            phase: Default::default(),
            alpha: 0.0,
            hold_remaining: 0.0,
        },));
    }

    for def in &level.light_wells {
        world.spawn((LightWellState {
            id: def.id,
            position: def.position,
            radius: def.radius,
            restore_amount: def.restore_amount,
            active: false,
            pulses_emitted: 0,
            next_pulse_tick: 0,
        },));
    }

    for def in &level.zones {
        world.spawn((TriggerZone {
            id: def.id,
            bounds: def.bounds,
            kind: def.kind,
            amount: def.amount,
            apply_once: def.apply_once,
            triggered: false,
            occupied: false,
        },));
    }

    for platform in &level.platforms {
        if let Some(reactive) = &platform.reactive {
            world.spawn((ReactivePlatform {
                platform_id: platform.id,
                impact_threshold: reactive.impact_threshold,
                descend_distance: reactive.descend_distance,
                descend_duration: reactive.descend_duration,
                offset: 0.0,
                motion: PlatformMotion::Idle,
            },));
        }
    }
}

/// Spawn the player at the given position with full light.
pub fn spawn_player(world: &mut World, position: Position) -> hecs::Entity {
    world.spawn((
        Player,
        position,
        Velocity::default(),
        JumpController::default(),
        GroundContact::default(),
        ControlIntent::default(),
        LightHealth::full(MAX_LIGHT),
        LastLanding::default(),
    ))
}

/// Scatter extra hidden motes above random platform spans.
pub fn scatter_ambient_scenery(world: &mut World, rng: &mut ChaCha8Rng, level: &LevelDef) {
    if level.platforms.is_empty() {
        return;
    }

    for i in 0..AMBIENT_SCENERY_COUNT {
        let platform = &level.platforms[rng.gen_range(0..level.platforms.len())];
        let x = rng.gen_range(platform.bounds.min.x..=platform.bounds.max.x);
        let y = platform.bounds.max.y + rng.gen_range(0.5..2.5);

        world.spawn((SceneryReveal {
            id: AMBIENT_SCENERY_ID_BASE + i as u32,
            position: Position::new(x, y),
            radius: AMBIENT_SCENERY_RADIUS,
            phase: Default::default(),
            alpha: 0.0,
            hold_remaining: 0.0,
        },));
    }
}
