//! Cleanup system: removes spent waves and out-of-bounds entities.

use hecs::{Entity, World};

use ekko_core::components::{Enemy, WaveFront};
use ekko_core::constants::{WAVE_DESPAWN_DELAY, WORLD_RADIUS};
use ekko_core::types::{Position, SimTime};

/// Remove waves past their despawn delay and enemies beyond the world
/// boundary. Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(world: &mut World, time: &SimTime, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, wave) in world.query_mut::<&WaveFront>() {
        if let Some(faded_at) = wave.faded_at_secs {
            if time.elapsed_secs - faded_at >= WAVE_DESPAWN_DELAY {
                despawn_buffer.push(entity);
            }
        }
    }

    let radius_sq = WORLD_RADIUS * WORLD_RADIUS;
    for (entity, (pos, _enemy)) in world.query_mut::<(&Position, &Enemy)>() {
        if pos.x * pos.x + pos.y * pos.y > radius_sq {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
