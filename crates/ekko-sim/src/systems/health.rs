//! Light bookkeeping: the low-light warning, death, and the respawn cycle.
//!
//! Damage is applied at its source (enemies, zones); this system watches
//! the resulting totals. On death it starts the respawn countdown, and on
//! respawn it resets the player at the active checkpoint and sends every
//! enemy back to its home position.

use hecs::World;

use ekko_core::components::{
    Enemy, EnemyMind, GroundContact, JumpController, LightHealth, LightWellState, Player,
    WaveFront,
};
use ekko_core::constants::{DT, LOW_LIGHT_THRESHOLD, RESPAWN_DELAY};
use ekko_core::enums::EnemyState;
use ekko_core::events::FeedbackEvent;
use ekko_core::types::{Position, Velocity};

/// Run light bookkeeping for one tick.
pub fn run(
    world: &mut World,
    respawn_timer: &mut Option<f64>,
    respawn_point: Position,
    events: &mut Vec<FeedbackEvent>,
) {
    let mut respawned = false;

    for (_entity, (_player, light, pos, vel, ctrl, contact)) in world.query_mut::<(
        &Player,
        &mut LightHealth,
        &mut Position,
        &mut Velocity,
        &mut JumpController,
        &mut GroundContact,
    )>() {
        if light.is_dead() {
            match respawn_timer {
                None => {
                    *vel = Velocity::default();
                    *respawn_timer = Some(RESPAWN_DELAY);
                    events.push(FeedbackEvent::PlayerDied);
                }
                Some(remaining) => {
                    *remaining -= DT;
                    if *remaining <= 0.0 {
                        *respawn_timer = None;
                        *pos = respawn_point;
                        *vel = Velocity::default();
                        *ctrl = JumpController::default();
                        *contact = GroundContact::default();
                        *light = LightHealth::full(light.max);
                        events.push(FeedbackEvent::Respawned {
                            position: respawn_point,
                        });
                        respawned = true;
                    }
                }
            }
            continue;
        }

        if light.current <= LOW_LIGHT_THRESHOLD {
            if !light.low_announced {
                light.low_announced = true;
                events.push(FeedbackEvent::LowLight {
                    remaining: light.current,
                });
            }
        } else {
            light.low_announced = false;
        }
    }

    if respawned {
        for (_entity, (_enemy, mind, pos, vel)) in
            world.query_mut::<(&Enemy, &mut EnemyMind, &mut Position, &mut Velocity)>()
        {
            *pos = mind.checkpoint_position;
            *vel = Velocity::default();
            mind.state = EnemyState::Dormant;
            mind.alert_position = None;
            mind.player_hit = false;
            mind.revealed_until_secs = 0.0;
        }

        // In-flight waves die with the player, or they would re-alert the
        // enemies just sent back to their checkpoints.
        let waves: Vec<hecs::Entity> = world
            .query_mut::<&WaveFront>()
            .into_iter()
            .map(|(entity, _)| entity)
            .collect();
        for entity in waves {
            let _ = world.despawn(entity);
        }

        for (_entity, well) in world.query_mut::<&mut LightWellState>() {
            well.active = false;
            well.pulses_emitted = 0;
            well.next_pulse_tick = 0;
        }
    }
}
