//! Light well system.
//!
//! A well activates on first player contact: it restores light once, then
//! emits a reveal pulse every interval, each pulse stronger and wider than
//! the last. Pulses are ordinary waves with an assigned radius, so the
//! reveal scan and enemy alerting treat them like any landing wave.

use hecs::World;

use ekko_core::components::{LightHealth, LightWellState, Player};
use ekko_core::constants::PULSE_INTERVAL_TICKS;
use ekko_core::events::FeedbackEvent;
use ekko_core::types::{Position, SimTime};
use ekko_impact::tuning::WaveTuning;
use ekko_impact::wave::{pulse_force, pulse_radius, WaveProfile};

use crate::systems::wave::spawn_wave;

/// Run light well activation and pulse emission.
pub fn run(
    world: &mut World,
    time: &SimTime,
    wave_tuning: &WaveTuning,
    events: &mut Vec<FeedbackEvent>,
) {
    let player: Option<(hecs::Entity, Position)> = world
        .query::<(&Player, &Position, &LightHealth)>()
        .iter()
        .next()
        .filter(|(_, (_, _, light))| !light.is_dead())
        .map(|(entity, (_, pos, _))| (entity, *pos));

    let mut restore: Option<f64> = None;
    let mut pending_waves: Vec<(Position, WaveProfile)> = Vec::new();

    for (_entity, well) in world.query_mut::<&mut LightWellState>() {
        if !well.active {
            let touched = player
                .map(|(_, pos)| well.position.distance_to(&pos) <= well.radius)
                .unwrap_or(false);
            if touched {
                well.active = true;
                well.pulses_emitted = 0;
                well.next_pulse_tick = time.tick;
                restore = Some(restore.unwrap_or(0.0) + well.restore_amount);
                events.push(FeedbackEvent::PulseStarted { well: well.id });
            } else {
                continue;
            }
        }

        if time.tick >= well.next_pulse_tick {
            well.pulses_emitted += 1;
            well.next_pulse_tick = time.tick + PULSE_INTERVAL_TICKS;

            let force = pulse_force(well.pulses_emitted);
            let radius = pulse_radius(well.pulses_emitted);
            let profile = WaveProfile::from_impact_with_radius(force, radius, wave_tuning);
            pending_waves.push((well.position, profile));
        }
    }

    if let (Some(amount), Some((player_entity, _))) = (restore, player) {
        if let Ok(mut light) = world.get::<&mut LightHealth>(player_entity) {
            let gained = amount.min(light.max - light.current);
            if gained > 0.0 {
                light.current += gained;
                events.push(FeedbackEvent::LightRestored {
                    amount: gained,
                    remaining: light.current,
                });
            }
        }
    }

    for (origin, profile) in pending_waves {
        spawn_wave(world, origin, &profile);
        events.push(FeedbackEvent::WaveEmitted {
            origin,
            target_radius: profile.target_radius,
        });
    }
}
