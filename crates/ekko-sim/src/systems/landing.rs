//! Landing system: classifies touchdowns, emits impact waves, and
//! triggers reactive platforms.

use hecs::World;

use ekko_core::components::{JumpController, LastLanding, Player, ReactivePlatform};
use ekko_core::enums::PlatformMotion;
use ekko_core::events::FeedbackEvent;
use ekko_core::types::{Position, SimTime};
use ekko_impact::jump;
use ekko_impact::landing::{classify, LandingOutcome};
use ekko_impact::tuning::{LandingTuning, WaveTuning};
use ekko_impact::wave::WaveProfile;

use crate::systems::movement::Touchdown;
use crate::systems::wave::spawn_wave;

/// Classify this tick's touchdown (if any) and emit its wave.
pub fn run(
    world: &mut World,
    touchdown: Option<Touchdown>,
    time: &SimTime,
    landing_tuning: &LandingTuning,
    wave_tuning: &WaveTuning,
    events: &mut Vec<FeedbackEvent>,
) {
    let Some(td) = touchdown else {
        return;
    };

    let mut classified: Option<(LandingOutcome, Position)> = None;

    for (_entity, (_player, ctrl, last, pos)) in world.query_mut::<(
        &Player,
        &mut JumpController,
        &mut LastLanding,
        &Position,
    )>() {
        let Some(outcome) = classify(ctrl, td.impact_velocity, time.elapsed_secs, landing_tuning)
        else {
            continue;
        };

        *last = LastLanding {
            impact_force: outcome.impact_force,
            kind: outcome.kind,
            tick: time.tick,
        };
        jump::reset_after_landing(ctrl);
        classified = Some((outcome, *pos));
    }

    let Some((outcome, origin)) = classified else {
        return;
    };

    events.push(FeedbackEvent::Landed {
        kind: outcome.kind,
        impact_force: outcome.impact_force,
        heavy: outcome.heavy,
    });

    let profile = WaveProfile::from_impact(outcome.effective_force, wave_tuning);
    spawn_wave(world, origin, &profile);
    events.push(FeedbackEvent::WaveEmitted {
        origin,
        target_radius: profile.target_radius,
    });

    // A hard enough landing sets the platform under the feet sinking.
    for (_entity, rp) in world.query_mut::<&mut ReactivePlatform>() {
        if rp.platform_id == td.platform_id
            && rp.motion == PlatformMotion::Idle
            && outcome.effective_force >= rp.impact_threshold
        {
            rp.motion = PlatformMotion::Descending;
            events.push(FeedbackEvent::PlatformTriggered {
                platform: rp.platform_id,
            });
        }
    }
}
