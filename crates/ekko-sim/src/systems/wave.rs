//! Wave expansion system.
//!
//! Each tick every in-flight wave grows and fades, then scans for hidden
//! scenery to reveal and dormant enemies to wake. A fully faded wave is
//! kept briefly so the frontend can finish its visuals, then despawned by
//! the cleanup system.

use hecs::World;

use ekko_core::components::{Enemy, EnemyMind, SceneryReveal, WaveFront};
use ekko_core::constants::{DT, ENEMY_REVEAL_DURATION};
use ekko_core::enums::RevealPhase;
use ekko_core::events::FeedbackEvent;
use ekko_core::types::{Position, SimTime};
use ekko_enemy_ai::fsm::on_wave_alert;
use ekko_impact::wave::WaveProfile;

/// Spawn a wave entity at the given origin from a derived profile.
pub fn spawn_wave(world: &mut World, origin: Position, profile: &WaveProfile) -> hecs::Entity {
    world.spawn((WaveFront {
        origin,
        radius: profile.start_radius,
        target_radius: profile.target_radius,
        expansion_speed: profile.expansion_speed,
        fade_speed: profile.fade_speed,
        alpha: 1.0,
        reveal_duration: profile.reveal_duration,
        light_enabled: profile.light_enabled,
        faded_at_secs: None,
    },))
}

/// Expand and fade waves, then run the reveal/alert scan.
pub fn run(world: &mut World, time: &SimTime, events: &mut Vec<FeedbackEvent>) {
    // (origin, reach, reveal_duration) of every wave still visible.
    let mut active: Vec<(Position, f64, f64)> = Vec::new();

    for (_entity, wave) in world.query_mut::<&mut WaveFront>() {
        if wave.alpha <= 0.0 {
            continue;
        }

        wave.radius += wave.expansion_speed * DT;
        wave.alpha = (wave.alpha - wave.fade_speed * DT).max(0.0);
        if wave.alpha <= 0.0 {
            wave.faded_at_secs = Some(time.elapsed_secs);
            continue;
        }

        active.push((wave.origin, wave.radius, wave.reveal_duration));
    }

    if active.is_empty() {
        return;
    }

    for (_entity, scenery) in world.query_mut::<&mut SceneryReveal>() {
        for (origin, reach, reveal_duration) in &active {
            if origin.distance_to(&scenery.position) > reach + scenery.radius {
                continue;
            }
            match scenery.phase {
                RevealPhase::Hidden => {
                    scenery.phase = RevealPhase::FadingIn;
                    scenery.hold_remaining = *reveal_duration;
                    events.push(FeedbackEvent::SceneryRevealed { id: scenery.id });
                }
                RevealPhase::FadingOut => {
                    scenery.phase = RevealPhase::FadingIn;
                    scenery.hold_remaining = *reveal_duration;
                }
                RevealPhase::FadingIn | RevealPhase::Visible => {
                    // A second wave extends the hold, never shortens it.
                    scenery.hold_remaining = scenery.hold_remaining.max(*reveal_duration);
                }
            }
        }
    }

    for (_entity, (_enemy, mind, pos)) in
        world.query_mut::<(&Enemy, &mut EnemyMind, &Position)>()
    {
        for (origin, reach, _) in &active {
            if origin.distance_to(pos) > *reach {
                continue;
            }
            if let Some(new_state) = on_wave_alert(mind.state) {
                mind.state = new_state;
                mind.state_start_tick = time.tick;
                mind.alert_position = Some(*origin);
                mind.revealed_until_secs = time.elapsed_secs + ENEMY_REVEAL_DURATION;
                events.push(FeedbackEvent::EnemyAlerted {
                    enemy: mind.id,
                    source: *origin,
                });
            }
        }
    }
}
