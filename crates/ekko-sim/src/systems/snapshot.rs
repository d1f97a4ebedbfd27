//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! This system is read-only — it never modifies the world.

use hecs::World;

use ekko_core::components::*;
use ekko_core::constants::*;
use ekko_core::enums::GamePhase;
use ekko_core::events::FeedbackEvent;
use ekko_core::state::*;
use ekko_core::types::{lerp, Position, SimTime, Velocity};
use ekko_impact::tuning::WaveTuning;
use ekko_impact::wave::light_intensity;

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    wave_tuning: &WaveTuning,
    events: Vec<FeedbackEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase,
        player: build_player(world, time),
        waves: build_waves(world, wave_tuning),
        enemies: build_enemies(world, time),
        revealables: build_revealables(world),
        platforms: build_platforms(world),
        events,
    }
}

/// Build the PlayerView, deriving the light halo from the light ratio.
fn build_player(world: &World, time: &SimTime) -> PlayerView {
    world
        .query::<(
            &Player,
            &Position,
            &Velocity,
            &GroundContact,
            &ControlIntent,
            &LightHealth,
            &LastLanding,
        )>()
        .iter()
        .next()
        .map(|(_, (_, pos, vel, contact, intent, light, last))| {
            let ratio = light.ratio();
            let light_low = light.current <= LOW_LIGHT_THRESHOLD;
            let pulse_speed = if light_low {
                PLAYER_LIGHT_PULSE_SPEED_CRITICAL
            } else {
                PLAYER_LIGHT_PULSE_SPEED
            };
            let pulse =
                PLAYER_LIGHT_PULSE_AMPLITUDE * (time.elapsed_secs * pulse_speed).sin();

            PlayerView {
                position: *pos,
                velocity: *vel,
                grounded: contact.grounded,
                facing_right: intent.facing_right,
                last_landing: (last.tick > 0).then(|| LandingView {
                    kind: last.kind,
                    impact_force: last.impact_force,
                    tick: last.tick,
                }),
                light: light.current,
                max_light: light.max,
                light_low,
                light_radius: lerp(PLAYER_LIGHT_MIN_RADIUS, PLAYER_LIGHT_MAX_RADIUS, ratio),
                light_intensity: lerp(
                    PLAYER_LIGHT_MIN_INTENSITY,
                    PLAYER_LIGHT_MAX_INTENSITY,
                    ratio,
                ) + pulse,
            }
        })
        .unwrap_or_default()
}

/// Build WaveView list from all in-flight waves.
fn build_waves(world: &World, wave_tuning: &WaveTuning) -> Vec<WaveView> {
    world
        .query::<&WaveFront>()
        .iter()
        .map(|(_, wave)| WaveView {
            origin: wave.origin,
            radius: wave.radius,
            target_radius: wave.target_radius,
            alpha: wave.alpha,
            light_enabled: wave.light_enabled,
            light_intensity: light_intensity(wave.light_enabled, wave.alpha, wave_tuning),
        })
        .collect()
}

/// Build EnemyView list, sorted by id.
fn build_enemies(world: &World, time: &SimTime) -> Vec<EnemyView> {
    let mut enemies: Vec<EnemyView> = world
        .query::<(&Enemy, &EnemyMind, &Position)>()
        .iter()
        .map(|(_, (_, mind, pos))| EnemyView {
            id: mind.id,
            archetype: mind.archetype,
            position: *pos,
            state: mind.state,
            revealed: mind.revealed_until_secs > time.elapsed_secs,
        })
        .collect();

    enemies.sort_by_key(|e| e.id);
    enemies
}

/// Build RevealableView list, sorted by id.
fn build_revealables(world: &World) -> Vec<RevealableView> {
    let mut revealables: Vec<RevealableView> = world
        .query::<&SceneryReveal>()
        .iter()
        .map(|(_, scenery)| RevealableView {
            id: scenery.id,
            position: scenery.position,
            phase: scenery.phase,
            alpha: scenery.alpha,
        })
        .collect();

    revealables.sort_by_key(|r| r.id);
    revealables
}

/// Build PlatformView list (reactive platforms only), sorted by id.
fn build_platforms(world: &World) -> Vec<PlatformView> {
    let mut platforms: Vec<PlatformView> = world
        .query::<&ReactivePlatform>()
        .iter()
        .map(|(_, rp)| PlatformView {
            id: rp.platform_id,
            offset: rp.offset,
            motion: rp.motion,
        })
        .collect();

    platforms.sort_by_key(|p| p.id);
    platforms
}
