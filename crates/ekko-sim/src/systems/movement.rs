//! Player kinematics: horizontal drive, gravity, fall shaping, and the
//! ground resolve against one-way platform tops.
//!
//! Touchdowns are reported back to the engine so the landing system can
//! classify them on the same tick.

use hecs::World;

use ekko_core::components::{
    ControlIntent, GroundContact, JumpController, LightHealth, Player, ReactivePlatform,
};
use ekko_core::constants::{DT, GRAVITY, MOVE_SPEED};
use ekko_core::types::{Position, SimTime, Velocity};
use ekko_impact::jump::{self, FallAdjustment};
use ekko_impact::tuning::JumpTuning;
use ekko_level::geometry::{ground_hit, standing_platform};
use ekko_level::level::LevelDef;

/// Player collision half-width.
pub const PLAYER_HALF_WIDTH: f64 = 0.4;

/// A touchdown detected by the ground resolve this tick.
#[derive(Debug, Clone, Copy)]
pub struct Touchdown {
    /// Vertical velocity at the moment of contact (negative).
    pub impact_velocity: f64,
    /// Platform the feet landed on.
    pub platform_id: u32,
}

/// Integrate player motion and resolve ground contact.
pub fn run(
    world: &mut World,
    level: &LevelDef,
    time: &SimTime,
    tuning: &JumpTuning,
) -> Option<Touchdown> {
    // Current reactive offsets, so probes see sunken platform tops.
    let offsets: Vec<(u32, f64)> = world
        .query_mut::<&ReactivePlatform>()
        .into_iter()
        .map(|(_, rp)| (rp.platform_id, rp.offset))
        .collect();
    let offset_of = |id: u32| {
        offsets
            .iter()
            .find(|(pid, _)| *pid == id)
            .map_or(0.0, |(_, off)| *off)
    };

    let mut touchdown = None;

    for (_entity, (_player, pos, vel, intent, contact, ctrl, light)) in world.query_mut::<(
        &Player,
        &mut Position,
        &mut Velocity,
        &ControlIntent,
        &mut GroundContact,
        &mut JumpController,
        &LightHealth,
    )>() {
        if light.is_dead() {
            *vel = Velocity::default();
            continue;
        }

        contact.was_grounded = contact.grounded;
        vel.x = intent.move_x * MOVE_SPEED;

        if vel.y > 0.0 {
            // A fired jump breaks ground contact immediately.
            contact.grounded = false;
            contact.platform = None;
        }

        if !contact.grounded {
            vel.y += GRAVITY * DT;
            match jump::fall_adjustment(ctrl, vel.y, time.elapsed_secs, DT, tuning) {
                FallAdjustment::None => {}
                FallAdjustment::SlamBoost(delta) => vel.y += delta,
                FallAdjustment::CushionDamp(damped) => vel.y = damped,
            }
        }

        let prev = *pos;
        pos.x += vel.x * DT;
        pos.y += vel.y * DT;

        if contact.grounded {
            // Walking: stay attached to the current platform (which may be
            // sinking under the feet), or start coyote time the moment the
            // feet leave its span.
            let still_on = contact.platform.and_then(|id| {
                let platform = level.platform(id)?;
                let over = pos.x + PLAYER_HALF_WIDTH >= platform.bounds.min.x
                    && pos.x - PLAYER_HALF_WIDTH <= platform.bounds.max.x;
                over.then(|| (id, platform.bounds.max.y - offset_of(id)))
            });
            match still_on.or_else(|| {
                standing_platform(level, pos, PLAYER_HALF_WIDTH, &offset_of).and_then(|id| {
                    let platform = level.platform(id)?;
                    Some((id, platform.bounds.max.y - offset_of(id)))
                })
            }) {
                Some((id, top)) => {
                    pos.y = top;
                    contact.platform = Some(id);
                }
                None => {
                    contact.grounded = false;
                    contact.platform = None;
                }
            }
        } else if vel.y < 0.0 {
            if let Some(hit) = ground_hit(level, &prev, pos, PLAYER_HALF_WIDTH, &offset_of) {
                pos.y = hit.surface_y;
                if !contact.was_grounded {
                    touchdown = Some(Touchdown {
                        impact_velocity: vel.y,
                        platform_id: hit.platform_id,
                    });
                }
                vel.y = 0.0;
                contact.grounded = true;
                contact.platform = Some(hit.platform_id);
            }
        }
    }

    touchdown
}
