//! Player input system.
//!
//! Applies the current input frame to the control intent and drives the
//! jump state machine: timer reload, buffered/coyote firing, and early cut.

use hecs::World;

use ekko_core::commands::InputFrame;
use ekko_core::components::{ControlIntent, GroundContact, JumpController, LightHealth, Player};
use ekko_core::constants::DT;
use ekko_core::types::{SimTime, Velocity};
use ekko_impact::jump;
use ekko_impact::tuning::JumpTuning;

/// Run the input system for the player entity.
pub fn run(world: &mut World, frame: &InputFrame, time: &SimTime, tuning: &JumpTuning) {
    for (_entity, (_player, intent, ctrl, contact, vel, light)) in world.query_mut::<(
        &Player,
        &mut ControlIntent,
        &mut JumpController,
        &GroundContact,
        &mut Velocity,
        &LightHealth,
    )>() {
        if light.is_dead() {
            intent.move_x = 0.0;
            continue;
        }

        intent.move_x = frame.move_x.clamp(-1.0, 1.0);
        if intent.move_x != 0.0 {
            intent.facing_right = intent.move_x > 0.0;
        }

        jump::tick_timers(ctrl, contact.grounded, frame.jump_pressed, DT, tuning);
        jump::note_control_inputs(ctrl, frame, contact.grounded, time.elapsed_secs);

        if jump::should_jump(ctrl) {
            vel.y = jump::fire_jump(ctrl, tuning);
        }

        if frame.jump_released {
            if let Some(cut) = jump::cut_jump(ctrl, vel.y, tuning) {
                vel.y = cut;
            }
        }
    }
}
