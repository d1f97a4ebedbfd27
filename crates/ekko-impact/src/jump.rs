//! Jump timer state machine.
//!
//! Operates on the `JumpController` component: coyote time, jump buffering,
//! jump firing and early cut, slam latching, and the one-shot cushion damp.
//! All functions are pure over their inputs; the caller applies velocity
//! changes to the physics state.

use ekko_core::commands::InputFrame;
use ekko_core::components::JumpController;

use crate::tuning::JumpTuning;

/// Velocity adjustment requested by the fall controller for one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FallAdjustment {
    /// No change.
    None,
    /// Add this (negative) delta to the vertical velocity.
    SlamBoost(f64),
    /// Replace the vertical velocity with this damped value.
    CushionDamp(f64),
}

/// Decay and reload the coyote/buffer timers.
///
/// A jump press reloads the buffer; a grounded tick reloads coyote time.
pub fn tick_timers(
    ctrl: &mut JumpController,
    grounded: bool,
    jump_pressed: bool,
    dt: f64,
    tuning: &JumpTuning,
) {
    ctrl.buffer_remaining = (ctrl.buffer_remaining - dt).max(0.0);
    if jump_pressed {
        ctrl.buffer_remaining = tuning.jump_buffer_time;
    }

    ctrl.coyote_remaining = (ctrl.coyote_remaining - dt).max(0.0);
    if grounded {
        ctrl.coyote_remaining = tuning.coyote_time;
    }
}

/// Record contextual inputs: cushion presses and the slam latch.
///
/// A control-fall press is only accepted while the cushion is unspent;
/// holding down while airborne latches the slam until touchdown.
pub fn note_control_inputs(
    ctrl: &mut JumpController,
    frame: &InputFrame,
    grounded: bool,
    elapsed_secs: f64,
) {
    if frame.control_fall_pressed && !ctrl.cushion_spent {
        ctrl.last_cushion_input_secs = Some(elapsed_secs);
    }

    if frame.down_held && !grounded {
        ctrl.slam_held = true;
    }
}

/// Whether a jump should fire this tick.
pub fn should_jump(ctrl: &JumpController) -> bool {
    ctrl.buffer_remaining > 0.0 && ctrl.coyote_remaining > 0.0
}

/// Fire the jump: consume both timers, re-arm the cushion, and return the
/// new vertical velocity.
pub fn fire_jump(ctrl: &mut JumpController, tuning: &JumpTuning) -> f64 {
    ctrl.buffer_remaining = 0.0;
    ctrl.coyote_remaining = 0.0;
    ctrl.is_jumping = true;
    ctrl.cushion_spent = false;
    ctrl.last_cushion_input_secs = None;
    tuning.jump_force
}

/// Cut the jump short on an early release. Returns the reduced vertical
/// velocity if the player was still ascending.
pub fn cut_jump(ctrl: &mut JumpController, vertical_velocity: f64, tuning: &JumpTuning) -> Option<f64> {
    if !ctrl.is_jumping {
        return None;
    }
    ctrl.is_jumping = false;

    if vertical_velocity > 0.0 {
        Some(vertical_velocity * tuning.jump_cut_factor)
    } else {
        None
    }
}

/// Compute the fall adjustment for one tick.
///
/// Slam takes priority; otherwise an unspent cushion input inside the
/// controlled-fall window damps a descending velocity exactly once.
pub fn fall_adjustment(
    ctrl: &mut JumpController,
    vertical_velocity: f64,
    elapsed_secs: f64,
    dt: f64,
    tuning: &JumpTuning,
) -> FallAdjustment {
    if ctrl.slam_held {
        return FallAdjustment::SlamBoost(tuning.gravity * tuning.slam_fall_acceleration * dt);
    }

    if ctrl.cushion_spent || vertical_velocity >= 0.0 {
        return FallAdjustment::None;
    }

    match ctrl.last_cushion_input_secs {
        Some(pressed_at) if elapsed_secs - pressed_at <= tuning.controlled_fall_window => {
            ctrl.cushion_spent = true;
            FallAdjustment::CushionDamp(vertical_velocity * tuning.cushion_fall_damping)
        }
        _ => FallAdjustment::None,
    }
}

/// Clear the per-airtime latches after touchdown has been classified.
/// The cushion damp is one-shot per airtime, so touchdown re-arms it.
pub fn reset_after_landing(ctrl: &mut JumpController) {
    ctrl.slam_held = false;
    ctrl.is_jumping = false;
    ctrl.cushion_spent = false;
    ctrl.last_cushion_input_secs = None;
}
