//! Landing classification.
//!
//! Classifies a touchdown as Normal, Slam, or Cushioned from the jump
//! controller state at the moment of contact, and scales the impact force
//! into the effective force handed to the wave emitter.

use ekko_core::components::JumpController;
use ekko_core::enums::LandingKind;

use crate::tuning::LandingTuning;

/// A classified touchdown.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LandingOutcome {
    pub kind: LandingKind,
    /// Raw |impact velocity|.
    pub impact_force: f64,
    /// Force after the kind multiplier, used for wave emission.
    pub effective_force: f64,
    /// Slam, or any landing at or above the heavy threshold.
    pub heavy: bool,
}

/// Classify a touchdown. Ascending contacts (impact velocity > 0) are not
/// landings and return None.
///
/// Slam wins over cushion. A cushioned landing requires a control-fall
/// press within the timing window of touchdown; the press usually also
/// fired the mid-air damp, which is what made the touchdown soft.
pub fn classify(
    ctrl: &JumpController,
    impact_velocity: f64,
    touchdown_secs: f64,
    tuning: &LandingTuning,
) -> Option<LandingOutcome> {
    if impact_velocity > 0.0 {
        return None;
    }

    let impact_force = impact_velocity.abs();

    let cushion_timing_ok = matches!(
        ctrl.last_cushion_input_secs,
        Some(pressed_at) if touchdown_secs - pressed_at <= tuning.cushion_timing_window
    );

    let (kind, effective_force) = if ctrl.slam_held {
        (LandingKind::Slam, impact_force * tuning.slam_wave_multiplier)
    } else if cushion_timing_ok {
        (
            LandingKind::Cushioned,
            impact_force * tuning.cushion_wave_multiplier,
        )
    } else {
        (LandingKind::Normal, impact_force)
    };

    Some(LandingOutcome {
        kind,
        impact_force,
        effective_force,
        heavy: is_heavy_impact(impact_force, kind, tuning.heavy_impact_force),
    })
}

/// Whether an impact shakes the world: any slam, or force past the threshold.
pub fn is_heavy_impact(force: f64, kind: LandingKind, threshold: f64) -> bool {
    kind == LandingKind::Slam || force >= threshold
}
