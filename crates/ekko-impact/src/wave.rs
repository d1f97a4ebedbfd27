//! Wave emission curves.
//!
//! Maps an effective landing force onto the expansion, fade, reveal, and
//! light parameters of one wave. The radius curve is an inverse-lerp of the
//! clamped force shaped by a power exponent, so soft touchdowns stay small
//! while slams grow disproportionately.

use ekko_core::constants::{PULSE_BASE_FORCE, PULSE_BASE_RADIUS, PULSE_GROWTH_PER_BEAT};
use ekko_core::types::{inverse_lerp, lerp};

use crate::tuning::WaveTuning;

/// Everything a spawned wave needs, derived once from the landing force.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveProfile {
    pub target_radius: f64,
    pub start_radius: f64,
    pub expansion_speed: f64,
    pub fade_speed: f64,
    /// Hold duration handed to scenery this wave reveals.
    pub reveal_duration: f64,
    pub light_enabled: bool,
}

impl WaveProfile {
    /// Derive a wave from an effective landing force.
    pub fn from_impact(force: f64, tuning: &WaveTuning) -> Self {
        let target_radius = target_radius(force, tuning);
        Self::from_impact_with_radius(force, target_radius, tuning)
    }

    /// Derive a wave with an explicitly assigned target radius
    /// (reveal pulses bypass the force→radius curve).
    pub fn from_impact_with_radius(force: f64, target_radius: f64, tuning: &WaveTuning) -> Self {
        let t = inverse_lerp(
            tuning.min_force,
            tuning.max_force,
            force.clamp(tuning.min_force, tuning.max_force),
        );

        let fade_speed =
            tuning.base_fade_speed / (1.0 + force * tuning.fade_speed_force_scale);
        let fade_duration = 1.0 / fade_speed;

        let start_radius = target_radius * tuning.start_radius_ratio;
        // The visible front covers half the target diameter over one fade.
        let expansion_speed = (target_radius / 2.0 - start_radius) / fade_duration;

        Self {
            target_radius,
            start_radius,
            expansion_speed,
            fade_speed,
            reveal_duration: lerp(tuning.reveal_duration_min, tuning.reveal_duration_max, t),
            light_enabled: force >= tuning.light_force_threshold,
        }
    }
}

/// Ring light intensity at the given alpha; dark waves carry no light.
pub fn light_intensity(light_enabled: bool, alpha: f64, tuning: &WaveTuning) -> f64 {
    if light_enabled {
        lerp(
            tuning.light_intensity_factor * tuning.intensity_min_ratio,
            tuning.light_intensity_factor,
            alpha,
        )
    } else {
        0.0
    }
}

/// Force → target radius: clamp, normalize, shape, scale.
pub fn target_radius(force: f64, tuning: &WaveTuning) -> f64 {
    let clamped = force.clamp(tuning.min_force, tuning.max_force);
    let t = inverse_lerp(tuning.min_force, tuning.max_force, clamped)
        .powf(tuning.range_power_curve);
    lerp(tuning.min_radius, tuning.max_radius, t) * tuning.range_multiplier
}

/// Force of the n-th reveal pulse (1-based) from a light well.
pub fn pulse_force(pulse_number: u32) -> f64 {
    PULSE_BASE_FORCE + f64::from(pulse_number) * PULSE_GROWTH_PER_BEAT
}

/// Target radius of the n-th reveal pulse (1-based).
pub fn pulse_radius(pulse_number: u32) -> f64 {
    PULSE_BASE_RADIUS + f64::from(pulse_number) * PULSE_GROWTH_PER_BEAT
}
