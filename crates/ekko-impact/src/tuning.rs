//! Tuning parameter bundles.
//!
//! Defaults mirror the constants in ekko-core; the structs exist so tests
//! and alternate game feels can vary parameters without touching globals.

use serde::{Deserialize, Serialize};

use ekko_core::constants::*;

/// Jump feel parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JumpTuning {
    pub jump_force: f64,
    pub coyote_time: f64,
    pub jump_buffer_time: f64,
    pub jump_cut_factor: f64,
    pub controlled_fall_window: f64,
    pub slam_fall_acceleration: f64,
    pub cushion_fall_damping: f64,
    pub gravity: f64,
}

impl Default for JumpTuning {
    fn default() -> Self {
        Self {
            jump_force: JUMP_FORCE,
            coyote_time: COYOTE_TIME,
            jump_buffer_time: JUMP_BUFFER_TIME,
            jump_cut_factor: JUMP_CUT_FACTOR,
            controlled_fall_window: CONTROLLED_FALL_WINDOW,
            slam_fall_acceleration: SLAM_FALL_ACCELERATION,
            cushion_fall_damping: CUSHION_FALL_DAMPING,
            gravity: GRAVITY,
        }
    }
}

/// Landing classification parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LandingTuning {
    pub cushion_timing_window: f64,
    pub slam_wave_multiplier: f64,
    pub cushion_wave_multiplier: f64,
    pub heavy_impact_force: f64,
}

impl Default for LandingTuning {
    fn default() -> Self {
        Self {
            cushion_timing_window: CUSHION_TIMING_WINDOW,
            slam_wave_multiplier: SLAM_WAVE_MULTIPLIER,
            cushion_wave_multiplier: CUSHION_WAVE_MULTIPLIER,
            heavy_impact_force: HEAVY_IMPACT_FORCE,
        }
    }
}

/// Wave emission and expansion parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaveTuning {
    pub min_force: f64,
    pub max_force: f64,
    pub min_radius: f64,
    pub max_radius: f64,
    pub range_power_curve: f64,
    /// Global radius scale (temporary bonuses and the like).
    pub range_multiplier: f64,
    pub base_fade_speed: f64,
    pub fade_speed_force_scale: f64,
    pub start_radius_ratio: f64,
    pub reveal_duration_min: f64,
    pub reveal_duration_max: f64,
    pub light_force_threshold: f64,
    pub light_intensity_factor: f64,
    pub intensity_min_ratio: f64,
}

impl Default for WaveTuning {
    fn default() -> Self {
        Self {
            min_force: WAVE_MIN_FORCE,
            max_force: WAVE_MAX_FORCE,
            min_radius: WAVE_MIN_RADIUS,
            max_radius: WAVE_MAX_RADIUS,
            range_power_curve: WAVE_RANGE_POWER_CURVE,
            range_multiplier: 1.0,
            base_fade_speed: WAVE_BASE_FADE_SPEED,
            fade_speed_force_scale: WAVE_FADE_SPEED_FORCE_SCALE,
            start_radius_ratio: WAVE_START_RADIUS_RATIO,
            reveal_duration_min: WAVE_REVEAL_DURATION_MIN,
            reveal_duration_max: WAVE_REVEAL_DURATION_MAX,
            light_force_threshold: WAVE_LIGHT_FORCE_THRESHOLD,
            light_intensity_factor: WAVE_LIGHT_INTENSITY_FACTOR,
            intensity_min_ratio: WAVE_INTENSITY_MIN_RATIO,
        }
    }
}
