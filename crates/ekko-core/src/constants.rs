//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

/// Gravity acceleration (world units per second squared, negative = down).
pub const GRAVITY: f64 = -9.81;

// --- Player movement ---

/// Horizontal run speed.
pub const MOVE_SPEED: f64 = 6.0;

/// Upward velocity applied when a jump fires.
pub const JUMP_FORCE: f64 = 14.0;

/// Grace period after leaving a platform during which a jump is still allowed.
pub const COYOTE_TIME: f64 = 0.1;

/// Grace period before landing during which a jump press is remembered.
pub const JUMP_BUFFER_TIME: f64 = 0.15;

/// Vertical velocity multiplier when jump is released early.
pub const JUMP_CUT_FACTOR: f64 = 0.5;

/// Window after a control-fall press during which the fall damp applies.
pub const CONTROLLED_FALL_WINDOW: f64 = 0.2;

/// Window before touchdown during which a control-fall press counts as cushioned.
pub const CUSHION_TIMING_WINDOW: f64 = 0.2;

/// Extra downward acceleration while slamming, as a multiple of gravity.
pub const SLAM_FALL_ACCELERATION: f64 = 2.0;

/// Vertical velocity multiplier when the cushion damp fires.
pub const CUSHION_FALL_DAMPING: f64 = 0.3;

// --- Landing classification ---

/// Effective force multiplier for slam landings.
pub const SLAM_WAVE_MULTIPLIER: f64 = 1.5;

/// Effective force multiplier for cushioned landings.
pub const CUSHION_WAVE_MULTIPLIER: f64 = 0.1;

/// Force at or above which any landing counts as a heavy impact.
pub const HEAVY_IMPACT_FORCE: f64 = 25.0;

// --- Wave emission ---

/// Landing force mapped to the bottom of the radius range.
pub const WAVE_MIN_FORCE: f64 = 1.0;

/// Landing force mapped to the top of the radius range.
pub const WAVE_MAX_FORCE: f64 = 20.0;

/// Smallest wave target radius (soft touchdowns).
pub const WAVE_MIN_RADIUS: f64 = 1.0;

/// Largest wave target radius (hard slams).
pub const WAVE_MAX_RADIUS: f64 = 16.0;

/// Exponent shaping the force→radius curve (1 = linear, >1 = ease-in).
pub const WAVE_RANGE_POWER_CURVE: f64 = 1.5;

// --- Wave expansion / fade ---

/// Alpha decay rate for a force-zero wave (1/seconds).
pub const WAVE_BASE_FADE_SPEED: f64 = 0.5;

/// How much each unit of force slows the fade.
pub const WAVE_FADE_SPEED_FORCE_SCALE: f64 = 0.05;

/// Fraction of the target radius a wave starts at.
pub const WAVE_START_RADIUS_RATIO: f64 = 0.3;

/// Shortest hold duration granted to revealed scenery.
pub const WAVE_REVEAL_DURATION_MIN: f64 = 0.5;

/// Longest hold duration granted to revealed scenery.
pub const WAVE_REVEAL_DURATION_MAX: f64 = 3.0;

/// Force at or above which the wave carries a light ring.
pub const WAVE_LIGHT_FORCE_THRESHOLD: f64 = 10.0;

/// Peak light intensity of a wave ring.
pub const WAVE_LIGHT_INTENSITY_FACTOR: f64 = 0.2;

/// Floor of the light intensity as a fraction of the peak.
pub const WAVE_INTENSITY_MIN_RATIO: f64 = 0.2;

/// Delay between a wave fading out completely and its despawn.
pub const WAVE_DESPAWN_DELAY: f64 = 0.2;

// --- Reveal pulses (light wells) ---

/// Ticks between pulse waves from an active light well (1 second).
pub const PULSE_INTERVAL_TICKS: u64 = 60;

/// Force of the first pulse wave.
pub const PULSE_BASE_FORCE: f64 = 30.0;

/// Target radius of the first pulse wave.
pub const PULSE_BASE_RADIUS: f64 = 35.0;

/// Force and radius growth per emitted pulse.
pub const PULSE_GROWTH_PER_BEAT: f64 = 5.0;

// --- Revealable scenery ---

/// Fade-in duration when scenery is revealed.
pub const REVEAL_FADE_IN: f64 = 0.5;

/// Fade-out duration when the hold expires.
pub const REVEAL_FADE_OUT: f64 = 1.5;

// --- Light (health) ---

/// Maximum player light.
pub const MAX_LIGHT: f64 = 100.0;

/// Light at or below which the low-light state triggers.
pub const LOW_LIGHT_THRESHOLD: f64 = 20.0;

/// Contact damage dealt by an enemy.
pub const ENEMY_CONTACT_DAMAGE: f64 = 10.0;

/// Minimum delay between enemy contact damage applications.
pub const ENEMY_DAMAGE_COOLDOWN: f64 = 1.0;

/// Default damage dealt by a static damage zone.
pub const DAMAGE_ZONE_AMOUNT: f64 = 25.0;

/// Delay between death and respawn at the checkpoint.
pub const RESPAWN_DELAY: f64 = 1.0;

// --- Player light rendering ---

/// Light radius at zero light.
pub const PLAYER_LIGHT_MIN_RADIUS: f64 = 1.0;

/// Light radius at full light.
pub const PLAYER_LIGHT_MAX_RADIUS: f64 = 5.0;

/// Light intensity at zero light.
pub const PLAYER_LIGHT_MIN_INTENSITY: f64 = 0.5;

/// Light intensity at full light.
pub const PLAYER_LIGHT_MAX_INTENSITY: f64 = 1.5;

/// Idle pulse amplitude added to the intensity.
pub const PLAYER_LIGHT_PULSE_AMPLITUDE: f64 = 0.1;

/// Idle pulse speed (radians per second).
pub const PLAYER_LIGHT_PULSE_SPEED: f64 = 1.0;

/// Pulse speed while light is below the low threshold.
pub const PLAYER_LIGHT_PULSE_SPEED_CRITICAL: f64 = 3.0;

// --- Enemies ---

/// How long an alerted enemy stays visibly revealed.
pub const ENEMY_REVEAL_DURATION: f64 = 1.5;

// --- Reactive platforms ---

/// Default landing force needed to trigger a reactive platform.
pub const REACTIVE_IMPACT_THRESHOLD: f64 = 5.0;

/// How far a triggered platform descends.
pub const REACTIVE_DESCEND_DISTANCE: f64 = 1.0;

/// How long the descend (and ascend) takes.
pub const REACTIVE_DESCEND_DURATION: f64 = 0.4;

// --- World ---

/// Entities farther than this from the origin are despawned.
pub const WORLD_RADIUS: f64 = 500.0;
