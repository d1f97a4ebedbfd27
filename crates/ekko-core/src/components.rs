//! ECS components for hecs entities.
//!
//! Components are plain data structs with no game logic.
//! Logic lives in systems (ekko-sim) and the pure crates
//! (ekko-impact, ekko-enemy-ai).

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::{Bounds, Position};

/// Marks an entity as the player.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player;

/// Marks an entity as an enemy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy;

/// Jump timing state. Mutated exclusively through ekko-impact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JumpController {
    /// Seconds of coyote grace remaining since last grounded tick.
    pub coyote_remaining: f64,
    /// Seconds of buffered jump press remaining.
    pub buffer_remaining: f64,
    /// Elapsed-time stamp of the last accepted control-fall press.
    pub last_cushion_input_secs: Option<f64>,
    /// True between a jump firing and its cut or apex.
    pub is_jumping: bool,
    /// Latched while down is held airborne; cleared on landing.
    pub slam_held: bool,
    /// True once the cushion damp has fired for the current airtime.
    pub cushion_spent: bool,
}

impl Default for JumpController {
    fn default() -> Self {
        Self {
            coyote_remaining: 0.0,
            buffer_remaining: 0.0,
            last_cushion_input_secs: None,
            is_jumping: false,
            slam_held: false,
            cushion_spent: false,
        }
    }
}

/// Ground contact state, refreshed by the movement system each tick.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct GroundContact {
    pub grounded: bool,
    /// Id of the platform under the feet, when grounded.
    pub platform: Option<u32>,
    /// Previous tick's grounded flag (landing = falling edge → true).
    pub was_grounded: bool,
}

/// Horizontal control intent derived from input.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ControlIntent {
    pub move_x: f64,
    pub facing_right: bool,
}

impl Default for ControlIntent {
    fn default() -> Self {
        Self {
            move_x: 0.0,
            facing_right: true,
        }
    }
}

/// Player light, which doubles as health.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LightHealth {
    pub current: f64,
    pub max: f64,
    /// Set once the low-light event has fired; cleared on restore above threshold.
    pub low_announced: bool,
    /// Elapsed-time stamp of the last enemy contact damage.
    pub last_contact_damage_secs: Option<f64>,
}

impl LightHealth {
    pub fn full(max: f64) -> Self {
        Self {
            current: max,
            max,
            low_announced: false,
            last_contact_damage_secs: None,
        }
    }

    pub fn ratio(&self) -> f64 {
        if self.max <= 0.0 {
            0.0
        } else {
            self.current / self.max
        }
    }

    pub fn is_dead(&self) -> bool {
        self.current <= 0.0
    }
}

/// Record of the most recent classified landing.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct LastLanding {
    pub impact_force: f64,
    pub kind: LandingKind,
    pub tick: u64,
}

/// Enemy behavior state. Transitions are computed by ekko-enemy-ai.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyMind {
    pub id: u32,
    pub archetype: EnemyArchetype,
    pub state: EnemyState,
    /// Tick at which the current state began.
    pub state_start_tick: u64,
    /// Origin of the wave that alerted this enemy, while relevant.
    pub alert_position: Option<Position>,
    /// Position to return to on player death / reset.
    pub checkpoint_position: Position,
    /// Elapsed-time stamp until which the enemy is visibly revealed.
    pub revealed_until_secs: f64,
    /// Set by the damage system when this enemy hit the player; ends the chase.
    pub player_hit: bool,
}

/// An expanding impact wave.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaveFront {
    pub origin: Position,
    pub radius: f64,
    pub target_radius: f64,
    pub expansion_speed: f64,
    pub fade_speed: f64,
    /// Visual opacity, 1 at spawn decaying to 0.
    pub alpha: f64,
    /// Hold duration handed to scenery this wave reveals.
    pub reveal_duration: f64,
    /// Whether this wave carries a light ring.
    pub light_enabled: bool,
    /// Elapsed-time stamp when alpha reached 0 (starts the despawn delay).
    pub faded_at_secs: Option<f64>,
}

/// Hidden scenery revealed by waves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneryReveal {
    pub id: u32,
    pub position: Position,
    /// Trigger extent of the scenery piece.
    pub radius: f64,
    pub phase: RevealPhase,
    pub alpha: f64,
    /// Seconds of full visibility remaining (Visible phase).
    pub hold_remaining: f64,
}

/// A light well: restores light on contact and emits reveal pulses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LightWellState {
    pub id: u32,
    pub position: Position,
    /// Contact radius.
    pub radius: f64,
    pub restore_amount: f64,
    pub active: bool,
    /// Number of pulse waves emitted since activation.
    pub pulses_emitted: u32,
    /// Tick of the next scheduled pulse while active.
    pub next_pulse_tick: u64,
}

/// What a trigger zone does when the player enters it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZoneKind {
    /// Deals `amount` light damage.
    Damage,
    /// Drains all remaining light.
    Kill,
    /// Stores the respawn point.
    Checkpoint,
    /// Completes the level.
    EndLevel,
}

/// Static trigger volume.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriggerZone {
    pub id: u32,
    pub bounds: Bounds,
    pub kind: ZoneKind,
    /// Damage amount (Damage zones only).
    pub amount: f64,
    /// Whether the effect applies only once.
    pub apply_once: bool,
    /// Set after a one-shot zone (or checkpoint) has fired.
    pub triggered: bool,
    /// True while the player is inside (edge detection).
    pub occupied: bool,
}

/// Animation state of a reactive platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReactivePlatform {
    pub platform_id: u32,
    /// Landing force needed to trigger the descent.
    pub impact_threshold: f64,
    /// How far the platform sinks when triggered.
    pub descend_distance: f64,
    /// Seconds the descent (and the return) takes.
    pub descend_duration: f64,
    /// Current downward offset from the rest position (>= 0).
    pub offset: f64,
    pub motion: PlatformMotion,
}
