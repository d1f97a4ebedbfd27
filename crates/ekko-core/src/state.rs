//! Game state snapshot — the complete visible state sent to the frontend each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::FeedbackEvent;
use crate::types::{Position, SimTime, Velocity};

/// Complete game state broadcast to the frontend after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub player: PlayerView,
    pub waves: Vec<WaveView>,
    pub enemies: Vec<EnemyView>,
    pub revealables: Vec<RevealableView>,
    pub platforms: Vec<PlatformView>,
    pub events: Vec<FeedbackEvent>,
}

/// Player state for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Position,
    pub velocity: Velocity,
    pub grounded: bool,
    pub facing_right: bool,
    /// Last classified landing, if any.
    pub last_landing: Option<LandingView>,
    /// Light (health) values.
    pub light: f64,
    pub max_light: f64,
    pub light_low: bool,
    /// Rendering values derived from the light ratio.
    pub light_radius: f64,
    pub light_intensity: f64,
}

/// The most recent landing.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct LandingView {
    pub kind: LandingKind,
    pub impact_force: f64,
    pub tick: u64,
}

/// An in-flight wave for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WaveView {
    pub origin: Position,
    pub radius: f64,
    pub target_radius: f64,
    pub alpha: f64,
    pub light_enabled: bool,
    /// Ring light intensity (0 when the light is disabled).
    pub light_intensity: f64,
}

/// An enemy for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: u32,
    pub archetype: EnemyArchetype,
    pub position: Position,
    pub state: EnemyState,
    /// True while the reveal flash is active.
    pub revealed: bool,
}

/// Hidden scenery alpha state for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RevealableView {
    pub id: u32,
    pub position: Position,
    pub phase: RevealPhase,
    pub alpha: f64,
}

/// Reactive platform offset for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlatformView {
    pub id: u32,
    /// Current downward offset from the rest position.
    pub offset: f64,
    pub motion: PlatformMotion,
}
