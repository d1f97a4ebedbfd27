//! Events emitted by the simulation for audio and UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::LandingKind;
use crate::types::Position;

/// Feedback events for the frontend (sound cues, screen shake, UI flashes).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FeedbackEvent {
    /// Player touched down.
    Landed {
        kind: LandingKind,
        impact_force: f64,
        /// Slam, or any landing at heavy force.
        heavy: bool,
    },
    /// A wave was spawned.
    WaveEmitted {
        origin: Position,
        target_radius: f64,
    },
    /// Hidden scenery started fading in.
    SceneryRevealed { id: u32 },
    /// A dormant enemy woke toward a wave origin.
    EnemyAlerted { enemy: u32, source: Position },
    /// An alerted enemy spotted the player.
    EnemyChaseStarted { enemy: u32 },
    /// The player lost light.
    DamageTaken { amount: f64, remaining: f64 },
    /// The player gained light.
    LightRestored { amount: f64, remaining: f64 },
    /// Light crossed below the critical threshold.
    LowLight { remaining: f64 },
    /// Light reached zero.
    PlayerDied,
    /// Player respawned at the active checkpoint.
    Respawned { position: Position },
    /// A checkpoint was activated.
    CheckpointReached { id: u32 },
    /// A reactive platform started descending.
    PlatformTriggered { platform: u32 },
    /// A light well began pulsing.
    PulseStarted { well: u32 },
    /// The end trigger was reached.
    LevelComplete,
}
