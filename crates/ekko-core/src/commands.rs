//! Player commands sent from the frontend to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

/// One tick's worth of raw input: edges are true only on the tick
/// of the press/release, holds are level-sampled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct InputFrame {
    /// Horizontal axis, -1..1.
    pub move_x: f64,
    /// Jump key went down this tick.
    pub jump_pressed: bool,
    /// Jump key went up this tick.
    pub jump_released: bool,
    /// Down key is held.
    pub down_held: bool,
    /// Control-fall key went down this tick.
    pub control_fall_pressed: bool,
}

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Raw input for the upcoming tick.
    Input { frame: InputFrame },

    // --- Simulation control ---
    /// Start (or restart) the level.
    StartLevel,
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,
    /// Set time scale (1.0 = normal, 0.0 = frozen).
    SetTimeScale { scale: f64 },
    /// Return to the main menu.
    ReturnToMenu,
}
