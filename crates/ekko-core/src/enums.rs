//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// How a touchdown was executed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LandingKind {
    /// Plain touchdown, no fall-control input.
    #[default]
    Normal,
    /// Player forced a fast fall by holding down while airborne.
    Slam,
    /// A timely control-fall input softened the touchdown.
    Cushioned,
}

/// Enemy behavior state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyState {
    /// Idle in the dark, waiting for a wave.
    #[default]
    Dormant,
    /// Moving toward the last wave origin, scanning for the player.
    Alert,
    /// Actively pursuing the player.
    Chase,
}

/// Enemy archetype category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyArchetype {
    /// Slow investigator, short chase.
    #[default]
    Lurker,
    /// Faster pursuer with a wider detection radius.
    Stalker,
}

/// Reveal lifecycle phase for hidden scenery.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealPhase {
    /// Fully transparent, not yet touched by a wave.
    #[default]
    Hidden,
    /// Alpha rising toward 1.
    FadingIn,
    /// Fully visible for the wave's reveal duration.
    Visible,
    /// Alpha falling back toward 0.
    FadingOut,
}

/// Reactive platform animation state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlatformMotion {
    /// At rest position.
    #[default]
    Idle,
    /// Sinking after a heavy landing.
    Descending,
    /// Rising back after the player left.
    Ascending,
    /// Held down while the player stands on it.
    Depressed,
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    MainMenu,
    Active,
    Paused,
    LevelComplete,
}
