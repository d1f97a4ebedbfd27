//! Behavior profiles per enemy archetype.

use ekko_core::enums::EnemyArchetype;

/// Static behavior parameters of an enemy archetype.
#[derive(Debug, Clone, Copy)]
pub struct EnemyBehaviorProfile {
    /// Speed while investigating a wave origin.
    pub alert_speed: f64,
    /// Speed while pursuing the player.
    pub chase_speed: f64,
    /// How long the investigation lasts before giving up.
    pub alert_duration: f64,
    /// How long a chase persists after losing sight of the player.
    pub chase_duration: f64,
    /// Detection radius around the enemy.
    pub chase_range: f64,
}

/// Look up the behavior profile for an archetype.
pub fn get_profile(archetype: EnemyArchetype) -> EnemyBehaviorProfile {
    match archetype {
        EnemyArchetype::Lurker => EnemyBehaviorProfile {
            alert_speed: 2.0,
            chase_speed: 3.0,
            alert_duration: 2.0,
            chase_duration: 3.0,
            chase_range: 6.0,
        },
        EnemyArchetype::Stalker => EnemyBehaviorProfile {
            alert_speed: 2.5,
            chase_speed: 4.5,
            alert_duration: 3.0,
            chase_duration: 5.0,
            chase_range: 8.0,
        },
    }
}
