//! Level geometry and queries for the EKKO simulation.
//!
//! Defines the JSON level format (platforms, trigger zones, revealable
//! scenery, light wells, enemy spawns), validation, and the ground-probe
//! queries the movement system uses for one-way platform collision.

pub mod demo;
pub mod geometry;
pub mod level;

pub use level::{
    EnemySpawnDef, LevelDef, LightWellDef, PlatformDef, ReactiveDef, RevealableDef, ZoneDef,
};
