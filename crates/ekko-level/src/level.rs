//! JSON level format: parsing and validation.
//!
//! Levels are flat serde structs. Parse errors surface as
//! `io::ErrorKind::InvalidData` so callers can treat a malformed level
//! file like any other unreadable input.

use std::collections::HashSet;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use ekko_core::components::ZoneKind;
use ekko_core::constants::{
    DAMAGE_ZONE_AMOUNT, MAX_LIGHT, REACTIVE_DESCEND_DISTANCE, REACTIVE_DESCEND_DURATION,
    REACTIVE_IMPACT_THRESHOLD,
};
use ekko_core::enums::EnemyArchetype;
use ekko_core::types::{Bounds, Position};

/// A complete level definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelDef {
    pub name: String,
    /// Player spawn point (also the default respawn).
    pub spawn: Position,
    /// Falling below this height drains all light.
    pub floor_y: f64,
    pub platforms: Vec<PlatformDef>,
    #[serde(default)]
    pub zones: Vec<ZoneDef>,
    #[serde(default)]
    pub revealables: Vec<RevealableDef>,
    #[serde(default)]
    pub light_wells: Vec<LightWellDef>,
    #[serde(default)]
    pub enemies: Vec<EnemySpawnDef>,
}

/// One platform. The top edge is the only solid surface (one-way).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformDef {
    pub id: u32,
    pub bounds: Bounds,
    /// Present when the platform sinks under heavy landings.
    #[serde(default)]
    pub reactive: Option<ReactiveDef>,
}

/// Reactive platform parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReactiveDef {
    #[serde(default = "default_impact_threshold")]
    pub impact_threshold: f64,
    #[serde(default = "default_descend_distance")]
    pub descend_distance: f64,
    #[serde(default = "default_descend_duration")]
    pub descend_duration: f64,
}

impl Default for ReactiveDef {
    fn default() -> Self {
        Self {
            impact_threshold: REACTIVE_IMPACT_THRESHOLD,
            descend_distance: REACTIVE_DESCEND_DISTANCE,
            descend_duration: REACTIVE_DESCEND_DURATION,
        }
    }
}

fn default_impact_threshold() -> f64 {
    REACTIVE_IMPACT_THRESHOLD
}

fn default_descend_distance() -> f64 {
    REACTIVE_DESCEND_DISTANCE
}

fn default_descend_duration() -> f64 {
    REACTIVE_DESCEND_DURATION
}

/// A static trigger volume (damage, kill, checkpoint, end-of-level).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneDef {
    pub id: u32,
    pub bounds: Bounds,
    pub kind: ZoneKind,
    /// Damage amount (Damage zones only).
    #[serde(default = "default_zone_amount")]
    pub amount: f64,
    /// Whether the effect applies only once.
    #[serde(default)]
    pub apply_once: bool,
}

fn default_zone_amount() -> f64 {
    DAMAGE_ZONE_AMOUNT
}

/// Hidden scenery revealed by waves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevealableDef {
    pub id: u32,
    pub position: Position,
    /// Trigger extent of the scenery piece.
    #[serde(default = "default_revealable_radius")]
    pub radius: f64,
}

fn default_revealable_radius() -> f64 {
    1.0
}

/// A light well: restores light on contact and emits reveal pulses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LightWellDef {
    pub id: u32,
    pub position: Position,
    #[serde(default = "default_well_radius")]
    pub radius: f64,
    #[serde(default = "default_well_restore")]
    pub restore_amount: f64,
}

fn default_well_radius() -> f64 {
    1.5
}

fn default_well_restore() -> f64 {
    MAX_LIGHT * 0.3
}

/// An enemy spawn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemySpawnDef {
    pub id: u32,
    #[serde(default)]
    pub archetype: EnemyArchetype,
    pub position: Position,
}

impl LevelDef {
    /// Parse a level from JSON text.
    pub fn from_json(json: &str) -> io::Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, format!("bad level: {e}")))
    }

    /// Load and parse a level file.
    pub fn load(path: &Path) -> io::Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Serialize back to pretty JSON (used by the level-prep tool).
    pub fn to_json(&self) -> io::Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Collect every structural problem in the level.
    pub fn validation_errors(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.platforms.is_empty() {
            errors.push("level has no platforms".to_string());
        }

        let mut platform_ids = HashSet::new();
        for p in &self.platforms {
            if !platform_ids.insert(p.id) {
                errors.push(format!("duplicate platform id {}", p.id));
            }
            if p.bounds.width() <= 0.0 || p.bounds.height() <= 0.0 {
                errors.push(format!("platform {} has non-positive extents", p.id));
            }
            if let Some(reactive) = &p.reactive {
                if reactive.descend_duration <= 0.0 {
                    errors.push(format!(
                        "platform {} reactive descend_duration must be positive",
                        p.id
                    ));
                }
            }
        }

        let mut zone_ids = HashSet::new();
        for z in &self.zones {
            if !zone_ids.insert(z.id) {
                errors.push(format!("duplicate zone id {}", z.id));
            }
            if z.bounds.width() <= 0.0 || z.bounds.height() <= 0.0 {
                errors.push(format!("zone {} has non-positive extents", z.id));
            }
            if z.kind == ZoneKind::Damage && z.amount <= 0.0 {
                errors.push(format!("damage zone {} has non-positive amount", z.id));
            }
        }

        let mut ids = HashSet::new();
        for r in &self.revealables {
            if !ids.insert(r.id) {
                errors.push(format!("duplicate revealable id {}", r.id));
            }
        }
        let mut ids = HashSet::new();
        for w in &self.light_wells {
            if !ids.insert(w.id) {
                errors.push(format!("duplicate light well id {}", w.id));
            }
        }
        let mut ids = HashSet::new();
        for e in &self.enemies {
            if !ids.insert(e.id) {
                errors.push(format!("duplicate enemy id {}", e.id));
            }
        }

        if self.spawn.y <= self.floor_y {
            errors.push("spawn point is below the floor".to_string());
        }
        if !self.has_platform_below(&self.spawn) {
            errors.push("spawn point has no platform below it".to_string());
        }

        errors
    }

    /// Validate, turning the first problem into an `InvalidData` error.
    pub fn validate(&self) -> io::Result<()> {
        match self.validation_errors().into_iter().next() {
            Some(first) => Err(io::Error::new(io::ErrorKind::InvalidData, first)),
            None => Ok(()),
        }
    }

    /// Whether any platform top lies below the given point.
    pub fn has_platform_below(&self, p: &Position) -> bool {
        self.platforms.iter().any(|platform| {
            p.x >= platform.bounds.min.x
                && p.x <= platform.bounds.max.x
                && platform.bounds.max.y <= p.y
        })
    }

    /// Look up a platform by id.
    pub fn platform(&self, id: u32) -> Option<&PlatformDef> {
        self.platforms.iter().find(|p| p.id == id)
    }
}
