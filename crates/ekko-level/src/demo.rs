//! Built-in demo level.
//!
//! A small cavern run that exercises every level feature: one-way
//! platforms, a pit with a kill zone, a spike damage zone, a checkpoint,
//! a reactive platform, hidden scenery, a light well, and both enemy
//! archetypes. Used by the app binary and the engine tests.

use ekko_core::components::ZoneKind;
use ekko_core::enums::EnemyArchetype;
use ekko_core::types::{Bounds, Position};

use crate::level::{
    EnemySpawnDef, LevelDef, LightWellDef, PlatformDef, ReactiveDef, RevealableDef, ZoneDef,
};

/// Build the demo level.
pub fn demo_level() -> LevelDef {
    LevelDef {
        name: "echo-caverns".to_string(),
        spawn: Position::new(-16.0, 0.0),
        floor_y: -6.0,
        platforms: vec![
            // West ground shelf.
            PlatformDef {
                id: 1,
                bounds: Bounds::new(Position::new(-20.0, -1.0), Position::new(-12.0, 0.0)),
                reactive: None,
            },
            // East ground shelf, across the pit.
            PlatformDef {
                id: 2,
                bounds: Bounds::new(Position::new(-10.0, -1.0), Position::new(20.0, 0.0)),
                reactive: None,
            },
            // Reactive plate on the west shelf.
            PlatformDef {
                id: 3,
                bounds: Bounds::new(Position::new(-18.0, 1.5), Position::new(-14.0, 2.0)),
                reactive: Some(ReactiveDef::default()),
            },
            // Mid ledge.
            PlatformDef {
                id: 4,
                bounds: Bounds::new(Position::new(4.0, 2.5), Position::new(8.0, 3.0)),
                reactive: None,
            },
            // High ledge with the light well.
            PlatformDef {
                id: 5,
                bounds: Bounds::new(Position::new(10.0, 5.5), Position::new(14.0, 6.0)),
                reactive: None,
            },
        ],
        zones: vec![
            // The pit between the shelves.
            ZoneDef {
                id: 1,
                bounds: Bounds::new(Position::new(-12.0, -6.0), Position::new(-10.0, -2.0)),
                kind: ZoneKind::Kill,
                amount: 0.0,
                apply_once: false,
            },
            // Spikes near the east end.
            ZoneDef {
                id: 2,
                bounds: Bounds::new(Position::new(15.0, 0.0), Position::new(16.5, 1.0)),
                kind: ZoneKind::Damage,
                amount: 25.0,
                apply_once: false,
            },
            // Checkpoint past the pit.
            ZoneDef {
                id: 3,
                bounds: Bounds::new(Position::new(-2.0, 0.0), Position::new(-1.0, 2.0)),
                kind: ZoneKind::Checkpoint,
                amount: 0.0,
                apply_once: true,
            },
            // Level exit.
            ZoneDef {
                id: 4,
                bounds: Bounds::new(Position::new(18.5, 0.0), Position::new(19.5, 2.0)),
                kind: ZoneKind::EndLevel,
                amount: 0.0,
                apply_once: true,
            },
        ],
        revealables: vec![
            RevealableDef {
                id: 1,
                position: Position::new(-6.0, 1.0),
                radius: 1.0,
            },
            RevealableDef {
                id: 2,
                position: Position::new(2.0, 1.0),
                radius: 1.5,
            },
            RevealableDef {
                id: 3,
                position: Position::new(6.0, 4.0),
                radius: 1.0,
            },
        ],
        light_wells: vec![LightWellDef {
            id: 1,
            position: Position::new(12.0, 6.5),
            radius: 1.5,
            restore_amount: 30.0,
        }],
        enemies: vec![
            EnemySpawnDef {
                id: 1,
                archetype: EnemyArchetype::Lurker,
                position: Position::new(0.0, 4.0),
            },
            EnemySpawnDef {
                id: 2,
                archetype: EnemyArchetype::Stalker,
                position: Position::new(12.0, 9.0),
            },
        ],
    }
}
