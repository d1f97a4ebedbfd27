//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are pure functions that take `&mut World` (or `&World` for read-only).
//! They do not own state — all state lives in components or the engine.

pub mod cleanup;
pub mod enemy;
pub mod health;
pub mod landing;
pub mod light_well;
pub mod movement;
pub mod platforms;
pub mod player_input;
pub mod reveal;
pub mod snapshot;
pub mod wave;
pub mod zones;
