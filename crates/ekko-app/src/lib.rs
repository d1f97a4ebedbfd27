//! EKKO headless application.
//!
//! Wires the simulation crates into a fixed-rate game loop and exposes
//! snapshots to whatever frontend sits on top (the bundled binary prints
//! feedback events as JSON lines).

pub mod game_loop;
pub mod state;

pub use ekko_core as core;
