//! Enemy behavior finite state machine.
//!
//! Pure functions that compute state transitions and movement for enemies
//! based on their archetype, current state, the player's position, and the
//! last wave alert. No ECS dependency — operates on plain data.

pub mod fsm;
pub mod profiles;
