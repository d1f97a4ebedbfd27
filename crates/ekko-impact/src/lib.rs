//! Jump, landing, and wave math.
//!
//! Pure functions over plain data: coyote/buffer timers, jump firing and
//! cutting, slam and cushion fall control, landing classification, and the
//! impact-force → wave radius/fade/intensity curves. No ECS dependency;
//! the simulation crate feeds in component state and applies the results.

pub mod jump;
pub mod landing;
pub mod tuning;
pub mod wave;
