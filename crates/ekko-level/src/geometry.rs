//! Ground probing against one-way platform tops.
//!
//! Platforms are solid only from above: a falling player whose feet cross
//! a platform top between two ticks is snapped onto the surface. Reactive
//! platforms sink below their rest position, so all probes take a
//! per-platform downward offset.

use glam::DVec2;

use ekko_core::types::Position;

use crate::level::LevelDef;

/// Tolerance when deciding whether feet are resting on a surface.
pub const STAND_EPSILON: f64 = 0.01;

/// Result of a successful ground probe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundHit {
    pub platform_id: u32,
    /// Height of the surface the feet snapped to.
    pub surface_y: f64,
}

/// Find the platform top crossed by a falling step from `prev` to `next`.
///
/// `offset_of` reports the current downward offset of a platform (0 for
/// static ones). When several tops are crossed the highest one wins.
pub fn ground_hit(
    level: &LevelDef,
    prev: &Position,
    next: &Position,
    half_width: f64,
    offset_of: impl Fn(u32) -> f64,
) -> Option<GroundHit> {
    if next.y >= prev.y {
        return None; // ascending or level, one-way platforms don't catch
    }

    let mut best: Option<GroundHit> = None;
    for platform in &level.platforms {
        let top = platform.bounds.max.y - offset_of(platform.id);

        // Feet must cross the top between the two ticks.
        if prev.y < top - STAND_EPSILON || next.y > top {
            continue;
        }
        if !horizontal_overlap(prev, next, platform.bounds.min.x, platform.bounds.max.x, half_width)
        {
            continue;
        }

        match best {
            Some(hit) if hit.surface_y >= top => {}
            _ => {
                best = Some(GroundHit {
                    platform_id: platform.id,
                    surface_y: top,
                });
            }
        }
    }
    best
}

/// The platform the player is currently standing on, if any.
pub fn standing_platform(
    level: &LevelDef,
    pos: &Position,
    half_width: f64,
    offset_of: impl Fn(u32) -> f64,
) -> Option<u32> {
    level
        .platforms
        .iter()
        .filter(|platform| {
            let top = platform.bounds.max.y - offset_of(platform.id);
            (pos.y - top).abs() <= STAND_EPSILON
                && pos.x + half_width >= platform.bounds.min.x
                && pos.x - half_width <= platform.bounds.max.x
        })
        .map(|platform| platform.id)
        .next()
}

/// Whether the swept step overlaps the platform's horizontal span.
/// Uses the segment midpoint as a cheap sweep approximation; steps are a
/// fraction of a unit at the fixed tick rate.
fn horizontal_overlap(
    prev: &Position,
    next: &Position,
    min_x: f64,
    max_x: f64,
    half_width: f64,
) -> bool {
    let mid = (DVec2::new(prev.x, prev.y) + DVec2::new(next.x, next.y)) / 2.0;
    for x in [prev.x, mid.x, next.x] {
        if x + half_width >= min_x && x - half_width <= max_x {
            return true;
        }
    }
    false
}
