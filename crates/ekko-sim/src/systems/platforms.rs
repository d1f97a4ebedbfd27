//! Reactive platform motion.
//!
//! The landing system starts the descent; this system animates the offset
//! and decides when the platform rises back. A platform stays depressed
//! while the player keeps standing on it.

use hecs::World;

use ekko_core::components::{GroundContact, Player, ReactivePlatform};
use ekko_core::constants::DT;
use ekko_core::enums::PlatformMotion;

/// Animate reactive platform offsets for one tick.
pub fn run(world: &mut World) {
    let standing_on: Option<u32> = world
        .query::<(&Player, &GroundContact)>()
        .iter()
        .next()
        .and_then(|(_, (_, contact))| contact.grounded.then_some(contact.platform).flatten());

    for (_entity, rp) in world.query_mut::<&mut ReactivePlatform>() {
        let rate = rp.descend_distance / rp.descend_duration;
        let occupied = standing_on == Some(rp.platform_id);

        match rp.motion {
            PlatformMotion::Idle => {}
            PlatformMotion::Descending => {
                rp.offset += rate * DT;
                if rp.offset >= rp.descend_distance {
                    rp.offset = rp.descend_distance;
                    rp.motion = if occupied {
                        PlatformMotion::Depressed
                    } else {
                        PlatformMotion::Ascending
                    };
                }
            }
            PlatformMotion::Depressed => {
                if !occupied {
                    rp.motion = PlatformMotion::Ascending;
                }
            }
            PlatformMotion::Ascending => {
                if occupied {
                    // Stepped back on while rising: hold at the current depth.
                    rp.motion = PlatformMotion::Depressed;
                    continue;
                }
                rp.offset -= rate * DT;
                if rp.offset <= 0.0 {
                    rp.offset = 0.0;
                    rp.motion = PlatformMotion::Idle;
                }
            }
        }
    }
}
