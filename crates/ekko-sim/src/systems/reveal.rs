//! Revealable scenery fade lifecycle.
//!
//! Hidden → FadingIn → Visible → FadingOut → Hidden. The wave system
//! starts the cycle and sets the hold duration; this system only moves
//! alpha and the phase forward.

use hecs::World;

use ekko_core::components::SceneryReveal;
use ekko_core::constants::{DT, REVEAL_FADE_IN, REVEAL_FADE_OUT};
use ekko_core::enums::RevealPhase;

/// Advance every scenery piece's fade by one tick.
pub fn run(world: &mut World) {
    for (_entity, scenery) in world.query_mut::<&mut SceneryReveal>() {
        match scenery.phase {
            RevealPhase::Hidden => {}
            RevealPhase::FadingIn => {
                scenery.alpha = (scenery.alpha + DT / REVEAL_FADE_IN).min(1.0);
                if scenery.alpha >= 1.0 {
                    scenery.phase = RevealPhase::Visible;
                }
            }
            RevealPhase::Visible => {
                scenery.hold_remaining -= DT;
                if scenery.hold_remaining <= 0.0 {
                    scenery.hold_remaining = 0.0;
                    scenery.phase = RevealPhase::FadingOut;
                }
            }
            RevealPhase::FadingOut => {
                scenery.alpha = (scenery.alpha - DT / REVEAL_FADE_OUT).max(0.0);
                if scenery.alpha <= 0.0 {
                    scenery.phase = RevealPhase::Hidden;
                }
            }
        }
    }
}
