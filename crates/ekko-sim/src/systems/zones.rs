//! Trigger zone system: static volumes the player walks into, plus the
//! kill floor below the level.

use hecs::World;

use ekko_core::components::{Enemy, EnemyMind, LightHealth, Player, TriggerZone, ZoneKind};
use ekko_core::enums::GamePhase;
use ekko_core::events::FeedbackEvent;
use ekko_core::types::Position;
use ekko_level::level::LevelDef;

/// What a zone entry does to the player, resolved after the zone pass.
enum ZoneEffect {
    Damage(f64),
    Kill,
}

/// Run trigger zones and the kill floor for one tick.
pub fn run(
    world: &mut World,
    level: &LevelDef,
    phase: &mut GamePhase,
    respawn_point: &mut Position,
    events: &mut Vec<FeedbackEvent>,
) {
    let Some((player_entity, player_pos, alive)) = world
        .query::<(&Player, &Position, &LightHealth)>()
        .iter()
        .next()
        .map(|(entity, (_, pos, light))| (entity, *pos, !light.is_dead()))
    else {
        return;
    };

    if !alive {
        return;
    }

    let mut effects: Vec<ZoneEffect> = Vec::new();
    let mut checkpoint_touched = false;

    for (_entity, zone) in world.query_mut::<&mut TriggerZone>() {
        let inside = zone.bounds.contains(&player_pos);
        let entered = inside && !zone.occupied;
        zone.occupied = inside;
        if !entered {
            continue;
        }

        match zone.kind {
            ZoneKind::Damage => {
                if !(zone.apply_once && zone.triggered) {
                    zone.triggered = true;
                    effects.push(ZoneEffect::Damage(zone.amount));
                }
            }
            ZoneKind::Kill => {
                effects.push(ZoneEffect::Kill);
            }
            ZoneKind::Checkpoint => {
                if !zone.triggered {
                    zone.triggered = true;
                    *respawn_point =
                        Position::new(zone.bounds.center().x, zone.bounds.min.y);
                    checkpoint_touched = true;
                    events.push(FeedbackEvent::CheckpointReached { id: zone.id });
                }
            }
            ZoneKind::EndLevel => {
                if !zone.triggered {
                    zone.triggered = true;
                    *phase = GamePhase::LevelComplete;
                    events.push(FeedbackEvent::LevelComplete);
                }
            }
        }
    }

    // Checkpoints also pin where enemies return on the next death: each
    // enemy's reset point becomes wherever it stands right now.
    if checkpoint_touched {
        for (_entity, (_enemy, mind, pos)) in
            world.query_mut::<(&Enemy, &mut EnemyMind, &Position)>()
        {
            mind.checkpoint_position = *pos;
        }
    }

    if player_pos.y < level.floor_y {
        effects.push(ZoneEffect::Kill);
    }

    if effects.is_empty() {
        return;
    }

    if let Ok(mut light) = world.get::<&mut LightHealth>(player_entity) {
        for effect in effects {
            let amount = match effect {
                ZoneEffect::Damage(amount) => amount.min(light.current),
                ZoneEffect::Kill => light.current,
            };
            if amount <= 0.0 {
                continue;
            }
            light.current -= amount;
            events.push(FeedbackEvent::DamageTaken {
                amount,
                remaining: light.current,
            });
        }
    }
}
