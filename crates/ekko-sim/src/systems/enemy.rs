//! Enemy system: evaluates the Dormant/Alert/Chase FSM for each enemy,
//! integrates pursuit motion, and applies contact damage to the player.

use glam::DVec2;
use hecs::World;

use ekko_core::components::{Enemy, EnemyMind, LightHealth, Player};
use ekko_core::constants::{DT, ENEMY_CONTACT_DAMAGE, ENEMY_DAMAGE_COOLDOWN, ENEMY_REVEAL_DURATION};
use ekko_core::enums::EnemyState;
use ekko_core::events::FeedbackEvent;
use ekko_core::types::{Position, SimTime, Velocity};
use ekko_enemy_ai::fsm::{evaluate, EnemyContext};

/// Center distance at which an enemy touches the player.
const ENEMY_CONTACT_RADIUS: f64 = 0.6;

/// Run the enemy system for one tick.
pub fn run(world: &mut World, time: &SimTime, events: &mut Vec<FeedbackEvent>) {
    // Enemies do not pursue a dead player.
    let player: Option<(hecs::Entity, Position)> = world
        .query::<(&Player, &Position, &LightHealth)>()
        .iter()
        .next()
        .filter(|(_, (_, _, light))| !light.is_dead())
        .map(|(entity, (_, pos, _))| (entity, *pos));
    let player_position = player.map(|(_, pos)| pos);

    let mut contacts: Vec<u32> = Vec::new();

    for (_entity, (_enemy, mind, pos, vel)) in
        world.query_mut::<(&Enemy, &mut EnemyMind, &mut Position, &mut Velocity)>()
    {
        let ctx = EnemyContext {
            archetype: mind.archetype,
            state: mind.state,
            position: *pos,
            player_position,
            alert_position: mind.alert_position,
            state_elapsed_secs: time.tick.saturating_sub(mind.state_start_tick) as f64 * DT,
            player_hit: mind.player_hit,
        };

        let update = evaluate(&ctx);
        if update.state_changed {
            mind.state = update.new_state;
            mind.state_start_tick = time.tick;
            match update.new_state {
                EnemyState::Chase => {
                    mind.revealed_until_secs = time.elapsed_secs + ENEMY_REVEAL_DURATION;
                    events.push(FeedbackEvent::EnemyChaseStarted { enemy: mind.id });
                }
                EnemyState::Dormant => {
                    mind.alert_position = None;
                    mind.player_hit = false;
                }
                EnemyState::Alert => {}
            }
        } else if update.refresh_timer {
            mind.state_start_tick = time.tick;
        }

        *vel = update.new_velocity;
        pos.x += vel.x * DT;
        pos.y += vel.y * DT;

        if let Some(target) = player_position {
            let gap = DVec2::new(target.x - pos.x, target.y - pos.y).length();
            if gap <= ENEMY_CONTACT_RADIUS {
                contacts.push(mind.id);
            }
        }
    }

    if contacts.is_empty() {
        return;
    }

    // Apply at most one contact hit per cooldown window.
    let Some((player_entity, _)) = player else {
        return;
    };
    let mut hit_landed = false;
    if let Ok(mut light) = world.get::<&mut LightHealth>(player_entity) {
        let off_cooldown = light
            .last_contact_damage_secs
            .is_none_or(|at| time.elapsed_secs - at >= ENEMY_DAMAGE_COOLDOWN);
        if off_cooldown {
            light.current = (light.current - ENEMY_CONTACT_DAMAGE).max(0.0);
            light.last_contact_damage_secs = Some(time.elapsed_secs);
            events.push(FeedbackEvent::DamageTaken {
                amount: ENEMY_CONTACT_DAMAGE,
                remaining: light.current,
            });
            hit_landed = true;
        }
    }

    if hit_landed {
        for (_entity, (_enemy, mind)) in world.query_mut::<(&Enemy, &mut EnemyMind)>() {
            if contacts.contains(&mind.id) {
                mind.player_hit = true;
            }
        }
    }
}
