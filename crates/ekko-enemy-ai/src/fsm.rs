//! The Dormant / Alert / Chase state machine.

use ekko_core::enums::{EnemyArchetype, EnemyState};
use ekko_core::types::{Position, Velocity};

use crate::profiles::{get_profile, EnemyBehaviorProfile};

/// Input to the enemy FSM for a single entity.
pub struct EnemyContext {
    pub archetype: EnemyArchetype,
    pub state: EnemyState,
    pub position: Position,
    /// Player position, if a player exists.
    pub player_position: Option<Position>,
    /// Origin of the wave that alerted this enemy, while relevant.
    pub alert_position: Option<Position>,
    /// Seconds spent in the current state.
    pub state_elapsed_secs: f64,
    /// Set when this enemy landed a hit on the player.
    pub player_hit: bool,
}

/// Output from the enemy FSM.
pub struct EnemyUpdate {
    pub new_state: EnemyState,
    pub new_velocity: Velocity,
    pub state_changed: bool,
    /// Restart the state timer without changing state
    /// (chase refresh while the player stays in range).
    pub refresh_timer: bool,
}

impl EnemyUpdate {
    fn unchanged(state: EnemyState, velocity: Velocity) -> Self {
        Self {
            new_state: state,
            new_velocity: velocity,
            state_changed: false,
            refresh_timer: false,
        }
    }

    fn transition(state: EnemyState, velocity: Velocity) -> Self {
        Self {
            new_state: state,
            new_velocity: velocity,
            state_changed: true,
            refresh_timer: false,
        }
    }
}

/// React to an incoming wave alert. Only dormant enemies wake; an enemy
/// already investigating or chasing ignores further alerts.
pub fn on_wave_alert(state: EnemyState) -> Option<EnemyState> {
    match state {
        EnemyState::Dormant => Some(EnemyState::Alert),
        EnemyState::Alert | EnemyState::Chase => None,
    }
}

/// Evaluate the FSM for one enemy. Returns the updated state and velocity.
pub fn evaluate(ctx: &EnemyContext) -> EnemyUpdate {
    let profile = get_profile(ctx.archetype);

    match ctx.state {
        EnemyState::Dormant => EnemyUpdate::unchanged(ctx.state, Velocity::default()),
        EnemyState::Alert => evaluate_alert(ctx, &profile),
        EnemyState::Chase => evaluate_chase(ctx, &profile),
    }
}

/// Alert: head toward the wave origin, watching for the player.
fn evaluate_alert(ctx: &EnemyContext, profile: &EnemyBehaviorProfile) -> EnemyUpdate {
    if player_in_range(ctx, profile) {
        let velocity = move_towards(ctx, ctx.player_position, profile.chase_speed);
        return EnemyUpdate::transition(EnemyState::Chase, velocity);
    }

    if ctx.state_elapsed_secs >= profile.alert_duration {
        return EnemyUpdate::transition(EnemyState::Dormant, Velocity::default());
    }

    let velocity = move_towards(ctx, ctx.alert_position, profile.alert_speed);
    EnemyUpdate::unchanged(ctx.state, velocity)
}

/// Chase: pursue the player until the timer runs out or a hit lands.
fn evaluate_chase(ctx: &EnemyContext, profile: &EnemyBehaviorProfile) -> EnemyUpdate {
    if ctx.player_position.is_none() || ctx.player_hit {
        return EnemyUpdate::transition(EnemyState::Dormant, Velocity::default());
    }

    if ctx.state_elapsed_secs >= profile.chase_duration {
        return EnemyUpdate::transition(EnemyState::Dormant, Velocity::default());
    }

    let velocity = move_towards(ctx, ctx.player_position, profile.chase_speed);
    let mut update = EnemyUpdate::unchanged(ctx.state, velocity);
    // Staying in range keeps the chase alive.
    update.refresh_timer = player_in_range(ctx, profile);
    update
}

fn player_in_range(ctx: &EnemyContext, profile: &EnemyBehaviorProfile) -> bool {
    ctx.player_position
        .is_some_and(|p| ctx.position.distance_to(&p) <= profile.chase_range)
}

/// Straight-line pursuit velocity toward a target, or rest if absent.
fn move_towards(ctx: &EnemyContext, target: Option<Position>, speed: f64) -> Velocity {
    match target {
        Some(target) => {
            let dir = glam::DVec2::new(target.x - ctx.position.x, target.y - ctx.position.y)
                .normalize_or_zero();
            Velocity::new(dir.x * speed, dir.y * speed)
        }
        None => Velocity::default(),
    }
}
