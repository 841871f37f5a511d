//! Snapshot system: flattens the world into a GameStateSnapshot.

use hecs::World;

use rockfield_core::components::{
    blink_alpha, Collider, Health, ObstacleState, Projectile, ShipControl,
};
use rockfield_core::enums::{GamePhase, HealthState};
use rockfield_core::events::GameEvent;
use rockfield_core::state::{GameStateSnapshot, ObstacleView, ProjectileView, ShipView};
use rockfield_core::types::{Position, SimTime, Velocity};

use crate::engine::WaveState;

/// Build the per-tick snapshot. `events` is the drained event buffer for
/// this tick; it is moved into the snapshot and delivered exactly once.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    wave: WaveState,
    score: u32,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    let ship = world
        .query::<(&Position, &ShipControl, &Health)>()
        .iter()
        .next()
        .map(|(_, (pos, control, health))| ShipView {
            position: pos.0,
            heading: control.heading,
            speed: control.speed,
            lives: health.lives,
            max_lives: health.max_lives,
            state: health.state,
            sprite_alpha: match health.state {
                HealthState::Vulnerable => 1.0,
                HealthState::Invulnerable => {
                    blink_alpha(health.blink_phase, health.invulnerability_alpha)
                }
                HealthState::Dead => 0.0,
            },
        });

    let obstacles = world
        .query::<(&Position, &ObstacleState, &Collider)>()
        .iter()
        .map(|(_, (pos, state, collider))| ObstacleView {
            position: pos.0,
            heading: state.heading,
            radius: collider.radius,
            points_worth: state.points_worth,
            phase: state.phase,
        })
        .collect();

    let projectiles = world
        .query::<(&Position, &Velocity, &Projectile)>()
        .iter()
        .map(|(_, (pos, vel, _))| ProjectileView {
            position: pos.0,
            heading: vel.0.y.atan2(vel.0.x),
        })
        .collect();

    GameStateSnapshot {
        time: *time,
        phase,
        wave: wave.number,
        obstacles_remaining: wave.live_count,
        score,
        ship,
        obstacles,
        projectiles,
        events,
    }
}
