//! Cleanup system: removes entities whose lifecycle has ended.

use hecs::{Entity, World};

use rockfield_core::components::{ObstacleState, Projectile};
use rockfield_core::enums::ObstaclePhase;

/// Despawn Removed obstacles and expired projectiles.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, state) in world.query_mut::<&ObstacleState>() {
        if state.phase == ObstaclePhase::Removed {
            despawn_buffer.push(entity);
        }
    }

    for (entity, projectile) in world.query_mut::<&Projectile>() {
        if projectile.ttl_secs <= 0.0 {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
