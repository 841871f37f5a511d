//! Obstacle lifecycle: hit handling, fragmentation, and timed removal.

use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use rockfield_core::components::{Collider, ObstacleState, Projectile, WaveMember};
use rockfield_core::config::{ResolvedCatalog, SessionConfig};
use rockfield_core::constants::DT;
use rockfield_core::enums::ObstaclePhase;
use rockfield_core::events::GameEvent;

use crate::world_setup;

/// What a processed hit means for wave accounting and scoring.
#[derive(Debug, Clone, Copy)]
pub struct HitOutcome {
    pub points_worth: u32,
    /// Whether the obstacle counted toward the current wave's completion.
    pub wave_member: bool,
}

/// Process a hit on an obstacle. No-op unless the obstacle is Alive, so a
/// second report within the same tick is ignored and the destroyed
/// notification fires exactly once.
///
/// The collider is disabled inline before any fragment spawns, then
/// fragments (if the template splits) are spawned synchronously at the
/// parent's position. Fragments are independently alive and collidable,
/// and may themselves split; recursion depth is bounded only by the
/// catalog data.
pub fn on_hit(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    session: &SessionConfig,
    catalog: &ResolvedCatalog,
    obstacle: Entity,
    events: &mut Vec<GameEvent>,
) -> Option<HitOutcome> {
    let (points_worth, position, split) = {
        let Ok((state, collider, pos)) = world.query_one_mut::<(
            &mut ObstacleState,
            &mut Collider,
            &rockfield_core::types::Position,
        )>(obstacle) else {
            return None;
        };
        if state.phase != ObstaclePhase::Alive {
            return None;
        }

        state.phase = ObstaclePhase::Destroying;
        collider.enabled = false;
        (state.points_worth, pos.0, state.split)
    };

    let wave_member = world.satisfies::<&WaveMember>(obstacle).unwrap_or(false);

    if let Some(split) = split {
        for _ in 0..split.count {
            let _ = world_setup::spawn_obstacle(
                world,
                rng,
                session,
                catalog,
                split.template_index,
                position,
                false,
            );
        }
        log::debug!(
            "obstacle split into {} fragments of template {}",
            split.count,
            split.template_index
        );
    }

    events.push(GameEvent::ObstacleDestroyed {
        points_worth,
        position,
    });

    Some(HitOutcome {
        points_worth,
        wave_member,
    })
}

/// Advance destruction-delay and projectile TTL timers one tick. Expired
/// Destroying obstacles become Removed; the cleanup system despawns them.
pub fn run(world: &mut World) {
    for (_entity, state) in world.query_mut::<&mut ObstacleState>() {
        if state.phase == ObstaclePhase::Destroying {
            state.delay_remaining_secs -= DT;
            if state.delay_remaining_secs <= 0.0 {
                state.phase = ObstaclePhase::Removed;
            }
        }
    }

    for (_entity, projectile) in world.query_mut::<&mut Projectile>() {
        projectile.ttl_secs -= DT;
    }
}
