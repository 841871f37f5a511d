//! Circle-overlap scan, the in-crate stand-in for the external collision
//! collaborator.
//!
//! The engine never polls for collisions; a host loop calls
//! `find_overlaps` on the world between ticks and feeds each report into
//! `SimulationEngine::report_overlap`. Only enabled colliders are
//! scanned, and a body only receives reports for tags it responds to.

use hecs::{Entity, World};

use rockfield_core::components::Collider;
use rockfield_core::enums::HitTag;
use rockfield_core::types::Position;

/// Which tag pairs produce a hit report: the actor reacts to obstacles,
/// obstacles react to projectiles and the actor, projectiles react to
/// obstacles. Obstacles never react to each other.
fn responds_to(own: HitTag, other: HitTag) -> bool {
    matches!(
        (own, other),
        (HitTag::Actor, HitTag::Obstacle)
            | (HitTag::Obstacle, HitTag::Actor)
            | (HitTag::Obstacle, HitTag::Projectile)
            | (HitTag::Projectile, HitTag::Obstacle)
    )
}

/// Scan all enabled collider pairs and return `(entity, other_tag)` hit
/// reports. At most one report per ordered pair per call.
pub fn find_overlaps(world: &World) -> Vec<(Entity, HitTag)> {
    let bodies: Vec<(Entity, glam::Vec2, f32, HitTag)> = world
        .query::<(&Position, &Collider)>()
        .iter()
        .filter(|(_, (_, collider))| collider.enabled)
        .map(|(entity, (pos, collider))| (entity, pos.0, collider.radius, collider.tag))
        .collect();

    let mut reports = Vec::new();
    for i in 0..bodies.len() {
        for j in (i + 1)..bodies.len() {
            let (a, a_pos, a_radius, a_tag) = bodies[i];
            let (b, b_pos, b_radius, b_tag) = bodies[j];

            let reach = a_radius + b_radius;
            if a_pos.distance_squared(b_pos) > reach * reach {
                continue;
            }

            if responds_to(a_tag, b_tag) {
                reports.push((a, b_tag));
            }
            if responds_to(b_tag, a_tag) {
                reports.push((b, a_tag));
            }
        }
    }

    reports
}
