//! Entity spawn factories for setting up the simulation world.
//!
//! Creates the player ship, obstacles (wave members and fragments), and
//! projectiles with appropriate component bundles. This is the
//! instantiation-factory seam: everything that enters the world goes
//! through one of these functions.

use glam::Vec2;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use rockfield_core::components::*;
use rockfield_core::config::{ResolvedCatalog, SessionConfig, ShipTemplate};
use rockfield_core::enums::{HealthState, HitTag, ObstaclePhase};
use rockfield_core::types::{heading_dir, Position, Velocity};

/// Spawn the player's ship at the origin, facing +Y. Lives start full
/// and the invulnerability machine starts vulnerable.
pub fn spawn_ship(world: &mut World, template: &ShipTemplate) -> hecs::Entity {
    let health = Health {
        max_lives: template.max_lives,
        lives: template.max_lives,
        state: HealthState::Vulnerable,
        invuln_t: 0.0,
        blink_phase: 0.0,
        invulnerability_duration_secs: template.invulnerability_duration_secs,
        blink_duration_secs: template.blink_duration_secs,
        invulnerability_alpha: template.invulnerability_alpha,
    };

    let control = ShipControl {
        speed: 0.0,
        heading: std::f32::consts::FRAC_PI_2,
        last_shot_secs: None,
        max_speed: template.max_speed,
        acceleration: template.acceleration,
        turn_rate: template.turn_rate,
        fire_rate: template.fire_rate,
        projectile_speed: template.projectile_speed,
        projectile_ttl_secs: template.projectile_ttl_secs,
    };

    world.spawn((
        Ship,
        Position(Vec2::ZERO),
        health,
        control,
        Collider {
            radius: template.radius,
            enabled: true,
            tag: HitTag::Actor,
        },
    ))
}

/// Spawn one obstacle from the catalog at a fixed position with a uniform
/// random heading. `wave_member` marks obstacles that count toward wave
/// completion; fragments are spawned without it.
pub fn spawn_obstacle(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    session: &SessionConfig,
    catalog: &ResolvedCatalog,
    template_index: usize,
    position: Vec2,
    wave_member: bool,
) -> hecs::Entity {
    let template = &session.templates[template_index];
    let heading: f32 = rng.gen_range(0.0..std::f32::consts::TAU);

    let state = ObstacleState {
        template_index,
        points_worth: template.points_worth,
        phase: ObstaclePhase::Alive,
        heading,
        delay_remaining_secs: template.destruction_delay_secs,
        split: catalog.splits[template_index],
    };

    let entity = world.spawn((
        state,
        Position(position),
        Velocity(heading_dir(heading) * template.drift_speed),
        Collider {
            radius: template.radius,
            enabled: true,
            tag: HitTag::Obstacle,
        },
    ));

    if wave_member {
        let _ = world.insert_one(entity, WaveMember);
    }

    entity
}

/// Spawn a projectile at the given muzzle position and heading.
pub fn spawn_projectile(
    world: &mut World,
    position: Vec2,
    heading: f32,
    speed: f32,
    ttl_secs: f32,
) -> hecs::Entity {
    world.spawn((
        Projectile { ttl_secs },
        Position(position),
        Velocity(heading_dir(heading) * speed),
        Collider {
            radius: rockfield_core::constants::PROJECTILE_RADIUS,
            enabled: true,
            tag: HitTag::Projectile,
        },
    ))
}
