//! Ship steering, throttle, and fire handling.
//!
//! Inputs arrive as normalized per-tick scalars through the command
//! queue. Every entry point silently rejects input once the actor is
//! dead; the husk keeps whatever residual speed it had.

use hecs::{Entity, World};

use rockfield_core::components::{Collider, Health, ShipControl};
use rockfield_core::constants::DT;
use rockfield_core::enums::HealthState;
use rockfield_core::types::{heading_dir, move_towards, Position};

use crate::world_setup;

/// Apply forward thrust input for this tick. Negative input is clamped
/// away; zero input decelerates toward a stop.
pub fn thrust(world: &mut World, ship: Entity, amount: f32) {
    let Ok((control, health)) = world.query_one_mut::<(&mut ShipControl, &Health)>(ship) else {
        return;
    };
    if health.state == HealthState::Dead {
        return;
    }

    let amount = amount.max(0.0);
    let target_speed = amount * control.max_speed;
    if target_speed == control.speed {
        return;
    }

    // Throttling up scales with the input; letting go brakes at full rate.
    let acceleration = if amount > 0.0 {
        amount * control.acceleration
    } else {
        control.acceleration
    };
    control.speed = move_towards(control.speed, target_speed, acceleration * DT);
}

/// Apply side input for this tick, rotating the heading. Positive input
/// turns clockwise.
pub fn turn(world: &mut World, ship: Entity, amount: f32) {
    let Ok((control, health)) = world.query_one_mut::<(&mut ShipControl, &Health)>(ship) else {
        return;
    };
    if health.state == HealthState::Dead || amount == 0.0 {
        return;
    }

    control.heading -= amount * control.turn_rate * DT;
}

/// Attempt to fire one shot, subject to the fire-rate cooldown. Spawns a
/// projectile at the nozzle (ship position offset along the heading by
/// the collider radius).
pub fn fire(world: &mut World, ship: Entity, elapsed_secs: f32) {
    let (muzzle, heading, speed, ttl) = {
        let Ok((pos, collider, control, health)) =
            world.query_one_mut::<(&Position, &Collider, &mut ShipControl, &Health)>(ship)
        else {
            return;
        };
        if health.state == HealthState::Dead {
            return;
        }

        let secs_per_shot = 1.0 / control.fire_rate;
        if let Some(last) = control.last_shot_secs {
            if elapsed_secs - last < secs_per_shot {
                return;
            }
        }
        control.last_shot_secs = Some(elapsed_secs);

        (
            pos.0 + heading_dir(control.heading) * collider.radius,
            control.heading,
            control.projectile_speed,
            control.projectile_ttl_secs,
        )
    };

    let _ = world_setup::spawn_projectile(world, muzzle, heading, speed, ttl);
}

/// Integrate ship position from steering state: position advances along
/// the heading at the current scalar speed.
pub fn integrate(world: &mut World) {
    for (_entity, (pos, control)) in world.query_mut::<(&mut Position, &ShipControl)>() {
        pos.0 += heading_dir(control.heading) * control.speed * DT;
    }
}
