//! Kinematic integration system.
//!
//! Updates Position from Velocity each tick: position += velocity * dt.
//! The ship has no Velocity component; its integration lives in
//! `ship_control` because speed and heading are steering state.

use hecs::World;

use rockfield_core::constants::DT;
use rockfield_core::types::{Position, Velocity};

/// Run kinematic integration for all entities with Position + Velocity.
pub fn run(world: &mut World) {
    for (_entity, (pos, vel)) in world.query_mut::<(&mut Position, &Velocity)>() {
        pos.0 += vel.0 * DT;
    }
}
