//! The actor's damage state machine and invulnerability timer.

use hecs::{Entity, World};

use rockfield_core::components::{Collider, Health};
use rockfield_core::constants::DT;
use rockfield_core::enums::HealthState;
use rockfield_core::events::GameEvent;

/// Result of a damage application, for the session orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    /// No state change: dead, invulnerable, or non-positive amount.
    Ignored,
    /// Lives decremented; the invulnerability window (re)started.
    Damaged { lives_remaining: u32 },
    /// The life pool reached zero; `ActorDied` was emitted.
    Died,
}

/// Apply damage to an actor. Negative amounts are clamped to zero before
/// application; zero is a no-op. Damage is ignored while invulnerable or
/// dead. A surviving hit disables the collider and restarts the
/// invulnerability countdown by overwriting the timer fields.
pub fn apply_damage(
    world: &mut World,
    actor: Entity,
    amount: i32,
    events: &mut Vec<GameEvent>,
) -> DamageOutcome {
    let amount = amount.max(0) as u32;
    if amount == 0 {
        return DamageOutcome::Ignored;
    }

    let Ok((health, collider)) = world.query_one_mut::<(&mut Health, &mut Collider)>(actor) else {
        return DamageOutcome::Ignored;
    };

    match health.state {
        HealthState::Dead | HealthState::Invulnerable => DamageOutcome::Ignored,
        HealthState::Vulnerable => {
            health.lives = health.lives.saturating_sub(amount);
            collider.enabled = false;

            if health.lives == 0 {
                health.state = HealthState::Dead;
                events.push(GameEvent::ActorDied);
                DamageOutcome::Died
            } else {
                health.state = HealthState::Invulnerable;
                health.invuln_t = 0.0;
                health.blink_phase = 0.0;
                events.push(GameEvent::ActorHit {
                    lives_remaining: health.lives,
                });
                DamageOutcome::Damaged {
                    lives_remaining: health.lives,
                }
            }
        }
    }
}

/// Advance invulnerability timers one tick. The normalized timer grows by
/// `dt / duration`; the blink phase by `TAU * dt / blink_duration`. When
/// the timer reaches 1 the actor returns to Vulnerable, opacity is
/// restored, and the collider is re-enabled.
pub fn run(world: &mut World) {
    for (_entity, (health, collider)) in world.query_mut::<(&mut Health, &mut Collider)>() {
        if health.state != HealthState::Invulnerable {
            continue;
        }

        health.invuln_t += DT / health.invulnerability_duration_secs;
        health.blink_phase += std::f32::consts::TAU * DT / health.blink_duration_secs;

        if health.invuln_t >= 1.0 {
            health.state = HealthState::Vulnerable;
            health.invuln_t = 0.0;
            health.blink_phase = 0.0;
            collider.enabled = true;
        }
    }
}
