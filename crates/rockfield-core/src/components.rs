//! ECS components for hecs entities.
//!
//! Components are plain data structs; game logic lives in systems.
//! Template-derived tuning values are copied into components at spawn
//! time so systems never reach back into configuration.

use serde::{Deserialize, Serialize};

use crate::enums::{HealthState, HitTag, ObstaclePhase};

/// Marks an entity as the player's ship.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Ship;

/// Life pool and invulnerability state machine for the actor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Health {
    pub max_lives: u32,
    pub lives: u32,
    pub state: HealthState,
    /// Normalized invulnerability timer (0..1); only meaningful while
    /// `state` is `Invulnerable`. Restarting a window overwrites this field.
    pub invuln_t: f32,
    /// Blink oscillator phase in radians, advanced while invulnerable.
    pub blink_phase: f32,
    /// Invulnerability window length (seconds).
    pub invulnerability_duration_secs: f32,
    /// One full blink cycle (seconds).
    pub blink_duration_secs: f32,
    /// Blink alpha midpoint.
    pub invulnerability_alpha: f32,
}

/// Ship steering, throttle, and weapon cooldown state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShipControl {
    /// Current scalar speed along `heading` (units/s).
    pub speed: f32,
    /// Facing angle in radians (0 = +X, counterclockwise).
    pub heading: f32,
    /// Elapsed-seconds timestamp of the last shot, if any.
    pub last_shot_secs: Option<f32>,
    pub max_speed: f32,
    pub acceleration: f32,
    pub turn_rate: f32,
    pub fire_rate: f32,
    pub projectile_speed: f32,
    pub projectile_ttl_secs: f32,
}

/// Resolved fragmentation data: which catalog template fragments use and
/// how many to spawn. Built from config at startup, never by string lookup
/// at hit time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SplitSpec {
    pub template_index: usize,
    pub count: u32,
}

/// Obstacle lifecycle state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObstacleState {
    /// Index into the session's obstacle catalog.
    pub template_index: usize,
    pub points_worth: u32,
    pub phase: ObstaclePhase,
    /// Facing angle assigned at spawn (for sprite rotation).
    pub heading: f32,
    /// Destruction-effect time left once `Destroying`; preloaded at spawn
    /// from the template's effect duration.
    pub delay_remaining_secs: f32,
    /// Present when this obstacle fragments on destruction.
    pub split: Option<SplitSpec>,
}

/// Marks an obstacle that counts toward the current wave's completion.
/// Fragments never carry this marker.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WaveMember;

/// A fired projectile; despawned when the TTL runs out or on reported
/// obstacle overlap.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    pub ttl_secs: f32,
}

/// Circular collision body. Disabled colliders are invisible to the
/// overlap scan and any reported hit against them is ignored.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Collider {
    pub radius: f32,
    pub enabled: bool,
    pub tag: HitTag,
}

/// Blink alpha for the visual collaborator: pure function of the blink
/// oscillator phase, oscillating between `2 * alpha - 1` and 1.
pub fn blink_alpha(blink_phase: f32, invulnerability_alpha: f32) -> f32 {
    blink_phase.cos() * (1.0 - invulnerability_alpha) + invulnerability_alpha
}
