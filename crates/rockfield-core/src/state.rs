//! Game state snapshot: the complete visible state produced each tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::{GamePhase, HealthState, ObstaclePhase};
use crate::events::GameEvent;
use crate::types::SimTime;

/// Complete game state handed to the host after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    /// Current wave number (0 before the first wave spawns).
    pub wave: u32,
    /// Originally-spawned obstacles of the current wave still alive.
    pub obstacles_remaining: u32,
    pub score: u32,
    pub ship: Option<ShipView>,
    pub obstacles: Vec<ObstacleView>,
    pub projectiles: Vec<ProjectileView>,
    /// Events emitted since the previous snapshot, drained exactly once.
    pub events: Vec<GameEvent>,
}

/// The player ship as seen by the renderer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShipView {
    pub position: Vec2,
    pub heading: f32,
    pub speed: f32,
    pub lives: u32,
    pub max_lives: u32,
    pub state: HealthState,
    /// Sprite opacity: 1.0 while vulnerable, the blink value while
    /// invulnerable, 0.0 once dead.
    pub sprite_alpha: f32,
}

/// One obstacle as seen by the renderer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObstacleView {
    pub position: Vec2,
    pub heading: f32,
    pub radius: f32,
    pub points_worth: u32,
    pub phase: ObstaclePhase,
}

/// One projectile in flight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub position: Vec2,
    pub heading: f32,
}
