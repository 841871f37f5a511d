//! Events emitted by the simulation for UI, audio, and session collaborators.
//!
//! Events accumulate during a tick (and during synchronous hit processing
//! between ticks) and are drained into the next snapshot exactly once.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Notifications exposed to external collaborators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A new wave has spawned.
    WaveStarted { wave: u32 },
    /// An obstacle was logically destroyed (fired exactly once per
    /// obstacle). Carries the destruction site for effect and audio
    /// collaborators.
    ObstacleDestroyed { points_worth: u32, position: Vec2 },
    /// Every originally-spawned obstacle of the wave is destroyed.
    /// Fires once per wave clear, before the next `WaveStarted`.
    AllObstaclesDestroyed { wave: u32 },
    /// The session score changed.
    ScoreChanged { score: u32 },
    /// The actor took damage but survived.
    ActorHit { lives_remaining: u32 },
    /// The actor's life pool reached zero.
    ActorDied,
    /// Session over; carries the final score for the game-over collaborator.
    GameOver { final_score: u32 },
}
