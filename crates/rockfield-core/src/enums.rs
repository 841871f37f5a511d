//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Game phase (top-level session state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    MainMenu,
    /// Session running: waves spawn, input is processed, score accumulates.
    Active,
    /// The actor is dead. Destruction tails keep playing, but no new waves
    /// start, no points are scored, and actor input is rejected.
    GameOver,
}

/// The actor's damage state machine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthState {
    /// Alive and collidable.
    #[default]
    Vulnerable,
    /// Alive but ignoring damage while the invulnerability timer runs.
    Invulnerable,
    /// Terminal: the life pool reached zero. No damage or input accepted.
    Dead,
}

/// Obstacle lifecycle phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstaclePhase {
    #[default]
    Alive,
    /// Logically destroyed (scored, fragments spawned, collider off);
    /// lingering while the destruction effect plays.
    Destroying,
    /// Destruction delay elapsed; despawned by the cleanup system.
    Removed,
}

/// Collision tag distinguishing the three body kinds reported by the
/// external overlap collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HitTag {
    Actor,
    Obstacle,
    Projectile,
}
