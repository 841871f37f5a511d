//! Player commands sent from the host to the simulation.
//!
//! Commands are queued and processed at the next tick boundary. Movement
//! and fire inputs arrive as already-normalized scalars per tick; there is
//! no input-device abstraction here.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Begin a new session from the main menu: fresh actor, score 0, wave 1.
    StartSession,
    /// Re-initialize after game over: identical to a fresh session start.
    Restart,
    /// Forward thrust input for this tick, normalized 0..1 (negative values
    /// are clamped away).
    Thrust { amount: f32 },
    /// Side/turn input for this tick, normalized -1..1.
    Turn { amount: f32 },
    /// Fire one shot, subject to the fire-rate cooldown.
    Fire,
}
