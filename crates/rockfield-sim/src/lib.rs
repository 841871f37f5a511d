//! Simulation engine for ROCKFIELD.
//!
//! Owns the hecs ECS world, advances it one tick at a time, accepts
//! push-based collision overlap reports, and produces GameStateSnapshots.
//! Completely headless (no rendering or audio dependency), enabling
//! deterministic testing.

pub mod engine;
pub mod systems;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use rockfield_core as core;
