//! Simulation constants and default tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f32 = 1.0 / TICK_RATE as f32;

// --- Wave progression ---

/// Obstacles spawned in the first wave.
pub const DEFAULT_INITIAL_OBSTACLE_COUNT: u32 = 2;

/// Additional obstacles per subsequent wave.
pub const DEFAULT_OBSTACLE_INCREASE_PER_WAVE: u32 = 1;

// --- Ship defaults ---

/// Starting (and maximum) life count.
pub const DEFAULT_MAX_LIVES: u32 = 3;

/// Top ship speed (units/s).
pub const DEFAULT_SHIP_MAX_SPEED: f32 = 5.0;

/// Thrust acceleration (units/s²).
pub const DEFAULT_SHIP_ACCELERATION: f32 = 18.75;

/// Turn rate at full side input (radians/s).
pub const DEFAULT_SHIP_TURN_RATE: f32 = 2.6;

/// Fire rate in shots per second.
pub const DEFAULT_SHIP_FIRE_RATE: f32 = 1.0;

/// Ship collider radius.
pub const DEFAULT_SHIP_RADIUS: f32 = 1.0;

// --- Invulnerability ---

/// Post-hit invulnerability window (seconds).
pub const DEFAULT_INVULNERABILITY_DURATION_SECS: f32 = 4.0;

/// Period of one full blink cycle during invulnerability (seconds).
pub const DEFAULT_BLINK_DURATION_SECS: f32 = 0.5;

/// Blink alpha midpoint; the sprite alpha oscillates around this value.
pub const DEFAULT_INVULNERABILITY_ALPHA: f32 = 0.75;

// --- Projectiles ---

/// Projectile muzzle speed (units/s).
pub const DEFAULT_PROJECTILE_SPEED: f32 = 12.0;

/// Projectile lifetime before despawn (seconds).
pub const DEFAULT_PROJECTILE_TTL_SECS: f32 = 1.5;

/// Projectile collider radius.
pub const PROJECTILE_RADIUS: f32 = 0.2;

// --- Spawn layout ---

/// Radius of the default ring of obstacle spawn points.
pub const DEFAULT_SPAWN_RING_RADIUS: f32 = 18.0;

/// Number of points on the default spawn ring.
pub const DEFAULT_SPAWN_POINT_COUNT: usize = 6;
