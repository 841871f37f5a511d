//! Simulation engine, the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands,
//! runs all systems, accepts push-based overlap reports from the
//! collision collaborator, and produces `GameStateSnapshot`s.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use rockfield_core::commands::PlayerCommand;
use rockfield_core::components::{ObstacleState, Projectile, Ship};
use rockfield_core::config::{ConfigError, ResolvedCatalog, SessionConfig};
use rockfield_core::enums::{GamePhase, HitTag};
use rockfield_core::events::GameEvent;
use rockfield_core::state::GameStateSnapshot;
use rockfield_core::types::SimTime;

use crate::systems;
use crate::systems::health::DamageOutcome;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed + same script = same simulation.
    pub seed: u64,
    /// Static session configuration, validated at construction.
    pub session: SessionConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            session: SessionConfig::default(),
        }
    }
}

/// Wave progression state, derived purely from destruction events.
/// Never owns obstacle entities.
#[derive(Debug, Clone, Copy, Default)]
pub struct WaveState {
    /// Current wave number; 0 until the first wave spawns.
    pub number: u32,
    /// Originally-spawned obstacles of this wave still alive. Fragments
    /// are not tracked here.
    pub live_count: u32,
}

/// The simulation engine. Owns the ECS world and all session state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    rng: ChaCha8Rng,
    session: SessionConfig,
    catalog: ResolvedCatalog,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<GameEvent>,
    wave: WaveState,
    score: u32,
    ship: Option<hecs::Entity>,
}

impl SimulationEngine {
    /// Create a new simulation engine. Fails fast on invalid session
    /// configuration; spawn paths never re-validate.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        let catalog = config.session.resolve()?;
        Ok(Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            session: config.session,
            catalog,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            wave: WaveState::default(),
            score: 0,
            ship: None,
        })
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    ///
    /// Systems keep running in GameOver so destruction tails play out and
    /// the field keeps drifting behind the game-over screen; only the
    /// main menu is fully static.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        if self.phase != GamePhase::MainMenu {
            self.run_systems();
            self.time.advance();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            self.wave,
            self.score,
            events,
        )
    }

    /// Report a collision overlap from the external collision
    /// collaborator: `entity` overlapped a body tagged `other`.
    ///
    /// Hit processing is fully synchronous before this returns. A
    /// destroyed obstacle's collider is disabled inline, so a second
    /// report for the same obstacle within the same tick is a no-op.
    pub fn report_overlap(&mut self, entity: hecs::Entity, other: HitTag) {
        match other {
            HitTag::Obstacle => {
                if self.world.satisfies::<&Ship>(entity).unwrap_or(false) {
                    self.damage_actor(entity, 1);
                } else if self.world.satisfies::<&Projectile>(entity).unwrap_or(false) {
                    let _ = self.world.despawn(entity);
                }
            }
            HitTag::Projectile | HitTag::Actor => {
                if self.world.satisfies::<&ObstacleState>(entity).unwrap_or(false) {
                    self.obstacle_hit(entity);
                }
            }
        }
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the current score.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Get the current wave state.
    pub fn wave(&self) -> WaveState {
        self.wave
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get a mutable reference to the ECS world (for test scaffolding).
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartSession => {
                if self.phase == GamePhase::MainMenu {
                    self.start_session();
                }
            }
            PlayerCommand::Restart => {
                if self.phase == GamePhase::GameOver {
                    self.start_session();
                }
            }
            PlayerCommand::Thrust { amount } => {
                if let Some(ship) = self.actor() {
                    systems::ship_control::thrust(&mut self.world, ship, amount);
                }
            }
            PlayerCommand::Turn { amount } => {
                if let Some(ship) = self.actor() {
                    systems::ship_control::turn(&mut self.world, ship, amount);
                }
            }
            PlayerCommand::Fire => {
                if let Some(ship) = self.actor() {
                    systems::ship_control::fire(&mut self.world, ship, self.time.elapsed_secs);
                }
            }
        }
    }

    /// The actor entity, if a session is running.
    fn actor(&self) -> Option<hecs::Entity> {
        if self.phase == GamePhase::MainMenu {
            None
        } else {
            self.ship
        }
    }

    /// Tear down any previous session and start a fresh one: score 0,
    /// wave counter 0, new actor at the origin, then wave 1.
    fn start_session(&mut self) {
        self.world.clear();
        self.time = SimTime::default();
        self.wave = WaveState::default();
        self.score = 0;
        self.events.clear();
        self.phase = GamePhase::Active;
        self.ship = Some(world_setup::spawn_ship(&mut self.world, &self.session.ship));

        log::info!("session started");
        self.start_next_wave();
    }

    /// Spawn the next wave with an escalating obstacle budget.
    fn start_next_wave(&mut self) {
        self.wave.number += 1;
        let budget = self.session.initial_obstacle_count
            + self.session.obstacle_increase_per_wave * (self.wave.number - 1);

        let _ = systems::wave_spawner::spawn_wave(
            &mut self.world,
            &mut self.rng,
            &self.session,
            &self.catalog,
            budget,
        );
        self.wave.live_count = budget;
        self.events.push(GameEvent::WaveStarted {
            wave: self.wave.number,
        });
        log::info!("wave {} started: {} obstacles", self.wave.number, budget);
    }

    /// Apply damage to the actor and map the outcome to session state.
    fn damage_actor(&mut self, ship: hecs::Entity, amount: i32) {
        let outcome =
            systems::health::apply_damage(&mut self.world, ship, amount, &mut self.events);
        if outcome == DamageOutcome::Died && self.phase == GamePhase::Active {
            self.phase = GamePhase::GameOver;
            self.events.push(GameEvent::GameOver {
                final_score: self.score,
            });
            log::info!("game over, final score {}", self.score);
        }
    }

    /// Process a hit on an obstacle: scoring and wave accounting. Both
    /// stop once the session is over; destruction itself still runs so
    /// the field visibly clears.
    fn obstacle_hit(&mut self, obstacle: hecs::Entity) {
        let Some(outcome) = systems::lifecycle::on_hit(
            &mut self.world,
            &mut self.rng,
            &self.session,
            &self.catalog,
            obstacle,
            &mut self.events,
        ) else {
            return;
        };

        if self.phase != GamePhase::Active {
            return;
        }

        self.score += outcome.points_worth;
        self.events.push(GameEvent::ScoreChanged { score: self.score });

        if outcome.wave_member {
            self.wave.live_count -= 1;
            if self.wave.live_count == 0 {
                self.events.push(GameEvent::AllObstaclesDestroyed {
                    wave: self.wave.number,
                });
                self.start_next_wave();
            }
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Ship steering integration
        systems::ship_control::integrate(&mut self.world);
        // 2. Obstacle/projectile drift
        systems::movement::run(&mut self.world);
        // 3. Invulnerability countdown
        systems::health::run(&mut self.world);
        // 4. Destruction delays and projectile TTLs
        systems::lifecycle::run(&mut self.world);
        // 5. Cleanup (removed obstacles, expired projectiles)
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
    }
}
