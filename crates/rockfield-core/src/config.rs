//! Session configuration: spawn points, obstacle catalog, ship template,
//! and wave progression parameters.
//!
//! Configuration is validated once at engine construction. Anything that
//! could make a spawn fail later (empty spawn-point set, empty wave
//! catalog, dangling fragment reference) is a fatal error here, not a
//! runtime condition.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::components::SplitSpec;
use crate::constants::*;

/// Complete static configuration for one play session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Obstacles spawned in wave 1.
    pub initial_obstacle_count: u32,
    /// Budget increase per subsequent wave.
    pub obstacle_increase_per_wave: u32,
    /// World positions obstacles may spawn at; shuffled once per wave and
    /// consumed round-robin.
    pub spawn_points: Vec<Vec2>,
    /// Full obstacle catalog, including fragment-only templates.
    pub templates: Vec<ObstacleTemplate>,
    /// Ids of templates eligible for wave spawning. Fragment-only
    /// templates are referenced by `split` entries instead.
    pub wave_templates: Vec<String>,
    pub ship: ShipTemplate,
}

/// One obstacle archetype.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObstacleTemplate {
    pub id: String,
    pub points_worth: u32,
    pub radius: f32,
    /// Constant drift speed along the random spawn heading (units/s).
    pub drift_speed: f32,
    /// Destruction-effect duration: how long a destroyed obstacle lingers
    /// before removal. Supplied by the effects collaborator.
    pub destruction_delay_secs: f32,
    pub split: Option<SplitConfig>,
}

/// Fragmentation settings for a splitting obstacle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitConfig {
    /// Id of the template fragments are built from. May equal the parent's
    /// own id; recursion depth is bounded only by this data.
    pub fragment_template: String,
    pub count: u32,
}

/// The actor archetype the session spawns its ship from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShipTemplate {
    pub max_lives: u32,
    pub max_speed: f32,
    pub acceleration: f32,
    pub turn_rate: f32,
    pub fire_rate: f32,
    pub radius: f32,
    pub invulnerability_duration_secs: f32,
    pub blink_duration_secs: f32,
    pub invulnerability_alpha: f32,
    pub projectile_speed: f32,
    pub projectile_ttl_secs: f32,
}

/// Fatal configuration errors surfaced at startup validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("spawn point set is empty")]
    NoSpawnPoints,
    #[error("wave template list is empty")]
    EmptyWaveCatalog,
    #[error("wave template `{id}` not found in the obstacle catalog")]
    UnknownWaveTemplate { id: String },
    #[error("template `{template}` references unknown fragment template `{fragment}`")]
    UnknownFragmentTemplate { template: String, fragment: String },
    #[error("template `{template}` splits into zero fragments")]
    ZeroFragmentCount { template: String },
    #[error("ship template has zero max lives")]
    ZeroMaxLives,
}

/// Catalog references resolved to indices, computed once at startup.
#[derive(Debug, Clone)]
pub struct ResolvedCatalog {
    /// Template indices eligible for wave spawning.
    pub wave_pool: Vec<usize>,
    /// Per-template fragmentation spec, indexed like `templates`.
    pub splits: Vec<Option<SplitSpec>>,
}

impl SessionConfig {
    /// Look up a template index by id.
    pub fn template_index(&self, id: &str) -> Option<usize> {
        self.templates.iter().position(|t| t.id == id)
    }

    /// Validate the configuration without keeping the resolved catalog.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.resolve().map(|_| ())
    }

    /// Validate and resolve all template references to catalog indices.
    pub fn resolve(&self) -> Result<ResolvedCatalog, ConfigError> {
        if self.spawn_points.is_empty() {
            return Err(ConfigError::NoSpawnPoints);
        }
        if self.wave_templates.is_empty() || self.templates.is_empty() {
            return Err(ConfigError::EmptyWaveCatalog);
        }
        if self.ship.max_lives == 0 {
            return Err(ConfigError::ZeroMaxLives);
        }

        let mut wave_pool = Vec::with_capacity(self.wave_templates.len());
        for id in &self.wave_templates {
            let index = self
                .template_index(id)
                .ok_or_else(|| ConfigError::UnknownWaveTemplate { id: id.clone() })?;
            wave_pool.push(index);
        }

        let mut splits = Vec::with_capacity(self.templates.len());
        for template in &self.templates {
            let spec = match &template.split {
                None => None,
                Some(split) => {
                    if split.count == 0 {
                        return Err(ConfigError::ZeroFragmentCount {
                            template: template.id.clone(),
                        });
                    }
                    let index = self.template_index(&split.fragment_template).ok_or_else(|| {
                        ConfigError::UnknownFragmentTemplate {
                            template: template.id.clone(),
                            fragment: split.fragment_template.clone(),
                        }
                    })?;
                    Some(SplitSpec {
                        template_index: index,
                        count: split.count,
                    })
                }
            };
            splits.push(spec);
        }

        Ok(ResolvedCatalog { wave_pool, splits })
    }
}

impl Default for SessionConfig {
    /// Default tuning: large rocks spawn on a ring and split into two
    /// small rocks each.
    fn default() -> Self {
        let spawn_points = (0..DEFAULT_SPAWN_POINT_COUNT)
            .map(|i| {
                let angle = std::f32::consts::TAU * i as f32 / DEFAULT_SPAWN_POINT_COUNT as f32;
                Vec2::new(angle.cos(), angle.sin()) * DEFAULT_SPAWN_RING_RADIUS
            })
            .collect();

        Self {
            initial_obstacle_count: DEFAULT_INITIAL_OBSTACLE_COUNT,
            obstacle_increase_per_wave: DEFAULT_OBSTACLE_INCREASE_PER_WAVE,
            spawn_points,
            templates: vec![
                ObstacleTemplate {
                    id: "asteroid-large".to_string(),
                    points_worth: 10,
                    radius: 3.0,
                    drift_speed: 1.5,
                    destruction_delay_secs: 0.8,
                    split: Some(SplitConfig {
                        fragment_template: "asteroid-small".to_string(),
                        count: 2,
                    }),
                },
                ObstacleTemplate {
                    id: "asteroid-small".to_string(),
                    points_worth: 5,
                    radius: 1.5,
                    drift_speed: 2.5,
                    destruction_delay_secs: 0.6,
                    split: None,
                },
            ],
            wave_templates: vec!["asteroid-large".to_string()],
            ship: ShipTemplate::default(),
        }
    }
}

impl Default for ShipTemplate {
    fn default() -> Self {
        Self {
            max_lives: DEFAULT_MAX_LIVES,
            max_speed: DEFAULT_SHIP_MAX_SPEED,
            acceleration: DEFAULT_SHIP_ACCELERATION,
            turn_rate: DEFAULT_SHIP_TURN_RATE,
            fire_rate: DEFAULT_SHIP_FIRE_RATE,
            radius: DEFAULT_SHIP_RADIUS,
            invulnerability_duration_secs: DEFAULT_INVULNERABILITY_DURATION_SECS,
            blink_duration_secs: DEFAULT_BLINK_DURATION_SECS,
            invulnerability_alpha: DEFAULT_INVULNERABILITY_ALPHA,
            projectile_speed: DEFAULT_PROJECTILE_SPEED,
            projectile_ttl_secs: DEFAULT_PROJECTILE_TTL_SECS,
        }
    }
}
