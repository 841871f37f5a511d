#[cfg(test)]
mod tests {
    use crate::commands::PlayerCommand;
    use crate::components::blink_alpha;
    use crate::config::{ConfigError, ObstacleTemplate, SessionConfig, SplitConfig};
    use crate::enums::*;
    use crate::events::GameEvent;
    use crate::state::GameStateSnapshot;
    use crate::types::{heading_dir, move_towards, SimTime};

    /// Verify all enums round-trip through serde_json.
    #[test]
    fn test_game_phase_serde() {
        let variants = vec![GamePhase::MainMenu, GamePhase::Active, GamePhase::GameOver];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: GamePhase = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_health_state_serde() {
        let variants = vec![
            HealthState::Vulnerable,
            HealthState::Invulnerable,
            HealthState::Dead,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: HealthState = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_obstacle_phase_serde() {
        let variants = vec![
            ObstaclePhase::Alive,
            ObstaclePhase::Destroying,
            ObstaclePhase::Removed,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: ObstaclePhase = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    /// Verify PlayerCommand round-trips through serde (tagged union).
    #[test]
    fn test_player_command_serde() {
        let commands = vec![
            PlayerCommand::StartSession,
            PlayerCommand::Restart,
            PlayerCommand::Thrust { amount: 0.75 },
            PlayerCommand::Turn { amount: -1.0 },
            PlayerCommand::Fire,
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: PlayerCommand = serde_json::from_str(&json).unwrap();
            // Compare JSON representations since PlayerCommand doesn't derive PartialEq
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    /// Verify GameEvent round-trips through serde.
    #[test]
    fn test_game_event_serde() {
        let events = vec![
            GameEvent::WaveStarted { wave: 3 },
            GameEvent::ObstacleDestroyed {
                points_worth: 10,
                position: glam::Vec2::new(4.0, -2.5),
            },
            GameEvent::AllObstaclesDestroyed { wave: 3 },
            GameEvent::ScoreChanged { score: 45 },
            GameEvent::ActorHit { lives_remaining: 2 },
            GameEvent::ActorDied,
            GameEvent::GameOver { final_score: 120 },
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            let back: GameEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(*event, back);
        }
    }

    /// Verify GameStateSnapshot can be serialized to JSON.
    #[test]
    fn test_snapshot_serde() {
        let snapshot = GameStateSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.time.tick, back.time.tick);
        assert_eq!(snapshot.phase, back.phase);
        assert!(
            json.len() < 1024,
            "Empty snapshot should be <1KB, was {} bytes",
            json.len()
        );
    }

    /// Verify SimTime advancement.
    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        assert_eq!(time.tick, 0);
        assert_eq!(time.elapsed_secs, 0.0);

        for _ in 0..60 {
            time.advance();
        }
        assert_eq!(time.tick, 60);
        // 60 ticks at 60Hz = 1 second
        assert!((time.elapsed_secs - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_heading_dir() {
        let east = heading_dir(0.0);
        assert!((east.x - 1.0).abs() < 1e-6);
        assert!(east.y.abs() < 1e-6);

        let north = heading_dir(std::f32::consts::FRAC_PI_2);
        assert!(north.x.abs() < 1e-6);
        assert!((north.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_move_towards_clamps_step() {
        assert_eq!(move_towards(0.0, 10.0, 3.0), 3.0);
        assert_eq!(move_towards(9.0, 10.0, 3.0), 10.0);
        assert_eq!(move_towards(10.0, 0.0, 4.0), 6.0);
        assert_eq!(move_towards(5.0, 5.0, 1.0), 5.0);
    }

    /// The blink starts fully opaque and oscillates within
    /// [2*alpha - 1, 1] around the configured midpoint.
    #[test]
    fn test_blink_alpha_bounds() {
        let alpha = 0.75;
        assert!((blink_alpha(0.0, alpha) - 1.0).abs() < 1e-6);

        let floor = 2.0 * alpha - 1.0;
        let mut phase = 0.0f32;
        let mut saw_dip = false;
        while phase < 2.0 * std::f32::consts::TAU {
            let a = blink_alpha(phase, alpha);
            assert!((floor - 1e-6..=1.0 + 1e-6).contains(&a), "alpha {a} out of range");
            if a < alpha {
                saw_dip = true;
            }
            phase += 0.05;
        }
        assert!(saw_dip, "Blink should dip below the midpoint");
    }

    // ---- Configuration validation ----

    #[test]
    fn test_default_config_is_valid() {
        let config = SessionConfig::default();
        let catalog = config.resolve().expect("default config should validate");
        assert_eq!(catalog.wave_pool, vec![0]);
        assert_eq!(catalog.splits.len(), config.templates.len());
        // Large rocks split into two small rocks.
        let split = catalog.splits[0].expect("large rock should split");
        assert_eq!(split.count, 2);
        assert_eq!(split.template_index, 1);
        assert!(catalog.splits[1].is_none());
    }

    #[test]
    fn test_empty_spawn_points_is_fatal() {
        let mut config = SessionConfig::default();
        config.spawn_points.clear();
        assert_eq!(config.validate(), Err(ConfigError::NoSpawnPoints));
    }

    #[test]
    fn test_empty_wave_catalog_is_fatal() {
        let mut config = SessionConfig::default();
        config.wave_templates.clear();
        assert_eq!(config.validate(), Err(ConfigError::EmptyWaveCatalog));
    }

    #[test]
    fn test_unknown_wave_template_is_fatal() {
        let mut config = SessionConfig::default();
        config.wave_templates = vec!["comet".to_string()];
        assert_eq!(
            config.validate(),
            Err(ConfigError::UnknownWaveTemplate {
                id: "comet".to_string()
            })
        );
    }

    #[test]
    fn test_dangling_fragment_reference_is_fatal() {
        let mut config = SessionConfig::default();
        config.templates[0].split = Some(SplitConfig {
            fragment_template: "missing".to_string(),
            count: 2,
        });
        assert_eq!(
            config.validate(),
            Err(ConfigError::UnknownFragmentTemplate {
                template: "asteroid-large".to_string(),
                fragment: "missing".to_string(),
            })
        );
    }

    #[test]
    fn test_zero_fragment_count_is_fatal() {
        let mut config = SessionConfig::default();
        config.templates[0].split = Some(SplitConfig {
            fragment_template: "asteroid-small".to_string(),
            count: 0,
        });
        assert_eq!(
            config.validate(),
            Err(ConfigError::ZeroFragmentCount {
                template: "asteroid-large".to_string()
            })
        );
    }

    #[test]
    fn test_zero_max_lives_is_fatal() {
        let mut config = SessionConfig::default();
        config.ship.max_lives = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroMaxLives));
    }

    /// Self-referential splits are valid data: recursion depth is bounded
    /// only by what the designer writes down.
    #[test]
    fn test_self_referential_split_is_valid() {
        let config = SessionConfig {
            templates: vec![ObstacleTemplate {
                id: "rock".to_string(),
                points_worth: 10,
                radius: 2.0,
                drift_speed: 1.0,
                destruction_delay_secs: 0.5,
                split: Some(SplitConfig {
                    fragment_template: "rock".to_string(),
                    count: 2,
                }),
            }],
            wave_templates: vec!["rock".to_string()],
            ..SessionConfig::default()
        };
        let catalog = config.resolve().unwrap();
        assert_eq!(catalog.splits[0].unwrap().template_index, 0);
    }

    #[test]
    fn test_config_serde_round_trip() {
        let config = SessionConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: SessionConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.templates.len(), config.templates.len());
        assert_eq!(back.spawn_points.len(), config.spawn_points.len());
        assert_eq!(back.spawn_points[0], config.spawn_points[0]);
        assert!(back.spawn_points[0].length() > 0.0);
        assert_eq!(back.ship.max_lives, config.ship.max_lives);
    }

    #[test]
    fn test_template_index_lookup() {
        let config = SessionConfig::default();
        assert_eq!(config.template_index("asteroid-large"), Some(0));
        assert_eq!(config.template_index("asteroid-small"), Some(1));
        assert_eq!(config.template_index("nope"), None);
    }
}
