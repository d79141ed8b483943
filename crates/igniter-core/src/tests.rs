#[cfg(test)]
mod tests {
    use std::io::Write;

    use crate::commands::HostCommand;
    use crate::config::{EngineConfig, IgniterConfig};
    use crate::constants::DEFAULT_ENGINE_ACTIONS;
    use crate::enums::*;
    use crate::error::ConfigError;
    use crate::events::{Decision, ScreenMessage};
    use crate::state::{IgnitionSnapshot, PersistedIgnition};
    use crate::types::{Remaining, SimTime};

    #[test]
    fn test_simulation_mode_serde() {
        let variants = vec![
            SimulationMode::Uninitialized,
            SimulationMode::EditorMode,
            SimulationMode::ActiveMode,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: SimulationMode = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
        assert_eq!(SimulationMode::default(), SimulationMode::Uninitialized);
    }

    #[test]
    fn test_only_active_mode_is_active() {
        assert!(SimulationMode::ActiveMode.is_active());
        assert!(!SimulationMode::EditorMode.is_active());
        assert!(!SimulationMode::Uninitialized.is_active());
    }

    #[test]
    fn test_decision_serde() {
        let decisions = vec![
            Decision::NoOp,
            Decision::Ignited {
                remaining: Remaining::Limited(3),
            },
            Decision::Ignited {
                remaining: Remaining::Unlimited,
            },
            Decision::Deignited,
            Decision::ForceShutdown,
        ];
        for d in decisions {
            let json = serde_json::to_string(&d).unwrap();
            let back: Decision = serde_json::from_str(&json).unwrap();
            assert_eq!(d, back);
        }
    }

    #[test]
    fn test_host_command_serde() {
        let json = r#"{"type":"Attach","mode":"ActiveMode"}"#;
        let cmd: HostCommand = serde_json::from_str(json).unwrap();
        assert!(matches!(
            cmd,
            HostCommand::Attach {
                mode: SimulationMode::ActiveMode
            }
        ));

        let json = r#"{"type":"SetThrottle","engine":"LV-909","throttle":0.5}"#;
        let cmd: HostCommand = serde_json::from_str(json).unwrap();
        match cmd {
            HostCommand::SetThrottle { engine, throttle } => {
                assert_eq!(engine, "LV-909");
                assert!((throttle - 0.5).abs() < 1e-6);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_remaining_semantics() {
        assert!(Remaining::Unlimited.allows_ignition());
        assert!(Remaining::Limited(1).allows_ignition());
        assert!(!Remaining::Limited(0).allows_ignition());
        assert_eq!(Remaining::Limited(4).count(), Some(4));
        assert_eq!(Remaining::Unlimited.count(), None);
        assert_eq!(Remaining::Limited(2).to_string(), "2");
        assert_eq!(Remaining::Unlimited.to_string(), "unlimited");
    }

    /// The persisted counter must survive a save/load unchanged.
    #[test]
    fn test_persisted_ignition_round_trip() {
        let record = PersistedIgnition {
            engine: "Mainsail".to_string(),
            ignitions_used: 7,
        };
        let json = serde_json::to_string(&record).unwrap();
        let back: PersistedIgnition = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }

    #[test]
    fn test_snapshot_serde() {
        let mut snapshot = IgnitionSnapshot::default();
        snapshot.messages.push(ScreenMessage {
            text: "Poodle has no ignitions remaining!".to_string(),
            duration_secs: 5.0,
            tick: 12,
        });
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: IgnitionSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.mode, SimulationMode::Uninitialized);
        assert_eq!(back.messages.len(), 1);
        assert_eq!(back.messages[0].tick, 12);
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..crate::constants::TICK_RATE {
            time.advance();
        }
        assert_eq!(time.tick, crate::constants::TICK_RATE as u64);
        assert!((time.elapsed_secs - 1.0).abs() < 1e-9);
    }

    // ---- Configuration ----

    #[test]
    fn test_config_defaults() {
        let config = IgniterConfig::from_json(
            r#"{"engines":[{"name":"LV-T30","ignitions_permitted":3}]}"#,
        )
        .unwrap();
        let engine = config.engine("LV-T30").unwrap();
        assert_eq!(engine.ignitions_permitted, 3);
        assert_eq!(engine.ignitions_used, 0);
        assert_eq!(engine.display_title(), "LV-T30");
        assert_eq!(engine.actions.len(), DEFAULT_ENGINE_ACTIONS.len());
    }

    #[test]
    fn test_config_missing_budget_is_unlimited() {
        let config = IgniterConfig::from_json(r#"{"engines":[{"name":"Spark"}]}"#).unwrap();
        assert_eq!(config.engines[0].ignitions_permitted, 0);
    }

    #[test]
    fn test_config_title_and_used() {
        let config = IgniterConfig::from_json(
            r#"{"engines":[{"name":"liquidEngine2","title":"LV-T45 Swivel",
                "ignitions_permitted":4,"ignitions_used":2,"actions":["Shutdown"]}]}"#,
        )
        .unwrap();
        let engine = &config.engines[0];
        assert_eq!(engine.display_title(), "LV-T45 Swivel");
        assert_eq!(engine.ignitions_used, 2);
        assert_eq!(engine.actions, vec!["Shutdown".to_string()]);
    }

    #[test]
    fn test_config_rejects_duplicates() {
        let err = IgniterConfig::from_json(
            r#"{"engines":[{"name":"A","ignitions_permitted":1},{"name":"A"}]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateEngine { ref name } if name == "A"));
    }

    #[test]
    fn test_config_rejects_empty_name() {
        let err = IgniterConfig::from_json(r#"{"engines":[{"name":"  "}]}"#).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyEngineName));
    }

    #[test]
    fn test_config_rejects_negative_used() {
        let err = IgniterConfig::from_json(
            r#"{"engines":[{"name":"A","ignitions_permitted":2,"ignitions_used":-1}]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_config_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"engines":[{{"name":"Terrier","ignitions_permitted":2}}]}}"#
        )
        .unwrap();
        let config = IgniterConfig::from_path(file.path()).unwrap();
        assert_eq!(config.engines.len(), 1);
    }

    #[test]
    fn test_config_from_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("engines.json");
        let err = IgniterConfig::from_path(&missing).unwrap_err();
        match err {
            ConfigError::Io { path, .. } => assert_eq!(path, missing),
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn test_engine_config_builder() {
        let engine = EngineConfig::new("Poodle", 2)
            .with_used(1)
            .with_title("RE-L10 Poodle");
        assert_eq!(engine.ignitions_used, 1);
        assert_eq!(engine.display_title(), "RE-L10 Poodle");
    }
}
