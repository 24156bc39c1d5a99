#[cfg(test)]
mod tests {
    use crate::commands::{InputSnapshot, PlayerCommand};
    use crate::constants::{DT, TICK_RATE};
    use crate::enums::*;
    use crate::events::GameEvent;
    use crate::state::{GameSnapshot, RunState};
    use crate::types::{SimTime, Velocity};

    /// Verify all enums round-trip through serde_json.
    #[test]
    fn test_game_kind_serde() {
        let variants = vec![GameKind::Shooter, GameKind::Moonbase, GameKind::Lander];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: GameKind = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_phase_serde() {
        let variants = vec![
            Phase::Combat,
            Phase::Launch,
            Phase::Travel,
            Phase::Defend,
            Phase::Descent,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: Phase = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_outcome_serde() {
        let variants = vec![
            Outcome::Running,
            Outcome::Won,
            Outcome::Lost(LossReason::ShipDestroyed),
            Outcome::Lost(LossReason::BaseDestroyed),
            Outcome::Lost(LossReason::CrashTooFast),
            Outcome::Lost(LossReason::CrashBadAngle),
            Outcome::Lost(LossReason::CrashSurface),
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: Outcome = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_outcome_terminal_helpers() {
        assert!(Outcome::Running.is_running());
        assert!(!Outcome::Running.is_terminal());
        assert!(Outcome::Won.is_terminal());
        assert!(Outcome::Lost(LossReason::CrashSurface).is_terminal());
    }

    /// Verify PlayerCommand round-trips through serde (tagged union).
    #[test]
    fn test_player_command_serde() {
        let commands = vec![
            PlayerCommand::StartGame,
            PlayerCommand::Restart,
            PlayerCommand::Pause,
            PlayerCommand::Resume,
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: PlayerCommand = serde_json::from_str(&json).unwrap();
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    /// Verify GameEvent round-trips through serde.
    #[test]
    fn test_game_event_serde() {
        let events = vec![
            GameEvent::PhaseChanged {
                phase: Phase::Travel,
            },
            GameEvent::WaveStarted { wave: 2 },
            GameEvent::HostileDestroyed { x: 120.0, y: 88.5 },
            GameEvent::PlayerHit { health: 80.0 },
            GameEvent::StructureHit { integrity: 90.0 },
            GameEvent::LowFuel { remaining: 19.7 },
            GameEvent::RunWon { score: 2875 },
            GameEvent::RunLost {
                reason: LossReason::CrashTooFast,
            },
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            let _back: GameEvent = serde_json::from_str(&json).unwrap();
        }
    }

    #[test]
    fn test_input_snapshot_default_is_neutral() {
        let input = InputSnapshot::default();
        assert!(!input.up && !input.down && !input.left && !input.right && !input.fire);

        let json = serde_json::to_string(&input).unwrap();
        let back: InputSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(input, back);
    }

    /// Verify GameSnapshot can be serialized to JSON.
    #[test]
    fn test_snapshot_serde() {
        let snapshot = GameSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.time.tick, back.time.tick);
        assert_eq!(snapshot.phase, back.phase);
        assert!(
            json.len() < 1024,
            "Empty snapshot should be <1KB, was {} bytes",
            json.len()
        );
    }

    /// Each game starts at its first phase, running, with zeroed counters.
    #[test]
    fn test_run_state_initial_phase() {
        let shooter = RunState::new(GameKind::Shooter);
        assert_eq!(shooter.phase, Phase::Combat);
        let moonbase = RunState::new(GameKind::Moonbase);
        assert_eq!(moonbase.phase, Phase::Launch);
        let lander = RunState::new(GameKind::Lander);
        assert_eq!(lander.phase, Phase::Descent);

        for run in [shooter, moonbase, lander] {
            assert!(run.is_running());
            assert_eq!(run.score, 0);
            assert_eq!(run.destroyed, 0);
            assert_eq!(run.wave, 0);
            assert_eq!(run.distance_km, 0.0);
        }
    }

    /// Verify Velocity speed magnitude.
    #[test]
    fn test_velocity_speed() {
        let v = Velocity::new(3.0, 4.0);
        assert!((v.speed() - 5.0).abs() < 1e-10);
        assert_eq!(Velocity::default().speed(), 0.0);
    }

    /// Verify SimTime advancement.
    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        assert_eq!(time.tick, 0);
        assert_eq!(time.elapsed_secs, 0.0);

        for _ in 0..TICK_RATE {
            time.advance();
        }
        assert_eq!(time.tick, TICK_RATE as u64);
        // TICK_RATE ticks = 1 second
        assert!((time.elapsed_secs - 1.0).abs() < 1e-9);
        assert!((time.dt() - DT).abs() < 1e-15);
    }
}
