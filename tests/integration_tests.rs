//! Integration tests for the timer evaluator and timer state.
//!
//! These tests drive the public API the way the settings window does:
//! user edits through the clamped setters, then one evaluation per tick.

use chrono::{Duration, NaiveDate, NaiveDateTime};

use stretch_gym_timer::sound::{MockSoundPlayer, SoundSource};
use stretch_gym_timer::timer::TimerEvaluator;
use stretch_gym_timer::types::{AlertKind, Alignment, ReminderConfig, TimerState};

// ============================================================================
// Test Helpers
// ============================================================================

fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 3)
        .unwrap()
        .and_hms_opt(h, m, s)
        .unwrap()
}

fn create_evaluator() -> TimerEvaluator<MockSoundPlayer> {
    TimerEvaluator::new(MockSoundPlayer::new(), SoundSource::file("alert.wav"))
}

// ============================================================================
// Stretch timer
// ============================================================================

mod stretch_timer {
    use super::*;

    #[test]
    fn stretch_fires_after_61_minutes() {
        let evaluator = create_evaluator();
        let t = at(8, 0, 0);
        let mut state = TimerState::new(t);

        evaluator.evaluate(&mut state, t + Duration::minutes(61));

        assert!(state.stretch_alert_active());
        assert_eq!(state.stretch_period_start(), t + Duration::minutes(61));
        assert_eq!(state.next_stretch_time(), t + Duration::minutes(122));
    }

    #[test]
    fn stretch_fires_for_every_interval() {
        for hours in 1..=5u32 {
            let evaluator = create_evaluator();
            let t = at(1, 15, 0);
            let config = ReminderConfig::default().with_interval_hours(hours);
            let mut state = TimerState::from_config(&config, t);

            let just_before = t + Duration::hours(i64::from(hours)) - Duration::seconds(1);
            evaluator.evaluate(&mut state, just_before);
            assert!(!state.stretch_alert_active(), "{hours}h fired early");

            let now = t + Duration::hours(i64::from(hours));
            evaluator.evaluate(&mut state, now);
            assert!(state.stretch_alert_active(), "{hours}h did not fire");
            assert_eq!(state.stretch_period_start(), now);
        }
    }

    #[test]
    fn disabled_stretch_never_fires() {
        let evaluator = create_evaluator();
        let config = ReminderConfig {
            stretch_enabled: false,
            gym_enabled: false,
            ..ReminderConfig::default()
        };
        let t = at(0, 0, 0);
        let mut state = TimerState::from_config(&config, t);

        for minutes in (0..3 * 24 * 60).step_by(7) {
            evaluator.evaluate(&mut state, t + Duration::minutes(minutes));
        }

        assert!(!state.stretch_alert_active());
        assert_eq!(evaluator.player().play_count(), 0);
    }

    #[test]
    fn dismiss_then_next_period() {
        let evaluator = create_evaluator();
        let mut state = TimerState::new(at(8, 0, 0));

        evaluator.evaluate(&mut state, at(9, 0, 0));
        state.acknowledge(AlertKind::Stretch);
        assert!(!state.stretch_alert_active());
        assert!(state.stretch_acknowledged());

        evaluator.evaluate(&mut state, at(9, 30, 0));
        assert!(!state.stretch_alert_active());
        assert!(state.stretch_acknowledged());

        evaluator.evaluate(&mut state, at(10, 0, 0));
        assert!(state.stretch_alert_active());
        assert!(!state.stretch_acknowledged());
    }

    #[test]
    fn plays_configured_sound() {
        let evaluator = create_evaluator();
        let mut state = TimerState::new(at(8, 0, 0));

        evaluator.evaluate(&mut state, at(9, 0, 0));

        assert_eq!(
            evaluator.player().get_play_calls(),
            vec![SoundSource::file("alert.wav")]
        );
    }
}

// ============================================================================
// Gym timer
// ============================================================================

mod gym_timer {
    use super::*;

    #[test]
    fn gym_fires_at_configured_hour_and_stays_active() {
        let evaluator = create_evaluator();
        let mut state = TimerState::new(at(18, 45, 0));
        assert_eq!(state.gym_hour(), 19);

        evaluator.evaluate(&mut state, at(19, 0, 0));
        assert!(state.gym_alert_active());

        evaluator.evaluate(&mut state, at(19, 0, 30));
        assert!(state.gym_alert_active());
        assert_eq!(evaluator.player().play_count(), 1);
    }

    #[test]
    fn gym_only_fires_on_minute_zero() {
        let evaluator = create_evaluator();
        let mut state = TimerState::new(at(18, 45, 0));
        state.set_stretch_enabled(false);

        for minute in 1..60 {
            evaluator.evaluate(&mut state, at(19, minute, 0));
            assert!(!state.gym_alert_active(), "fired at 19:{minute:02}");
        }
    }

    #[test]
    fn gym_hour_edit_takes_effect_next_tick() {
        let evaluator = create_evaluator();
        let mut state = TimerState::new(at(6, 45, 0));

        state.set_gym_hour(7);
        evaluator.evaluate(&mut state, at(7, 0, 0));

        assert!(state.gym_alert_active());
    }

    #[test]
    fn gym_fires_again_after_moving_hour_later_same_day() {
        let evaluator = create_evaluator();
        let mut state = TimerState::new(at(6, 30, 0));
        state.set_stretch_enabled(false);
        state.set_gym_hour(7);

        evaluator.evaluate(&mut state, at(7, 0, 0));
        state.acknowledge(AlertKind::Gym);
        state.set_gym_hour(19);
        evaluator.evaluate(&mut state, at(19, 0, 0));

        assert!(state.gym_alert_active());
        assert_eq!(evaluator.player().play_count(), 2);
    }

    #[test]
    fn gym_hour_is_clamped() {
        let mut state = TimerState::new(at(6, 45, 0));
        state.set_gym_hour(42);
        assert_eq!(state.gym_hour(), 23);
    }
}

// ============================================================================
// Invariants
// ============================================================================

mod invariants {
    use super::*;

    #[test]
    fn next_stretch_time_tracks_interval_edits() {
        let evaluator = create_evaluator();
        let mut state = TimerState::new(at(8, 0, 0));

        for (step, hours) in [2u32, 5, 1, 4, 3, 9, 0].into_iter().enumerate() {
            state.set_interval_hours(hours);
            evaluator.evaluate(&mut state, at(8, 0, 0) + Duration::minutes(13 * step as i64));
            assert_eq!(
                state.next_stretch_time(),
                state.stretch_period_start() + Duration::hours(i64::from(state.interval_hours()))
            );
        }
    }

    #[test]
    fn evaluating_twice_is_idempotent() {
        let evaluator = create_evaluator();
        let mut state = TimerState::new(at(18, 0, 0));

        evaluator.evaluate(&mut state, at(19, 0, 0));
        let snapshot = state.clone();
        let plays = evaluator.player().play_count();

        evaluator.evaluate(&mut state, at(19, 0, 0));

        assert_eq!(state, snapshot);
        assert_eq!(evaluator.player().play_count(), plays);
    }

    #[test]
    fn failing_player_is_not_fatal() {
        let evaluator = create_evaluator();
        evaluator.player().set_should_fail(true);
        let mut state = TimerState::new(at(18, 0, 0));

        evaluator.evaluate(&mut state, at(19, 0, 0));

        assert!(state.stretch_alert_active());
        assert!(state.gym_alert_active());
    }

    #[test]
    fn hour_alignment_keeps_boundaries() {
        let evaluator = create_evaluator().with_alignment(Alignment::Hour);
        let mut state = TimerState::new(at(8, 41, 12));

        evaluator.evaluate(&mut state, at(8, 41, 13));
        assert_eq!(state.next_stretch_time(), at(9, 0, 0));

        evaluator.evaluate(&mut state, at(9, 0, 2));
        assert!(state.stretch_alert_active());
        assert_eq!(state.next_stretch_time(), at(10, 0, 0));
    }
}

// ============================================================================
// Alert sound asset
// ============================================================================

mod alert_sound {
    use std::path::Path;

    use stretch_gym_timer::sound::{resolve_alert_source, SoundError, SoundSource};

    const BUNDLED: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/alert.wav");

    #[test]
    fn bundled_alert_is_mono_pcm() {
        let info = SoundSource::file(BUNDLED).probe().unwrap();
        assert_eq!(info.channels, 1);
        assert_eq!(info.sample_rate, 22050);
    }

    #[test]
    fn bundled_alert_is_resolved_as_file() {
        let source = resolve_alert_source(Path::new(BUNDLED));
        assert!(source.is_file());
        assert_eq!(source.name(), "alert");
    }

    #[test]
    fn missing_alert_resolves_to_tone() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("alert.wav");

        assert!(matches!(
            SoundSource::file(&missing).probe(),
            Err(SoundError::FileNotFound(_))
        ));
        assert_eq!(resolve_alert_source(&missing), SoundSource::default_tone());
    }
}
