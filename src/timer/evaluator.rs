//! Timer evaluator for the stretch & gym reminder.
//!
//! Called once per rendered frame. Each call:
//! - Optionally aligns the stretch period start
//! - Raises the stretch alert once the interval has elapsed
//! - Raises the gym alert at the top of the configured hour, once per hour slot
//! - Recomputes the next stretch time
//!
//! Alerts request a sound from the player without waiting for it.

use chrono::{NaiveDateTime, Timelike};
use tracing::{debug, info, warn};

use crate::sound::{SoundPlayer, SoundSource};
use crate::types::{AlertKind, Alignment, TimerState};

// ============================================================================
// TimerEvaluator
// ============================================================================

/// Advances a [`TimerState`] from wall-clock time.
#[derive(Debug)]
pub struct TimerEvaluator<P> {
    /// Player used for alert sounds
    player: P,
    /// Sound requested on every alert
    source: SoundSource,
    /// Stretch-period alignment
    alignment: Alignment,
}

impl<P: SoundPlayer> TimerEvaluator<P> {
    /// Creates an evaluator that plays `source` through `player` on every alert.
    pub fn new(player: P, source: SoundSource) -> Self {
        Self {
            player,
            source,
            alignment: Alignment::Free,
        }
    }

    /// Sets the stretch-period alignment.
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Returns the configured alignment.
    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    /// Returns the alert sound source.
    pub fn source(&self) -> &SoundSource {
        &self.source
    }

    /// Returns the sound player.
    pub fn player(&self) -> &P {
        &self.player
    }

    /// Evaluates both timers against `now`, mutating `state` in place.
    ///
    /// Calling this twice with the same `now` performs no further transition.
    pub fn evaluate(&self, state: &mut TimerState, now: NaiveDateTime) {
        state.stretch_period_start = self.alignment.align(state.stretch_period_start);

        let elapsed = now - state.stretch_period_start;
        if state.stretch_enabled() && elapsed >= state.interval() {
            state.stretch_alert_active = true;
            state.stretch_acknowledged = false;
            state.stretch_period_start = self.alignment.align(now);
            info!(
                interval_hours = state.interval_hours(),
                elapsed_minutes = elapsed.num_minutes(),
                "Stretch alert"
            );
            self.signal(AlertKind::Stretch);
        }

        let gym_slot = Alignment::Hour.align(now);
        if state.gym_enabled()
            && now.hour() == state.gym_hour()
            && now.minute() == 0
            && state.gym_last_fired != Some(gym_slot)
        {
            state.gym_alert_active = true;
            state.gym_acknowledged = false;
            state.gym_last_fired = Some(gym_slot);
            info!(gym_hour = state.gym_hour(), "Gym alert");
            self.signal(AlertKind::Gym);
        }

        state.next_stretch_time = state.stretch_period_start + state.interval();
    }

    /// Requests the alert sound. Failures are logged and dropped.
    fn signal(&self, kind: AlertKind) {
        match self.player.play(&self.source) {
            Ok(()) => debug!(alert = kind.as_str(), sound = self.source.name(), "Alert sound requested"),
            Err(e) => warn!(
                alert = kind.as_str(),
                error = %e,
                suggestion = e.suggestion(),
                "Alert sound failed"
            ),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
