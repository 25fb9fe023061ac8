//! Core data types for the stretch & gym reminder.
//!
//! This module defines the data structures used for:
//! - Start-up configuration with range clamping
//! - Timer state (configuration + alert flags) and its transitions
//! - Stretch-period alignment modes

use std::path::PathBuf;

use chrono::{Duration, NaiveDateTime};

// ============================================================================
// Ranges
// ============================================================================

/// Smallest allowed stretch interval in hours.
pub const MIN_INTERVAL_HOURS: u32 = 1;
/// Largest allowed stretch interval in hours.
pub const MAX_INTERVAL_HOURS: u32 = 5;
/// Largest valid hour of day for the gym alert.
pub const MAX_GYM_HOUR: u32 = 23;
/// Slowest allowed frame rate.
pub const MIN_FRAME_RATE: u32 = 1;
/// Fastest allowed frame rate.
pub const MAX_FRAME_RATE: u32 = 120;

/// Default stretch interval in hours.
pub const DEFAULT_INTERVAL_HOURS: u32 = 1;
/// Default gym hour (19:00).
pub const DEFAULT_GYM_HOUR: u32 = 19;
/// Default render/evaluate cadence.
pub const DEFAULT_FRAME_RATE: u32 = 30;
/// Default location of the alert sound, relative to the working directory.
pub const DEFAULT_SOUND_PATH: &str = "alert.wav";

/// Clamps a stretch interval into `1..=5`.
#[must_use]
pub fn clamp_interval_hours(hours: u32) -> u32 {
    hours.clamp(MIN_INTERVAL_HOURS, MAX_INTERVAL_HOURS)
}

/// Clamps an hour of day into `0..=23`.
#[must_use]
pub fn clamp_gym_hour(hour: u32) -> u32 {
    hour.min(MAX_GYM_HOUR)
}

// ============================================================================
// Alignment
// ============================================================================

/// How the start of a stretch period is aligned before elapsed time is computed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Alignment {
    /// The period starts whenever the previous one ended
    #[default]
    Free,
    /// The period start is floored to the previous :00 or :30
    HalfHour,
    /// The period start is floored to the previous full hour
    Hour,
}

impl Alignment {
    /// Returns the string representation of the alignment.
    pub fn as_str(&self) -> &'static str {
        match self {
            Alignment::Free => "free",
            Alignment::HalfHour => "half-hour",
            Alignment::Hour => "hour",
        }
    }

    /// Floors `time` to this alignment's boundary.
    ///
    /// `Free` returns the time unchanged.
    pub fn align(&self, time: NaiveDateTime) -> NaiveDateTime {
        let step_minutes = match self {
            Alignment::Free => return time,
            Alignment::HalfHour => 30,
            Alignment::Hour => 60,
        };
        let Some(midnight) = time.date().and_hms_opt(0, 0, 0) else {
            return time;
        };
        let minutes = (time - midnight).num_minutes();
        midnight + Duration::minutes(minutes - minutes % step_minutes)
    }
}

// ============================================================================
// ReminderConfig
// ============================================================================

/// Start-up configuration for the reminder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderConfig {
    /// Initial stretch interval in hours (1-5)
    pub interval_hours: u32,
    /// Initial gym hour (0-23)
    pub gym_hour: u32,
    /// Whether the stretch timer starts enabled
    pub stretch_enabled: bool,
    /// Whether the gym timer starts enabled
    pub gym_enabled: bool,
    /// Stretch-period alignment
    pub alignment: Alignment,
    /// Path of the alert sound
    pub sound_path: PathBuf,
    /// Whether sound playback is skipped entirely
    pub muted: bool,
    /// Frames per second for rendering and evaluation (1-120)
    pub frame_rate: u32,
}

impl Default for ReminderConfig {
    fn default() -> Self {
        Self {
            interval_hours: DEFAULT_INTERVAL_HOURS,
            gym_hour: DEFAULT_GYM_HOUR,
            stretch_enabled: true,
            gym_enabled: true,
            alignment: Alignment::Free,
            sound_path: PathBuf::from(DEFAULT_SOUND_PATH),
            muted: false,
            frame_rate: DEFAULT_FRAME_RATE,
        }
    }
}

impl ReminderConfig {
    /// Sets the stretch interval, clamped to 1-5 hours.
    pub fn with_interval_hours(mut self, hours: u32) -> Self {
        self.interval_hours = clamp_interval_hours(hours);
        self
    }

    /// Sets the gym hour, clamped to 0-23.
    pub fn with_gym_hour(mut self, hour: u32) -> Self {
        self.gym_hour = clamp_gym_hour(hour);
        self
    }

    /// Sets the frame rate, clamped to 1-120.
    pub fn with_frame_rate(mut self, fps: u32) -> Self {
        self.frame_rate = fps.clamp(MIN_FRAME_RATE, MAX_FRAME_RATE);
        self
    }

    /// Returns the time between two frames.
    pub fn frame_interval(&self) -> std::time::Duration {
        let fps = self.frame_rate.clamp(MIN_FRAME_RATE, MAX_FRAME_RATE);
        std::time::Duration::from_secs_f64(1.0 / f64::from(fps))
    }
}

// ============================================================================
// AlertKind
// ============================================================================

/// The two independent reminders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    /// Recurring stretch reminder
    Stretch,
    /// Daily gym reminder
    Gym,
}

impl AlertKind {
    /// Returns the string representation of the alert.
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertKind::Stretch => "stretch",
            AlertKind::Gym => "gym",
        }
    }
}

// ============================================================================
// TimerState
// ============================================================================

/// Configuration and alert flags for both reminders.
///
/// One instance lives for the whole process. The settings view edits it
/// through the clamped setters and the evaluator advances it from the clock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerState {
    interval_hours: u32,
    stretch_enabled: bool,
    gym_hour: u32,
    gym_enabled: bool,
    pub(crate) gym_alert_active: bool,
    pub(crate) stretch_alert_active: bool,
    pub(crate) stretch_period_start: NaiveDateTime,
    pub(crate) next_stretch_time: NaiveDateTime,
    pub(crate) gym_acknowledged: bool,
    pub(crate) stretch_acknowledged: bool,
    /// Top of the hour at which the gym alert last fired
    pub(crate) gym_last_fired: Option<NaiveDateTime>,
}

impl TimerState {
    /// Creates a state with the default configuration, starting a stretch
    /// period at `now`.
    pub fn new(now: NaiveDateTime) -> Self {
        Self::from_config(&ReminderConfig::default(), now)
    }

    /// Creates a state from the given configuration, starting a stretch
    /// period at `now`.
    pub fn from_config(config: &ReminderConfig, now: NaiveDateTime) -> Self {
        let interval_hours = clamp_interval_hours(config.interval_hours);
        Self {
            interval_hours,
            stretch_enabled: config.stretch_enabled,
            gym_hour: clamp_gym_hour(config.gym_hour),
            gym_enabled: config.gym_enabled,
            gym_alert_active: false,
            stretch_alert_active: false,
            stretch_period_start: now,
            next_stretch_time: now + Duration::hours(i64::from(interval_hours)),
            gym_acknowledged: false,
            stretch_acknowledged: false,
            gym_last_fired: None,
        }
    }

    /// Returns the stretch interval in hours.
    pub fn interval_hours(&self) -> u32 {
        self.interval_hours
    }

    /// Returns the stretch interval as a duration.
    pub fn interval(&self) -> Duration {
        Duration::hours(i64::from(self.interval_hours))
    }

    /// Sets the stretch interval, clamped to 1-5 hours.
    pub fn set_interval_hours(&mut self, hours: u32) {
        self.interval_hours = clamp_interval_hours(hours);
    }

    /// Returns true if the stretch timer is enabled.
    pub fn stretch_enabled(&self) -> bool {
        self.stretch_enabled
    }

    /// Turns the stretch timer on or off.
    pub fn set_stretch_enabled(&mut self, enabled: bool) {
        self.stretch_enabled = enabled;
    }

    /// Returns the gym hour (0-23).
    pub fn gym_hour(&self) -> u32 {
        self.gym_hour
    }

    /// Sets the gym hour, clamped to 0-23.
    pub fn set_gym_hour(&mut self, hour: u32) {
        self.gym_hour = clamp_gym_hour(hour);
    }

    /// Returns true if the gym timer is enabled.
    pub fn gym_enabled(&self) -> bool {
        self.gym_enabled
    }

    /// Turns the gym timer on or off.
    pub fn set_gym_enabled(&mut self, enabled: bool) {
        self.gym_enabled = enabled;
    }

    /// Returns true if a gym alert is waiting to be acknowledged.
    pub fn gym_alert_active(&self) -> bool {
        self.gym_alert_active
    }

    /// Returns true if a stretch alert is waiting to be acknowledged.
    pub fn stretch_alert_active(&self) -> bool {
        self.stretch_alert_active
    }

    /// Returns true if the last gym alert was dismissed.
    pub fn gym_acknowledged(&self) -> bool {
        self.gym_acknowledged
    }

    /// Returns true if the last stretch alert was dismissed.
    pub fn stretch_acknowledged(&self) -> bool {
        self.stretch_acknowledged
    }

    /// Returns when the current stretch period began.
    pub fn stretch_period_start(&self) -> NaiveDateTime {
        self.stretch_period_start
    }

    /// Returns when the next stretch alert is due.
    pub fn next_stretch_time(&self) -> NaiveDateTime {
        self.next_stretch_time
    }

    /// Returns the top of the hour at which the gym alert last fired, if any.
    pub fn gym_last_fired(&self) -> Option<NaiveDateTime> {
        self.gym_last_fired
    }

    /// Returns true if the given alert is active.
    pub fn is_alert_active(&self, kind: AlertKind) -> bool {
        match kind {
            AlertKind::Stretch => self.stretch_alert_active,
            AlertKind::Gym => self.gym_alert_active,
        }
    }

    /// Returns true if either alert is active.
    pub fn any_alert_active(&self) -> bool {
        self.stretch_alert_active || self.gym_alert_active
    }

    /// Dismisses the active stretch alert. No-op when none is active.
    pub fn acknowledge_stretch(&mut self) {
        if self.stretch_alert_active {
            self.stretch_alert_active = false;
            self.stretch_acknowledged = true;
        }
    }

    /// Dismisses the active gym alert. No-op when none is active.
    pub fn acknowledge_gym(&mut self) {
        if self.gym_alert_active {
            self.gym_alert_active = false;
            self.gym_acknowledged = true;
        }
    }

    /// Dismisses the given alert.
    pub fn acknowledge(&mut self, kind: AlertKind) {
        match kind {
            AlertKind::Stretch => self.acknowledge_stretch(),
            AlertKind::Gym => self.acknowledge_gym(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
