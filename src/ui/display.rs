//! Display text for the settings window.
//!
//! This module handles:
//! - Formatting the next stretch time (HH:MM:SS)
//! - Alert banner and window title text
//! - Detecting alerts raised since the previous frame
//!
//! Everything here is independent of the GUI library and fully testable.

use chrono::NaiveDateTime;

use crate::types::{AlertKind, TimerState};

// ============================================================================
// Constants
// ============================================================================

/// Window title while no alert is pending
pub const WINDOW_TITLE: &str = "StretchGymTimer";

/// Prefix added to the title while an alert is pending
const ALERT_MARKER: &str = "⏰";

/// Heading shown at the top of the settings window
pub const HEADING: &str = "Select intervals and turn timers on/off";

// ============================================================================
// Formatting
// ============================================================================

/// Formats a wall-clock time as zero-padded `HH:MM:SS`.
pub fn format_clock(time: NaiveDateTime) -> String {
    time.format("%H:%M:%S").to_string()
}

/// Returns the "next stretch" label.
pub fn next_stretch_label(state: &TimerState) -> String {
    if state.stretch_enabled() {
        format!("Next stretch at: {}", format_clock(state.next_stretch_time()))
    } else {
        format!(
            "Next stretch at: {} (off)",
            format_clock(state.next_stretch_time())
        )
    }
}

/// Returns the banner text for an alert.
pub fn alert_message(kind: AlertKind) -> &'static str {
    match kind {
        AlertKind::Stretch => "Time to stretch!",
        AlertKind::Gym => "Time for the gym!",
    }
}

/// Returns the window title for the current state.
pub fn window_title(state: &TimerState) -> String {
    if state.any_alert_active() {
        format!("{} {}", ALERT_MARKER, WINDOW_TITLE)
    } else {
        WINDOW_TITLE.to_string()
    }
}

// ============================================================================
// AlertWatcher
// ============================================================================

/// Remembers which alerts were active on the previous frame.
#[derive(Debug, Default)]
pub struct AlertWatcher {
    stretch: bool,
    gym: bool,
}

impl AlertWatcher {
    /// Creates a watcher that has seen no alerts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the alerts that became active since the last call.
    pub fn newly_raised(&mut self, state: &TimerState) -> Vec<AlertKind> {
        let mut raised = Vec::new();
        let stretch = state.stretch_alert_active();
        let gym = state.gym_alert_active();

        if stretch && !self.stretch {
            raised.push(AlertKind::Stretch);
        }
        if gym && !self.gym {
            raised.push(AlertKind::Gym);
        }

        self.stretch = stretch;
        self.gym = gym;
        raised
    }
}

// ============================================================================
// Tests
// ============================================================================
