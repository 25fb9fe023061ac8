//! Settings view.
//!
//! Renders the timer state as editable widgets. Every edit goes through the
//! clamped setters on [`TimerState`], before the evaluator runs for the frame.

use std::ops::RangeInclusive;

use eframe::egui::{Color32, DragValue, Grid, RichText, Ui};
use tracing::{debug, info};

use super::display;
use crate::types::{AlertKind, TimerState, MAX_GYM_HOUR, MAX_INTERVAL_HOURS, MIN_INTERVAL_HOURS};

/// Banner colour for pending alerts
const ALERT_COLOR: Color32 = Color32::from_rgb(230, 126, 34);

/// A single change made through the settings view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsEdit {
    /// New stretch interval in hours
    Interval(u32),
    /// Stretch timer on/off
    StretchEnabled(bool),
    /// New gym hour
    GymHour(u32),
    /// Gym timer on/off
    GymEnabled(bool),
    /// Dismiss button pressed on an alert
    Dismiss(AlertKind),
}

/// Renders the whole settings view into `ui` and applies the edits made in it.
pub fn show(ui: &mut Ui, state: &mut TimerState) {
    for edit in collect_edits(ui, state) {
        apply(state, edit);
    }
}

/// Writes one edit into `state` through its clamped setter.
pub fn apply(state: &mut TimerState, edit: SettingsEdit) {
    match edit {
        SettingsEdit::Interval(hours) => {
            state.set_interval_hours(hours);
            debug!(interval_hours = state.interval_hours(), "Stretch interval changed");
        }
        SettingsEdit::StretchEnabled(enabled) => {
            state.set_stretch_enabled(enabled);
            debug!(enabled, "Stretch timer toggled");
        }
        SettingsEdit::GymHour(hour) => {
            state.set_gym_hour(hour);
            debug!(gym_hour = state.gym_hour(), "Gym hour changed");
        }
        SettingsEdit::GymEnabled(enabled) => {
            state.set_gym_enabled(enabled);
            debug!(enabled, "Gym timer toggled");
        }
        SettingsEdit::Dismiss(kind) => {
            if state.is_alert_active(kind) {
                state.acknowledge(kind);
                info!(alert = kind.as_str(), "Alert acknowledged");
            }
        }
    }
}

/// Draws the widgets and returns the edits the user made this frame.
fn collect_edits(ui: &mut Ui, state: &TimerState) -> Vec<SettingsEdit> {
    let mut edits = Vec::new();
    alert_banner(ui, state, &mut edits);

    ui.label(display::HEADING);
    ui.label(display::next_stretch_label(state));
    ui.add_space(6.0);

    Grid::new("settings_grid")
        .num_columns(2)
        .spacing([12.0, 10.0])
        .show(ui, |ui| {
            ui.label("Stretch Interval:");
            let interval_range = MIN_INTERVAL_HOURS..=MAX_INTERVAL_HOURS;
            if let Some(hours) = stepper(ui, state.interval_hours(), interval_range, " h") {
                edits.push(SettingsEdit::Interval(hours));
            }
            ui.end_row();

            if let Some(on) = on_off(ui, state.stretch_enabled(), "Timer On", "Timer Off") {
                edits.push(SettingsEdit::StretchEnabled(on));
            }
            ui.end_row();

            ui.label("Gym Time (24hr):");
            if let Some(hour) = stepper(ui, state.gym_hour(), 0..=MAX_GYM_HOUR, ":00") {
                edits.push(SettingsEdit::GymHour(hour));
            }
            ui.end_row();

            if let Some(on) = on_off(ui, state.gym_enabled(), "Gym On", "Gym Off") {
                edits.push(SettingsEdit::GymEnabled(on));
            }
            ui.end_row();
        });

    edits
}

/// Shows one line per pending alert with a button to dismiss it.
fn alert_banner(ui: &mut Ui, state: &TimerState, edits: &mut Vec<SettingsEdit>) {
    let mut shown = false;
    for kind in [AlertKind::Stretch, AlertKind::Gym] {
        if !state.is_alert_active(kind) {
            continue;
        }
        shown = true;
        ui.horizontal(|ui| {
            ui.colored_label(
                ALERT_COLOR,
                RichText::new(display::alert_message(kind)).strong(),
            );
            if ui.button("Dismiss").clicked() {
                edits.push(SettingsEdit::Dismiss(kind));
            }
        });
    }
    if shown {
        ui.separator();
    }
}

/// Moves `value` one step up or down, staying inside `range`.
fn step(value: u32, up: bool, range: &RangeInclusive<u32>) -> u32 {
    if up {
        value.saturating_add(1).min(*range.end())
    } else {
        value.saturating_sub(1).max(*range.start())
    }
}

/// Integer stepper with -/+ buttons. Returns the new value if it changed.
fn stepper(ui: &mut Ui, current: u32, range: RangeInclusive<u32>, suffix: &str) -> Option<u32> {
    let mut value = current;
    ui.horizontal(|ui| {
        if ui.small_button("-").clicked() {
            value = step(value, false, &range);
        }
        ui.add(DragValue::new(&mut value).range(range.clone()).speed(0.1).suffix(suffix));
        if ui.small_button("+").clicked() {
            value = step(value, true, &range);
        }
    });
    (value != current).then_some(value)
}

/// Two-way radio toggle. Returns the new value if it changed.
fn on_off(ui: &mut Ui, current: bool, on_label: &str, off_label: &str) -> Option<bool> {
    let mut value = current;
    ui.radio_value(&mut value, true, on_label);
    ui.radio_value(&mut value, false, off_label);
    (value != current).then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use eframe::egui;

    fn state() -> TimerState {
        TimerState::new(
            NaiveDate::from_ymd_opt(2024, 3, 11)
                .unwrap()
                .and_hms_opt(8, 0, 0)
                .unwrap(),
        )
    }

    fn render(state: &mut TimerState) {
        let ctx = egui::Context::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| show(ui, state));
        });
    }

    #[test]
    fn test_render_without_input_leaves_state_untouched() {
        let mut s = state();
        let before = s.clone();
        render(&mut s);
        assert_eq!(s, before);
    }

    #[test]
    fn test_render_with_alerts() {
        let mut s = state();
        s.stretch_alert_active = true;
        s.gym_alert_active = true;
        render(&mut s);
        // Nothing was clicked
        assert!(s.stretch_alert_active());
        assert!(s.gym_alert_active());
    }

    mod step_tests {
        use super::*;

        #[test]
        fn test_step_moves_by_one() {
            assert_eq!(step(3, true, &(1..=5)), 4);
            assert_eq!(step(3, false, &(1..=5)), 2);
        }

        #[test]
        fn test_step_stops_at_bounds() {
            assert_eq!(step(5, true, &(1..=5)), 5);
            assert_eq!(step(1, false, &(1..=5)), 1);
            assert_eq!(step(23, true, &(0..=MAX_GYM_HOUR)), 23);
            assert_eq!(step(0, false, &(0..=MAX_GYM_HOUR)), 0);
        }
    }

    mod apply_tests {
        use super::*;

        #[test]
        fn test_interval_edit_is_clamped() {
            let mut s = state();
            apply(&mut s, SettingsEdit::Interval(3));
            assert_eq!(s.interval_hours(), 3);

            apply(&mut s, SettingsEdit::Interval(9));
            assert_eq!(s.interval_hours(), MAX_INTERVAL_HOURS);
        }

        #[test]
        fn test_gym_hour_edit_is_clamped() {
            let mut s = state();
            apply(&mut s, SettingsEdit::GymHour(6));
            assert_eq!(s.gym_hour(), 6);

            apply(&mut s, SettingsEdit::GymHour(24));
            assert_eq!(s.gym_hour(), MAX_GYM_HOUR);
        }

        #[test]
        fn test_toggles() {
            let mut s = state();
            apply(&mut s, SettingsEdit::StretchEnabled(false));
            apply(&mut s, SettingsEdit::GymEnabled(false));
            assert!(!s.stretch_enabled());
            assert!(!s.gym_enabled());

            apply(&mut s, SettingsEdit::StretchEnabled(true));
            assert!(s.stretch_enabled());
        }

        #[test]
        fn test_dismiss_acknowledges_only_that_alert() {
            let mut s = state();
            s.stretch_alert_active = true;
            s.gym_alert_active = true;

            apply(&mut s, SettingsEdit::Dismiss(AlertKind::Gym));

            assert!(!s.gym_alert_active());
            assert!(s.gym_acknowledged());
            assert!(s.stretch_alert_active());
            assert!(!s.stretch_acknowledged());
        }

        #[test]
        fn test_dismiss_without_alert_is_noop() {
            let mut s = state();
            let before = s.clone();
            apply(&mut s, SettingsEdit::Dismiss(AlertKind::Stretch));
            assert_eq!(s, before);
        }
    }
}
