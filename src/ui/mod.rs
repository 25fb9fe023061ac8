//! Settings window for the reminder.
//!
//! This module provides:
//! - The eframe application that drives the per-frame loop
//! - The settings view (`settings.rs`)
//! - Display text generation (`display.rs`, GUI-independent)
//!
//! # Frame loop
//!
//! ```text
//! poll input → render settings view → evaluate timers → present
//!      ▲                                                   │
//!      └──────────── request_repaint_after(1/fps) ─────────┘
//! ```
//!
//! The loop keeps repainting at the configured rate even while the window
//! is idle, so the evaluator keeps running in the background.
//!
//! Evaluation only happens inside `update`. Backends that stop delivering
//! frames to a hidden or minimized window (Wayland compositors do) pause the
//! timers too. A stretch alert then fires late on the next frame, but a gym
//! alert whose `hh:00` minute passed while paused is skipped until the next
//! day.

pub mod display;
pub mod settings;

pub use display::{AlertWatcher, WINDOW_TITLE};
pub use settings::SettingsEdit;

use std::time::Duration;

use anyhow::Result;
use eframe::egui;
use tracing::info;

use crate::shutdown::ShutdownSignal;
use crate::sound::{resolve_alert_source, RodioSoundPlayer, SoundPlayer, SoundSource};
use crate::timer::{Clock, SystemClock, TimerEvaluator};
use crate::types::{AlertKind, ReminderConfig, TimerState};

/// Fixed window size in points
pub const WINDOW_SIZE: [f32; 2] = [400.0, 300.0];

// ============================================================================
// ReminderApp
// ============================================================================

/// The eframe application: owns the timer state and runs one tick per frame.
pub struct ReminderApp<P, C> {
    /// The single timer state, edited by the view and the evaluator
    state: TimerState,
    /// Clock-driven alert logic
    evaluator: TimerEvaluator<P>,
    /// Wall-clock source
    clock: C,
    /// Observed once per frame
    shutdown: ShutdownSignal,
    /// Detects alerts raised during the last evaluation
    watcher: AlertWatcher,
    /// Time between frames
    frame_interval: Duration,
    /// Title currently shown on the window
    title: String,
}

impl<P: SoundPlayer, C: Clock> ReminderApp<P, C> {
    /// Creates the application.
    pub fn new(
        state: TimerState,
        evaluator: TimerEvaluator<P>,
        clock: C,
        shutdown: ShutdownSignal,
        frame_interval: Duration,
    ) -> Self {
        Self {
            state,
            evaluator,
            clock,
            shutdown,
            watcher: AlertWatcher::new(),
            frame_interval,
            title: WINDOW_TITLE.to_string(),
        }
    }

    /// Returns the timer state.
    pub fn state(&self) -> &TimerState {
        &self.state
    }

    /// Returns the timer state for editing.
    pub fn state_mut(&mut self) -> &mut TimerState {
        &mut self.state
    }

    /// Returns the evaluator.
    pub fn evaluator(&self) -> &TimerEvaluator<P> {
        &self.evaluator
    }

    /// Evaluates the timers once and returns the alerts raised by it.
    pub fn tick(&mut self) -> Vec<AlertKind> {
        let now = self.clock.now();
        self.evaluator.evaluate(&mut self.state, now);
        self.watcher.newly_raised(&self.state)
    }

    /// Runs one frame against `ctx`.
    pub fn frame(&mut self, ctx: &egui::Context) {
        if self.shutdown.is_triggered() {
            info!("Shutting down");
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        egui::CentralPanel::default().show(ctx, |ui| settings::show(ui, &mut self.state));

        if !self.tick().is_empty() {
            ctx.send_viewport_cmd(egui::ViewportCommand::RequestUserAttention(
                egui::UserAttentionType::Informational,
            ));
        }

        let title = display::window_title(&self.state);
        if title != self.title {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.clone()));
            self.title = title;
        }

        ctx.request_repaint_after(self.frame_interval);
    }
}

impl<P: SoundPlayer, C: Clock> eframe::App for ReminderApp<P, C> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.frame(ctx);
    }
}

// ============================================================================
// Entry point
// ============================================================================

/// Opens the settings window and blocks until it is closed.
///
/// # Errors
///
/// Returns an error if the shutdown listener or the window cannot be created.
pub fn run(config: &ReminderConfig) -> Result<()> {
    let clock = SystemClock;
    let state = TimerState::from_config(config, clock.now());

    let source = if config.muted {
        SoundSource::default_tone()
    } else {
        resolve_alert_source(&config.sound_path)
    };
    let player = RodioSoundPlayer::new(config.muted);
    let evaluator = TimerEvaluator::new(player, source).with_alignment(config.alignment);
    let shutdown = ShutdownSignal::install()?;

    let app = ReminderApp::new(state, evaluator, clock, shutdown, config.frame_interval());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size(WINDOW_SIZE)
            .with_resizable(false),
        ..Default::default()
    };

    info!(
        interval_hours = config.interval_hours,
        gym_hour = config.gym_hour,
        alignment = config.alignment.as_str(),
        fps = config.frame_rate,
        muted = app.evaluator().player().is_disabled(),
        "Opening settings window"
    );

    eframe::run_native(WINDOW_TITLE, options, Box::new(move |_cc| Ok(Box::new(app))))
        .map_err(|e| anyhow::anyhow!("failed to open settings window: {e}"))?;

    info!("Settings window closed");
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
