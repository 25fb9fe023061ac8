//! StretchGymTimer Library
//!
//! This library provides the core functionality for the stretch & gym reminder.
//! It includes:
//! - Timer state with clamped configuration and alert flags
//! - Timer evaluator that raises alerts from wall-clock time
//! - Fire-and-forget alert sound playback
//! - Settings window (eframe/egui)
//! - One-shot shutdown signal for Ctrl-C / SIGTERM
//! - Command-line options

pub mod cli;
pub mod shutdown;
pub mod sound;
pub mod timer;
pub mod types;
pub mod ui;

// Re-export commonly used types for convenience
pub use types::{AlertKind, Alignment, ReminderConfig, TimerState};

// Re-export timer types
pub use timer::{Clock, ManualClock, SystemClock, TimerEvaluator};

// Re-export sound types
pub use sound::{
    resolve_alert_source, MockSoundPlayer, RodioSoundPlayer, SoundError, SoundInfo, SoundPlayer,
    SoundSource,
};

// Re-export shutdown types
pub use shutdown::{ShutdownSignal, ShutdownTrigger};
