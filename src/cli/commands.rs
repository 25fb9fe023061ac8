//! Command-line options for the reminder.
//!
//! Uses clap derive macro for argument parsing. Every option is optional;
//! running without arguments opens the window with the default settings.

use std::path::PathBuf;

use clap::Parser;

use crate::types::{
    Alignment, ReminderConfig, DEFAULT_FRAME_RATE, DEFAULT_GYM_HOUR, DEFAULT_INTERVAL_HOURS,
    DEFAULT_SOUND_PATH,
};

// ============================================================================
// CLI Structure
// ============================================================================

/// StretchGymTimer - reminds you to stretch and to go to the gym
#[derive(Parser, Debug)]
#[command(
    name = "stretch-gym-timer",
    version,
    about = "Desktop reminder for regular stretching and a daily gym hour",
    long_about = "Opens a small settings window and plays an alert sound every few hours \
                  to remind you to stretch, and once a day at your gym hour.\n\
                  Out-of-range values are clamped to the nearest valid one."
)]
pub struct Cli {
    /// Initial stretch interval in hours (1-5)
    #[arg(short, long, default_value_t = DEFAULT_INTERVAL_HOURS)]
    pub interval: u32,

    /// Initial gym hour, 24h clock (0-23)
    #[arg(short, long, default_value_t = DEFAULT_GYM_HOUR)]
    pub gym_hour: u32,

    /// Start with the stretch timer turned off
    #[arg(long)]
    pub no_stretch: bool,

    /// Start with the gym timer turned off
    #[arg(long)]
    pub no_gym: bool,

    /// Align stretch periods to clock boundaries
    #[arg(short, long, value_enum, default_value_t = Alignment::Free)]
    pub align: Alignment,

    /// Path to the alert sound (PCM WAV)
    #[arg(short, long, default_value = DEFAULT_SOUND_PATH, value_parser = validate_sound_path)]
    pub sound: PathBuf,

    /// Disable alert sounds
    #[arg(long)]
    pub mute: bool,

    /// Frames per second for rendering and timer checks (1-120)
    #[arg(long, default_value_t = DEFAULT_FRAME_RATE)]
    pub fps: u32,

    /// Enable verbose output for debugging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Builds the start-up configuration, clamping out-of-range values.
    pub fn to_config(&self) -> ReminderConfig {
        ReminderConfig {
            stretch_enabled: !self.no_stretch,
            gym_enabled: !self.no_gym,
            alignment: self.align,
            sound_path: self.sound.clone(),
            muted: self.mute,
            ..ReminderConfig::default()
        }
        .with_interval_hours(self.interval)
        .with_gym_hour(self.gym_hour)
        .with_frame_rate(self.fps)
    }
}

// ============================================================================
// Validation Functions
// ============================================================================

/// Validates the sound path.
///
/// - Must not be empty
fn validate_sound_path(s: &str) -> Result<PathBuf, String> {
    if s.trim().is_empty() {
        return Err("sound path must not be empty".to_string());
    }
    Ok(PathBuf::from(s))
}

// ============================================================================
// Tests
// ============================================================================
