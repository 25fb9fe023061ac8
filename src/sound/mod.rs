//! Sound playback system for the reminder.
//!
//! This module provides audio alert capabilities, including:
//!
//! - Fire-and-forget playback on a detached thread per alert
//! - A WAV alert file with a synthesized tone as fallback
//! - Header probing for start-up diagnostics
//! - Graceful degradation when audio is unavailable
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐
//! │   SoundPlayer    │ ← Main interface
//! └────────┬─────────┘
//!          │ spawn (detached)
//!          ▼
//! ┌──────────────────┐     ┌──────────────────┐
//! │   SoundSource    │────▶│  alert.wav file  │
//! │                  │     ├──────────────────┤
//! │                  │────▶│  sine tone       │
//! └──────────────────┘     │  (fallback)      │
//!                          └──────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use stretch_gym_timer::sound::{RodioSoundPlayer, SoundSource};
//!
//! let player = RodioSoundPlayer::new(false);
//! let source = SoundSource::file("alert.wav");
//!
//! // Returns as soon as the playback thread is started
//! player.play(&source).expect("playback thread");
//! ```

mod error;
mod player;
mod source;

pub use error::SoundError;
pub use player::RodioSoundPlayer;
pub use source::{SoundInfo, SoundSource, DEFAULT_TONE_HZ, DEFAULT_TONE_MS};

/// Trait for sound playback implementations.
///
/// This trait abstracts the sound playback functionality, allowing for
/// different implementations (e.g., rodio-based, mock for testing).
pub trait SoundPlayer {
    /// Plays a sound from the given source.
    ///
    /// This method must be non-blocking; the sound plays in the background.
    ///
    /// # Errors
    ///
    /// Returns an error if playback could not be started.
    fn play(&self, source: &SoundSource) -> Result<(), SoundError>;
}

impl SoundPlayer for RodioSoundPlayer {
    fn play(&self, source: &SoundSource) -> Result<(), SoundError> {
        RodioSoundPlayer::play(self, source)
    }
}

/// Mock sound player for testing.
#[derive(Debug, Default)]
pub struct MockSoundPlayer {
    play_calls: std::sync::Mutex<Vec<SoundSource>>,
    should_fail: std::sync::atomic::AtomicBool,
}

impl MockSoundPlayer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail
            .store(should_fail, std::sync::atomic::Ordering::SeqCst);
    }

    #[must_use]
    pub fn play_count(&self) -> usize {
        self.play_calls.lock().unwrap().len()
    }

    #[must_use]
    pub fn get_play_calls(&self) -> Vec<SoundSource> {
        self.play_calls.lock().unwrap().clone()
    }

    pub fn clear_calls(&self) {
        self.play_calls.lock().unwrap().clear();
    }
}

impl SoundPlayer for MockSoundPlayer {
    fn play(&self, source: &SoundSource) -> Result<(), SoundError> {
        if self.should_fail.load(std::sync::atomic::Ordering::SeqCst) {
            return Err(SoundError::PlaybackError("Mock failure".to_string()));
        }
        self.play_calls.lock().unwrap().push(source.clone());
        Ok(())
    }
}

/// Chooses the alert source for `path`.
///
/// Returns the file source when the file can be decoded, otherwise logs why
/// and returns the fallback tone.
#[must_use]
pub fn resolve_alert_source(path: &std::path::Path) -> SoundSource {
    let source = SoundSource::file(path);
    match source.probe() {
        Ok(info) => {
            tracing::info!(
                path = %path.display(),
                channels = info.channels,
                sample_rate = info.sample_rate,
                "Alert sound loaded"
            );
            source
        }
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                suggestion = e.suggestion(),
                "Alert sound unavailable, using tone"
            );
            SoundSource::default_tone()
        }
    }
}
