//! Sound player implementation using rodio.
//!
//! Every `play` call spawns a detached thread that opens the default output
//! device, streams the sound until it ends and exits. Nothing is joined and
//! nothing flows back to the caller, so overlapping alerts simply overlap.

use std::thread;

use rodio::{OutputStream, Sink, Source};
use tracing::{debug, warn};

use super::error::SoundError;
use super::source::{open_decoder, sine, SoundSource, DEFAULT_TONE_HZ, DEFAULT_TONE_MS};

/// Name given to playback threads.
const PLAYBACK_THREAD_NAME: &str = "alert-sound";

/// A fire-and-forget sound player backed by rodio.
#[derive(Debug, Default)]
pub struct RodioSoundPlayer {
    /// Whether sound playback is disabled.
    disabled: bool,
}

impl RodioSoundPlayer {
    /// Creates a new sound player.
    ///
    /// No audio device is opened until a sound is actually played.
    ///
    /// # Arguments
    ///
    /// * `disabled` - If true, all sound playback will be silently skipped.
    #[must_use]
    pub fn new(disabled: bool) -> Self {
        Self { disabled }
    }

    /// Starts playing `source` on a background thread and returns immediately.
    ///
    /// # Errors
    ///
    /// Returns `SoundError::PlaybackError` if the playback thread cannot be
    /// spawned. Device and decode failures happen on the playback thread and
    /// are only logged.
    pub fn play(&self, source: &SoundSource) -> Result<(), SoundError> {
        if self.disabled {
            debug!("Sound playback disabled, skipping");
            return Ok(());
        }

        let source = source.clone();
        thread::Builder::new()
            .name(PLAYBACK_THREAD_NAME.to_string())
            .spawn(move || {
                if let Err(e) = play_to_end(&source) {
                    warn!(
                        sound = source.name(),
                        error = %e,
                        suggestion = e.suggestion(),
                        "Alert sound playback failed"
                    );
                }
            })
            .map_err(|e| SoundError::PlaybackError(e.to_string()))?;

        debug!("Sound playback started (detached)");
        Ok(())
    }

    /// Returns true if sound playback is disabled.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }
}

/// Plays `source` on the calling thread, blocking until it has finished.
fn play_to_end(source: &SoundSource) -> Result<(), SoundError> {
    // The stream must outlive the sink.
    let (_stream, stream_handle) =
        OutputStream::try_default().map_err(|e| SoundError::DeviceNotAvailable(e.to_string()))?;
    let sink =
        Sink::try_new(&stream_handle).map_err(|e| SoundError::StreamError(e.to_string()))?;

    match source {
        SoundSource::File { name, path } => match open_decoder(path) {
            Ok(decoder) => {
                debug!(
                    sound = %name,
                    channels = decoder.channels(),
                    sample_rate = decoder.sample_rate(),
                    "Playing sound file"
                );
                sink.append(decoder);
            }
            Err(e) if e.should_fall_back() => {
                warn!(sound = %name, error = %e, "Falling back to tone");
                sink.append(sine(DEFAULT_TONE_HZ, DEFAULT_TONE_MS));
            }
            Err(e) => return Err(e),
        },
        SoundSource::Tone {
            frequency_hz,
            duration_ms,
        } => {
            debug!(frequency_hz, duration_ms, "Playing tone");
            sink.append(sine(*frequency_hz, *duration_ms));
        }
    }

    sink.sleep_until_end();
    debug!(sound = source.name(), "Sound playback finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Playback threads may fail in environments without audio hardware
    // (e.g., CI containers); they only log, so these tests never depend on it.

    #[test]
    fn test_disabled_player_skips_playback() {
        let player = RodioSoundPlayer::new(true);
        assert!(player.is_disabled());

        let source = SoundSource::default_tone();
        assert!(player.play(&source).is_ok());
    }

    #[test]
    fn test_default_is_enabled() {
        let player = RodioSoundPlayer::default();
        assert!(!player.is_disabled());
    }

    #[test]
    fn test_play_returns_immediately() {
        let player = RodioSoundPlayer::new(false);
        let source = SoundSource::file("/nonexistent/path/to/alert.wav");

        // Spawning succeeds even when the file or device is missing
        assert!(player.play(&source).is_ok());
    }

    #[test]
    fn test_debug_impl() {
        let player = RodioSoundPlayer::new(false);
        let debug_str = format!("{:?}", player);
        assert!(debug_str.contains("RodioSoundPlayer"));
    }
}
