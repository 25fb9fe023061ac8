//! Sound source management.
//!
//! An alert is either a WAV file on disk or a synthesized tone. The tone
//! doubles as the fallback when the file is missing or unreadable.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Duration;

use rodio::{Decoder, Source};

use super::error::SoundError;

/// Frequency of the fallback beep.
pub const DEFAULT_TONE_HZ: u32 = 880;
/// Length of the fallback beep.
pub const DEFAULT_TONE_MS: u64 = 600;

/// Represents the source of a sound to be played.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SoundSource {
    /// A sound file on the local filesystem.
    File {
        /// Display name (the file stem).
        name: String,
        /// Path to the file, possibly relative to the working directory.
        path: PathBuf,
    },
    /// A sine tone generated at playback time.
    Tone {
        /// Pitch of the tone.
        frequency_hz: u32,
        /// How long the tone lasts.
        duration_ms: u64,
    },
}

/// Header information of a decoded sound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SoundInfo {
    /// Number of interleaved channels.
    pub channels: u16,
    /// Samples per second per channel.
    pub sample_rate: u32,
    /// Total length, when the decoder knows it.
    pub duration: Option<Duration>,
}

impl SoundSource {
    /// Creates a file source named after the file stem.
    #[must_use]
    pub fn file(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self::File { name, path }
    }

    /// Creates a tone source.
    #[must_use]
    pub fn tone(frequency_hz: u32, duration_ms: u64) -> Self {
        Self::Tone {
            frequency_hz,
            duration_ms,
        }
    }

    /// Returns the fallback beep.
    #[must_use]
    pub fn default_tone() -> Self {
        Self::tone(DEFAULT_TONE_HZ, DEFAULT_TONE_MS)
    }

    /// Returns the name of the sound source.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::File { name, .. } => name,
            Self::Tone { .. } => "tone",
        }
    }

    /// Returns true if this source reads a file.
    #[must_use]
    pub fn is_file(&self) -> bool {
        matches!(self, Self::File { .. })
    }

    /// Returns the file path if this is a file source.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::File { path, .. } => Some(path),
            Self::Tone { .. } => None,
        }
    }

    /// Reads the header of this source without touching an audio device.
    ///
    /// # Errors
    ///
    /// Returns `FileNotFound` if the file cannot be opened and `DecodeError`
    /// if it is not a supported audio format.
    pub fn probe(&self) -> Result<SoundInfo, SoundError> {
        match self {
            Self::File { path, .. } => {
                let decoder = open_decoder(path)?;
                Ok(SoundInfo {
                    channels: decoder.channels(),
                    sample_rate: decoder.sample_rate(),
                    duration: decoder.total_duration(),
                })
            }
            Self::Tone {
                frequency_hz,
                duration_ms,
            } => {
                let wave = sine(*frequency_hz, *duration_ms);
                Ok(SoundInfo {
                    channels: wave.channels(),
                    sample_rate: wave.sample_rate(),
                    duration: Some(Duration::from_millis(*duration_ms)),
                })
            }
        }
    }
}

/// Opens and decodes an audio file.
pub(crate) fn open_decoder(path: &Path) -> Result<Decoder<BufReader<File>>, SoundError> {
    let file = File::open(path)
        .map_err(|e| SoundError::FileNotFound(format!("{}: {}", path.display(), e)))?;

    Decoder::new(BufReader::new(file))
        .map_err(|e| SoundError::DecodeError(format!("{}: {}", path.display(), e)))
}

/// Builds a quiet sine beep.
pub(crate) fn sine(frequency_hz: u32, duration_ms: u64) -> impl Source<Item = f32> + Send {
    rodio::source::SineWave::new(frequency_hz as f32)
        .take_duration(Duration::from_millis(duration_ms))
        .amplify(0.25)
}
