//! Error types for audio processing.

use thiserror::Error;

/// Result type for audio operations.
pub type AudioResult<T> = Result<T, AudioError>;

/// Errors that can occur while transforming, decoding or encoding audio.
#[derive(Debug, Error)]
pub enum AudioError {
    /// Invalid sample rate.
    #[error("invalid sample rate: {rate}")]
    InvalidSampleRate {
        /// The invalid sample rate.
        rate: u32,
    },

    /// Two signals with different sample rates were combined.
    #[error("rate mismatch: {left} Hz vs {right} Hz")]
    RateMismatch {
        /// Rate of the first operand.
        left: u32,
        /// Rate of the second operand.
        right: u32,
    },

    /// Stereo channels of different lengths.
    #[error("channel length mismatch: left has {left} samples, right has {right}")]
    ChannelLengthMismatch {
        /// Left channel length.
        left: usize,
        /// Right channel length.
        right: usize,
    },

    /// The WAV container is not 16-bit integer PCM with one or two channels.
    #[error("unsupported format: {message}")]
    UnsupportedFormat {
        /// What was found.
        message: String,
    },

    /// Input for which the operation has no meaningful result.
    #[error("degenerate input to {operation}: {message}")]
    DegenerateInput {
        /// Operation that rejected the input.
        operation: &'static str,
        /// Error message.
        message: String,
    },

    /// Operation applied to a sound with the wrong channel layout.
    #[error("{operation} requires {expected} input")]
    LayoutMismatch {
        /// Operation name.
        operation: &'static str,
        /// Required layout ("mono" or "stereo").
        expected: &'static str,
    },

    /// Invalid parameter value.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Error message.
        message: String,
    },

    /// WAV container error reported by the decoder.
    #[error("WAV error: {0}")]
    Wav(#[from] hound::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AudioError {
    /// Creates an invalid parameter error.
    pub fn invalid_param(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Creates a degenerate input error.
    pub fn degenerate(operation: &'static str, message: impl Into<String>) -> Self {
        Self::DegenerateInput {
            operation,
            message: message.into(),
        }
    }

    /// Creates an unsupported format error.
    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            message: message.into(),
        }
    }

    /// Stable error code for reporting.
    pub fn code(&self) -> &'static str {
        match self {
            AudioError::InvalidSampleRate { .. } => "AUDIO_001",
            AudioError::RateMismatch { .. } => "AUDIO_002",
            AudioError::ChannelLengthMismatch { .. } => "AUDIO_003",
            AudioError::UnsupportedFormat { .. } => "AUDIO_004",
            AudioError::DegenerateInput { .. } => "AUDIO_005",
            AudioError::LayoutMismatch { .. } => "AUDIO_006",
            AudioError::InvalidParameter { .. } => "AUDIO_007",
            AudioError::Wav(_) => "AUDIO_008",
            AudioError::Io(_) => "AUDIO_009",
        }
    }
}
