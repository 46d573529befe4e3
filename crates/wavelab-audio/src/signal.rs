//! Sound value types.
//!
//! Every operation in this crate consumes borrowed signals and returns a
//! freshly allocated one. The sample rate is fixed at construction.

use crate::error::{AudioError, AudioResult};

fn check_rate(rate: u32) -> AudioResult<()> {
    if rate == 0 {
        return Err(AudioError::InvalidSampleRate { rate });
    }
    Ok(())
}

/// Single-channel audio.
#[derive(Debug, Clone, PartialEq)]
pub struct MonoSignal {
    rate: u32,
    samples: Vec<f64>,
}

impl MonoSignal {
    /// Creates a mono signal. Fails if `rate` is zero.
    pub fn new(rate: u32, samples: Vec<f64>) -> AudioResult<Self> {
        check_rate(rate)?;
        Ok(Self { rate, samples })
    }

    /// Creates a signal of `len` zero samples.
    pub fn silence(rate: u32, len: usize) -> AudioResult<Self> {
        Self::new(rate, vec![0.0; len])
    }

    /// Builds a signal from a rate taken from an existing signal.
    pub(crate) fn with_rate(rate: u32, samples: Vec<f64>) -> Self {
        debug_assert!(rate > 0);
        Self { rate, samples }
    }

    /// Builds a signal sharing this signal's rate.
    pub(crate) fn with_samples(&self, samples: Vec<f64>) -> Self {
        Self::with_rate(self.rate, samples)
    }

    /// Sample rate in Hz.
    pub fn rate(&self) -> u32 {
        self.rate
    }

    /// Sample values.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns true if the signal has no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.samples.len() as f64 / self.rate as f64
    }
}

/// Two-channel audio with equal-length channels.
#[derive(Debug, Clone, PartialEq)]
pub struct StereoSignal {
    rate: u32,
    left: Vec<f64>,
    right: Vec<f64>,
}

impl StereoSignal {
    /// Creates a stereo signal. Fails if `rate` is zero or the channels
    /// differ in length.
    pub fn new(rate: u32, left: Vec<f64>, right: Vec<f64>) -> AudioResult<Self> {
        check_rate(rate)?;
        if left.len() != right.len() {
            return Err(AudioError::ChannelLengthMismatch {
                left: left.len(),
                right: right.len(),
            });
        }
        Ok(Self { rate, left, right })
    }

    /// Duplicates a mono signal onto both channels.
    pub fn from_mono(mono: &MonoSignal) -> Self {
        Self {
            rate: mono.rate,
            left: mono.samples.clone(),
            right: mono.samples.clone(),
        }
    }

    /// Builds a signal sharing this signal's rate.
    pub(crate) fn with_channels(&self, left: Vec<f64>, right: Vec<f64>) -> Self {
        debug_assert_eq!(left.len(), right.len());
        Self {
            rate: self.rate,
            left,
            right,
        }
    }

    /// Sample rate in Hz.
    pub fn rate(&self) -> u32 {
        self.rate
    }

    /// Left channel samples.
    pub fn left(&self) -> &[f64] {
        &self.left
    }

    /// Right channel samples.
    pub fn right(&self) -> &[f64] {
        &self.right
    }

    /// Splits the signal into one mono signal per channel.
    pub fn split(&self) -> (MonoSignal, MonoSignal) {
        (
            MonoSignal {
                rate: self.rate,
                samples: self.left.clone(),
            },
            MonoSignal {
                rate: self.rate,
                samples: self.right.clone(),
            },
        )
    }

    /// Joins two mono signals into a stereo signal.
    pub fn join(left: MonoSignal, right: MonoSignal) -> AudioResult<Self> {
        if left.rate != right.rate {
            return Err(AudioError::RateMismatch {
                left: left.rate,
                right: right.rate,
            });
        }
        Self::new(left.rate, left.samples, right.samples)
    }

    /// Converts to mono by averaging channels.
    pub fn to_mono(&self) -> MonoSignal {
        let samples = self
            .left
            .iter()
            .zip(self.right.iter())
            .map(|(l, r)| (l + r) * 0.5)
            .collect();
        MonoSignal {
            rate: self.rate,
            samples,
        }
    }

    /// Samples per channel.
    pub fn len(&self) -> usize {
        self.left.len()
    }

    /// Returns true if empty.
    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
    }

    /// Duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.left.len() as f64 / self.rate as f64
    }
}

/// A sound of either channel layout.
#[derive(Debug, Clone, PartialEq)]
pub enum Sound {
    /// Mono sound.
    Mono(MonoSignal),
    /// Stereo sound.
    Stereo(StereoSignal),
}

impl Sound {
    /// Sample rate in Hz.
    pub fn rate(&self) -> u32 {
        match self {
            Sound::Mono(mono) => mono.rate(),
            Sound::Stereo(stereo) => stereo.rate(),
        }
    }

    /// Samples per channel.
    pub fn len(&self) -> usize {
        match self {
            Sound::Mono(mono) => mono.len(),
            Sound::Stereo(stereo) => stereo.len(),
        }
    }

    /// Returns true if empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if this is a stereo sound.
    pub fn is_stereo(&self) -> bool {
        matches!(self, Sound::Stereo(_))
    }

    /// Number of channels.
    pub fn channels(&self) -> u16 {
        match self {
            Sound::Mono(_) => 1,
            Sound::Stereo(_) => 2,
        }
    }

    /// Duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        match self {
            Sound::Mono(mono) => mono.duration_seconds(),
            Sound::Stereo(stereo) => stereo.duration_seconds(),
        }
    }

    /// Converts to mono (averaging if stereo).
    pub fn to_mono(&self) -> MonoSignal {
        match self {
            Sound::Mono(mono) => mono.clone(),
            Sound::Stereo(stereo) => stereo.to_mono(),
        }
    }

    /// Converts to stereo (duplicating if mono).
    pub fn to_stereo(&self) -> StereoSignal {
        match self {
            Sound::Mono(mono) => StereoSignal::from_mono(mono),
            Sound::Stereo(stereo) => stereo.clone(),
        }
    }

    /// Applies a mono operation to every channel.
    ///
    /// A stereo sound is split, processed channel by channel and rejoined,
    /// so `f` must produce equal-length outputs for equal-length inputs.
    pub fn map_channels<F>(&self, mut f: F) -> AudioResult<Sound>
    where
        F: FnMut(&MonoSignal) -> AudioResult<MonoSignal>,
    {
        match self {
            Sound::Mono(mono) => Ok(Sound::Mono(f(mono)?)),
            Sound::Stereo(stereo) => {
                let (left, right) = stereo.split();
                let joined = StereoSignal::join(f(&left)?, f(&right)?)?;
                Ok(Sound::Stereo(joined))
            }
        }
    }
}

impl From<MonoSignal> for Sound {
    fn from(mono: MonoSignal) -> Self {
        Sound::Mono(mono)
    }
}

impl From<StereoSignal> for Sound {
    fn from(stereo: StereoSignal) -> Self {
        Sound::Stereo(stereo)
    }
}
