//! WAV file format parameters.

/// Bit depth of every file this crate reads or writes.
pub const BITS_PER_SAMPLE: u16 = 16;

/// WAV file format parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavFormat {
    /// Number of channels (1 = mono, 2 = stereo).
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample (always 16).
    pub bits_per_sample: u16,
}

impl WavFormat {
    /// Creates a mono WAV format.
    pub fn mono(sample_rate: u32) -> Self {
        Self {
            channels: 1,
            sample_rate,
            bits_per_sample: BITS_PER_SAMPLE,
        }
    }

    /// Creates a stereo WAV format.
    pub fn stereo(sample_rate: u32) -> Self {
        Self {
            channels: 2,
            sample_rate,
            bits_per_sample: BITS_PER_SAMPLE,
        }
    }

    /// Bytes per sample (per channel).
    pub(crate) fn bytes_per_sample(&self) -> u16 {
        self.bits_per_sample / 8
    }

    /// Bytes per sample frame.
    pub(crate) fn block_align(&self) -> u16 {
        self.channels * self.bytes_per_sample()
    }

    /// Bytes per second.
    pub(crate) fn byte_rate(&self) -> u32 {
        self.sample_rate * self.block_align() as u32
    }
}

/// Header fields of a WAV file, read without decoding its samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavInfo {
    /// Number of channels.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample.
    pub bits_per_sample: u16,
    /// Whether samples are IEEE floats rather than integers.
    pub is_float: bool,
    /// Number of sample frames (samples per channel).
    pub frames: u32,
}

impl WavInfo {
    /// Returns true if the file can be decoded by this crate.
    pub fn is_supported(&self) -> bool {
        !self.is_float && self.bits_per_sample == BITS_PER_SAMPLE && (1..=2).contains(&self.channels)
    }

    /// Returns the duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.frames as f64 / self.sample_rate as f64
    }
}

/// Channel layout requested when decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChannelLayout {
    /// Decode to a single channel, averaging stereo sources.
    #[default]
    Mono,
    /// Decode to two channels, duplicating mono sources.
    Stereo,
}

impl ChannelLayout {
    /// Layout matching the given flag.
    pub fn from_stereo_flag(stereo: bool) -> Self {
        if stereo {
            ChannelLayout::Stereo
        } else {
            ChannelLayout::Mono
        }
    }
}
