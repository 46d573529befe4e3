//! Encoded WAV output bundled with its PCM fingerprint.

use crate::signal::Sound;

use super::writer::{sound_to_pcm16, write_wav_to_vec};

/// BLAKE3 hash of the 16-bit PCM payload a sound encodes to.
///
/// The hash ignores the RIFF header, so it identifies audio content only.
pub fn pcm_hash(sound: &Sound) -> String {
    let (_, pcm) = sound_to_pcm16(sound);
    blake3::hash(&pcm).to_hex().to_string()
}

/// Result of encoding a sound.
#[derive(Debug, Clone)]
pub struct WavResult {
    /// Complete WAV file bytes.
    pub wav_data: Vec<u8>,
    /// BLAKE3 hash of the PCM data only.
    pub pcm_hash: String,
    /// Whether the output is stereo.
    pub is_stereo: bool,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of samples per channel.
    pub num_samples: usize,
}

impl WavResult {
    /// Encodes a sound.
    pub fn from_sound(sound: &Sound) -> Self {
        let (format, pcm) = sound_to_pcm16(sound);
        let pcm_hash = blake3::hash(&pcm).to_hex().to_string();
        let wav_data = write_wav_to_vec(&format, &pcm);

        Self {
            wav_data,
            pcm_hash,
            is_stereo: sound.is_stereo(),
            sample_rate: sound.rate(),
            num_samples: sound.len(),
        }
    }

    /// Returns the duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.num_samples as f64 / self.sample_rate as f64
    }
}
