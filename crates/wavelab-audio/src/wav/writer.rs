//! Deterministic WAV writing and PCM conversion.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::AudioResult;
use crate::signal::Sound;

use super::format::WavFormat;

/// Full scale used when quantizing to 16 bits.
const PCM_SCALE: f64 = 32767.0;

/// Writes a complete WAV file to a writer.
///
/// # Arguments
/// * `writer` - Output writer
/// * `format` - WAV format parameters
/// * `pcm_data` - Raw PCM samples as bytes
pub fn write_wav_bytes<W: Write>(
    writer: &mut W,
    format: &WavFormat,
    pcm_data: &[u8],
) -> io::Result<()> {
    let data_size = pcm_data.len() as u32;
    let file_size = 36 + data_size; // RIFF size excludes the first 8 bytes

    // RIFF header
    writer.write_all(b"RIFF")?;
    writer.write_all(&file_size.to_le_bytes())?;
    writer.write_all(b"WAVE")?;

    // fmt chunk
    writer.write_all(b"fmt ")?;
    writer.write_all(&16u32.to_le_bytes())?;
    writer.write_all(&1u16.to_le_bytes())?; // PCM
    writer.write_all(&format.channels.to_le_bytes())?;
    writer.write_all(&format.sample_rate.to_le_bytes())?;
    writer.write_all(&format.byte_rate().to_le_bytes())?;
    writer.write_all(&format.block_align().to_le_bytes())?;
    writer.write_all(&format.bits_per_sample.to_le_bytes())?;

    // data chunk
    writer.write_all(b"data")?;
    writer.write_all(&data_size.to_le_bytes())?;
    writer.write_all(pcm_data)?;

    Ok(())
}

/// Quantizes one sample: clamp to [-1, 1], scale by 32767, round.
#[inline]
pub fn quantize(sample: f64) -> i16 {
    (sample.clamp(-1.0, 1.0) * PCM_SCALE).round() as i16
}

/// Converts f64 samples to little-endian 16-bit PCM bytes.
pub fn samples_to_pcm16(samples: &[f64]) -> Vec<u8> {
    let mut pcm = Vec::with_capacity(samples.len() * 2);
    for &sample in samples {
        pcm.extend_from_slice(&quantize(sample).to_le_bytes());
    }
    pcm
}

/// Converts two channels to interleaved little-endian 16-bit PCM bytes.
pub fn stereo_to_pcm16(left: &[f64], right: &[f64]) -> Vec<u8> {
    let mut pcm = Vec::with_capacity(left.len().min(right.len()) * 4);
    for (&l, &r) in left.iter().zip(right) {
        pcm.extend_from_slice(&quantize(l).to_le_bytes());
        pcm.extend_from_slice(&quantize(r).to_le_bytes());
    }
    pcm
}

/// Format and PCM payload for a sound.
pub(crate) fn sound_to_pcm16(sound: &Sound) -> (WavFormat, Vec<u8>) {
    match sound {
        Sound::Mono(mono) => (
            WavFormat::mono(mono.rate()),
            samples_to_pcm16(mono.samples()),
        ),
        Sound::Stereo(stereo) => (
            WavFormat::stereo(stereo.rate()),
            stereo_to_pcm16(stereo.left(), stereo.right()),
        ),
    }
}

/// Writes a WAV file to a byte vector.
pub fn write_wav_to_vec(format: &WavFormat, pcm_data: &[u8]) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(44 + pcm_data.len());
    write_wav_bytes(&mut buffer, format, pcm_data).expect("writing to Vec should not fail");
    buffer
}

/// Encodes a sound as a complete WAV file in memory.
pub fn encode_wav(sound: &Sound) -> Vec<u8> {
    let (format, pcm) = sound_to_pcm16(sound);
    write_wav_to_vec(&format, &pcm)
}

/// Encodes a sound and writes it to `path`.
pub fn write_wav(sound: &Sound, path: impl AsRef<Path>) -> AudioResult<()> {
    let (format, pcm) = sound_to_pcm16(sound);
    let mut writer = BufWriter::new(File::create(path)?);
    write_wav_bytes(&mut writer, &format, &pcm)?;
    writer.flush()?;
    Ok(())
}
