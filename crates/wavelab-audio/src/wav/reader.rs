//! WAV decoding.
//!
//! Only 16-bit integer PCM with one or two channels is accepted. Samples are
//! normalized by dividing by 2^15.

use std::io::{Cursor, Read};
use std::path::Path;

use crate::error::{AudioError, AudioResult};
use crate::signal::{MonoSignal, Sound, StereoSignal};

use super::format::{ChannelLayout, WavInfo, BITS_PER_SAMPLE};

/// Divisor mapping i16 values into [-1, 1).
const PCM_DIVISOR: f64 = 32768.0;

/// Decodes a WAV file held in memory.
pub fn decode_wav(bytes: &[u8], layout: ChannelLayout) -> AudioResult<Sound> {
    let reader = hound::WavReader::new(Cursor::new(bytes))?;
    decode(reader, layout)
}

/// Reads and decodes a WAV file from disk.
pub fn read_wav(path: impl AsRef<Path>, layout: ChannelLayout) -> AudioResult<Sound> {
    let reader = hound::WavReader::open(path)?;
    decode(reader, layout)
}

/// Reads the header of a WAV file without decoding its samples.
///
/// Succeeds for any format `hound` understands, including ones
/// [`read_wav`] rejects.
pub fn probe_wav(path: impl AsRef<Path>) -> AudioResult<WavInfo> {
    let reader = hound::WavReader::open(path)?;
    let spec = reader.spec();
    Ok(WavInfo {
        channels: spec.channels,
        sample_rate: spec.sample_rate,
        bits_per_sample: spec.bits_per_sample,
        is_float: spec.sample_format == hound::SampleFormat::Float,
        frames: reader.duration(),
    })
}

/// Reads a WAV file as mono, averaging stereo sources.
pub fn read_mono(path: impl AsRef<Path>) -> AudioResult<MonoSignal> {
    match read_wav(path, ChannelLayout::Mono)? {
        Sound::Mono(mono) => Ok(mono),
        Sound::Stereo(stereo) => Ok(stereo.to_mono()),
    }
}

/// Reads a WAV file as stereo, duplicating mono sources.
pub fn read_stereo(path: impl AsRef<Path>) -> AudioResult<StereoSignal> {
    match read_wav(path, ChannelLayout::Stereo)? {
        Sound::Stereo(stereo) => Ok(stereo),
        Sound::Mono(mono) => Ok(StereoSignal::from_mono(&mono)),
    }
}

fn decode<R: Read>(reader: hound::WavReader<R>, layout: ChannelLayout) -> AudioResult<Sound> {
    let spec = reader.spec();

    if spec.sample_format != hound::SampleFormat::Int {
        return Err(AudioError::unsupported(format!(
            "only integer PCM is supported, got {:?}",
            spec.sample_format
        )));
    }
    if spec.bits_per_sample != BITS_PER_SAMPLE {
        return Err(AudioError::unsupported(format!(
            "unsupported bit depth: {} bits (only 16-bit files are supported)",
            spec.bits_per_sample
        )));
    }
    if !(1..=2).contains(&spec.channels) {
        return Err(AudioError::unsupported(format!(
            "{} channels (only mono and stereo are supported)",
            spec.channels
        )));
    }

    let samples: Vec<i16> = reader
        .into_samples::<i16>()
        .collect::<Result<_, hound::Error>>()?;
    let rate = spec.sample_rate;

    let normalize = |v: i16| v as f64 / PCM_DIVISOR;

    let sound = match (spec.channels, layout) {
        (1, ChannelLayout::Mono) => {
            Sound::Mono(MonoSignal::new(rate, samples.into_iter().map(normalize).collect())?)
        }
        (1, ChannelLayout::Stereo) => {
            let channel: Vec<f64> = samples.into_iter().map(normalize).collect();
            Sound::Stereo(StereoSignal::new(rate, channel.clone(), channel)?)
        }
        (_, ChannelLayout::Mono) => {
            // Average the integer pair, then normalize.
            let mono = samples
                .chunks_exact(2)
                .map(|frame| (frame[0] as f64 + frame[1] as f64) / 2.0 / PCM_DIVISOR)
                .collect();
            Sound::Mono(MonoSignal::new(rate, mono)?)
        }
        (_, ChannelLayout::Stereo) => {
            let (left, right): (Vec<f64>, Vec<f64>) = samples
                .chunks_exact(2)
                .map(|frame| (normalize(frame[0]), normalize(frame[1])))
                .unzip();
            Sound::Stereo(StereoSignal::new(rate, left, right)?)
        }
    };

    Ok(sound)
}
