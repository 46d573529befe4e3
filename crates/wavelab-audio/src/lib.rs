//! wavelab audio engine
//!
//! Signal transforms over in-memory sample buffers, plus the 16-bit PCM WAV
//! boundary used to get sounds in and out of files.
//!
//! # Overview
//!
//! Samples are `f64` values nominally in [-1, 1]. A sound is either a
//! [`MonoSignal`] or a [`StereoSignal`]; every operation returns a new signal
//! and leaves its inputs untouched.
//!
//! - **Element-wise** - reverse, mix, pan, vocal removal
//! - **Convolution** - direct linear convolution with an arbitrary kernel
//! - **Bass boost** - convolution with a smoothed low-pass kernel plus identity
//! - **Echo** - feed-forward multi-tap delay
//!
//! # Determinism
//!
//! Convolution accumulates in a fixed order and the WAV writer emits a fixed
//! header, so the same input always produces byte-identical output.
//!
//! # Example
//!
//! ```ignore
//! use wavelab_audio::{echo, read_mono, write_wav, Sound};
//!
//! let voice = read_mono("voice.wav")?;
//! let echoed = echo(&voice, 3, 0.25, 0.5)?;
//! write_wav(&Sound::Mono(echoed), "voice_echo.wav")?;
//! ```
//!
//! # Crate Structure
//!
//! - [`signal`] - Mono/stereo signal types
//! - [`transform`] - Element-wise transforms
//! - [`convolve`] - Linear convolution
//! - [`bass_boost`] - Bass-boost kernel and filter
//! - [`echo`] - Multi-tap echo
//! - [`chain`] - Effect-chain execution
//! - [`wav`] - WAV reading and deterministic writing

pub mod bass_boost;
pub mod chain;
pub mod convolve;
pub mod echo;
pub mod error;
pub mod signal;
pub mod transform;
pub mod wav;

// Re-export main types at crate root
pub use bass_boost::{bass_boost, bass_boost_kernel};
pub use chain::{apply_step, apply_steps, FileLoader, SoundLoader};
pub use convolve::convolve;
pub use echo::echo;
pub use error::{AudioError, AudioResult};
pub use signal::{MonoSignal, Sound, StereoSignal};
pub use transform::{mix, mix_stereo, pan, remove_vocals, reverse};
pub use wav::{
    decode_wav, encode_wav, pcm_hash, probe_wav, read_mono, read_stereo, read_wav, write_wav,
    ChannelLayout, WavInfo, WavResult,
};
