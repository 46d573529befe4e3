//! 16-bit PCM WAV codec.
//!
//! Decoding goes through `hound`. Encoding uses a small writer that emits a
//! fixed 44-byte header and no metadata, so identical audio always produces
//! identical bytes.

mod format;
mod reader;
mod result;
mod writer;


pub use format::{ChannelLayout, WavFormat, WavInfo, BITS_PER_SAMPLE};
pub use reader::{decode_wav, probe_wav, read_mono, read_stereo, read_wav};
pub use result::{pcm_hash, WavResult};
pub use writer::{
    encode_wav, quantize, samples_to_pcm16, stereo_to_pcm16, write_wav, write_wav_bytes,
    write_wav_to_vec,
};
