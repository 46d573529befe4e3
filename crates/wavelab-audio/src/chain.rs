//! Effect-chain execution.
//!
//! Steps written for mono signals (reverse, convolve, bass boost, echo) run on
//! each channel of a stereo sound independently. Pan and vocal removal need a
//! stereo sound. Mix loads its partner with the current sound's layout.

use std::path::{Path, PathBuf};

use wavelab_spec::Step;

use crate::bass_boost::bass_boost;
use crate::convolve::convolve;
use crate::echo::echo;
use crate::error::{AudioError, AudioResult};
use crate::signal::{Sound, StereoSignal};
use crate::transform::{mix, mix_stereo, pan, remove_vocals, reverse};
use crate::wav::{read_wav, ChannelLayout};

/// Source of the sounds a chain refers to by path.
pub trait SoundLoader {
    /// Loads the sound at `path` with the requested layout.
    fn load(&self, path: &str, layout: ChannelLayout) -> AudioResult<Sound>;
}

/// Loads WAV files from disk, resolving relative paths against a base
/// directory (usually the directory holding the chain file).
#[derive(Debug, Clone, Default)]
pub struct FileLoader {
    base_dir: Option<PathBuf>,
}

impl FileLoader {
    /// Creates a loader that resolves relative paths against `base_dir`.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: Some(base_dir.into()),
        }
    }

    /// Resolves a chain path to a filesystem path.
    pub fn resolve(&self, path: &str) -> PathBuf {
        let path = Path::new(path);
        match &self.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }
}

impl SoundLoader for FileLoader {
    fn load(&self, path: &str, layout: ChannelLayout) -> AudioResult<Sound> {
        read_wav(self.resolve(path), layout)
    }
}

fn layout_of(sound: &Sound) -> ChannelLayout {
    ChannelLayout::from_stereo_flag(sound.is_stereo())
}

/// Applies one step to a sound.
pub fn apply_step(sound: &Sound, step: &Step, loader: &dyn SoundLoader) -> AudioResult<Sound> {
    match step {
        Step::Reverse {} => sound.map_channels(|ch| Ok(reverse(ch))),
        Step::Mix { with, p } => {
            let partner = loader.load(with, layout_of(sound))?;
            match (sound, &partner) {
                (Sound::Mono(a), Sound::Mono(b)) => Ok(Sound::Mono(mix(a, b, *p)?)),
                (Sound::Stereo(a), Sound::Stereo(b)) => Ok(Sound::Stereo(mix_stereo(a, b, *p)?)),
                (Sound::Mono(a), Sound::Stereo(b)) => Ok(Sound::Mono(mix(a, &b.to_mono(), *p)?)),
                (Sound::Stereo(a), Sound::Mono(b)) => {
                    Ok(Sound::Stereo(mix_stereo(a, &StereoSignal::from_mono(b), *p)?))
                }
            }
        }
        Step::Pan {} => match sound {
            Sound::Stereo(stereo) => Ok(Sound::Stereo(pan(stereo))),
            Sound::Mono(_) => Err(AudioError::LayoutMismatch {
                operation: "pan",
                expected: "stereo",
            }),
        },
        Step::RemoveVocals {} => match sound {
            Sound::Stereo(stereo) => Ok(Sound::Mono(remove_vocals(stereo))),
            Sound::Mono(_) => Err(AudioError::LayoutMismatch {
                operation: "remove_vocals",
                expected: "stereo",
            }),
        },
        Step::Convolve { kernel } => sound.map_channels(|ch| Ok(convolve(ch, kernel))),
        Step::BassBoost { iterations, scale } => {
            sound.map_channels(|ch| Ok(bass_boost(ch, *iterations, *scale)))
        }
        Step::Echo {
            count,
            delay_seconds,
            decay,
        } => sound.map_channels(|ch| echo(ch, *count, *delay_seconds, *decay)),
    }
}

/// Applies steps in order to an already loaded sound.
///
/// `on_step` sees the index, the step and the sound it produced after each
/// successful step. The first failing step stops the run.
pub fn apply_steps<F>(
    sound: Sound,
    steps: &[Step],
    loader: &dyn SoundLoader,
    mut on_step: F,
) -> AudioResult<Sound>
where
    F: FnMut(usize, &Step, &Sound),
{
    steps
        .iter()
        .enumerate()
        .try_fold(sound, |current, (i, step)| {
            let next = apply_step(&current, step, loader)?;
            on_step(i, step, &next);
            Ok(next)
        })
}
