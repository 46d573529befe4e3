//! Effect-chain document types.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SpecError;


/// A complete processing job: read one file, run the steps, write the result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EffectChain {
    /// Source file.
    pub input: ChainInput,
    /// Steps applied in order.
    #[serde(default)]
    pub steps: Vec<Step>,
    /// Destination WAV path.
    pub output: String,
}

/// Source file of a chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChainInput {
    /// Path to a 16-bit PCM WAV file.
    pub path: String,
    /// Decode as stereo instead of downmixing to mono.
    #[serde(default)]
    pub stereo: bool,
}

/// One processing step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", deny_unknown_fields)]
pub enum Step {
    /// Play the sound backwards.
    Reverse {},
    /// Cross-fade with another file.
    Mix {
        /// Path of the partner file, decoded with the current layout.
        with: String,
        /// Weight of the current sound (0.0-1.0); the partner gets `1 - p`.
        p: f64,
    },
    /// Sweep from the left speaker to the right. Stereo only.
    Pan {},
    /// Subtract the right channel from the left. Stereo only; yields mono.
    RemoveVocals {},
    /// Convolve with an explicit kernel.
    Convolve {
        /// Impulse response taps.
        kernel: Vec<f64>,
    },
    /// Convolve with a bass-boost kernel.
    BassBoost {
        /// Number of self-convolutions of the smoothing kernel.
        iterations: usize,
        /// Gain of the low-pass part.
        scale: f64,
    },
    /// Multi-tap echo.
    Echo {
        /// Number of echo taps.
        count: usize,
        /// Seconds between taps.
        delay_seconds: f64,
        /// Attenuation per tap.
        decay: f64,
    },
}

impl Step {
    /// Name used in the JSON `type` tag.
    pub fn name(&self) -> &'static str {
        match self {
            Step::Reverse {} => "reverse",
            Step::Mix { .. } => "mix",
            Step::Pan {} => "pan",
            Step::RemoveVocals {} => "remove_vocals",
            Step::Convolve { .. } => "convolve",
            Step::BassBoost { .. } => "bass_boost",
            Step::Echo { .. } => "echo",
        }
    }

    /// Returns true if the step needs a stereo sound.
    pub fn requires_stereo(&self) -> bool {
        matches!(self, Step::Pan {} | Step::RemoveVocals {})
    }
}

impl EffectChain {
    /// Creates a chain with no steps.
    pub fn new(input: impl Into<String>, stereo: bool, output: impl Into<String>) -> Self {
        Self {
            input: ChainInput {
                path: input.into(),
                stereo,
            },
            steps: Vec::new(),
            output: output.into(),
        }
    }

    /// Appends a step.
    pub fn step(mut self, step: Step) -> Self {
        self.steps.push(step);
        self
    }

    /// Parses a chain from JSON.
    pub fn from_json(json: &str) -> Result<Self, SpecError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a chain file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SpecError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Serializes the chain to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, SpecError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Returns true if the sound is stereo when it reaches each step, in order.
    ///
    /// `remove_vocals` is the only step that changes the layout.
    pub fn layouts(&self) -> Vec<bool> {
        let mut stereo = self.input.stereo;
        self.steps
            .iter()
            .map(|step| {
                let before = stereo;
                if matches!(step, Step::RemoveVocals {}) {
                    stereo = false;
                }
                before
            })
            .collect()
    }
}
