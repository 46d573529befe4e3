//! Single-effect commands (`reverse`, `echo`, `bass-boost`, ...).
//!
//! Each one is a one-step chain run through [`super::apply`], so the checks
//! and output match the `apply` command.

use anyhow::Result;
use std::process::ExitCode;
use wavelab_audio::FileLoader;
use wavelab_spec::{EffectChain, Step};

use super::apply;
use super::reporting::Reporter;

/// Run a single effect
///
/// # Arguments
/// * `input` - Input WAV path
/// * `output` - Output WAV path
/// * `stereo` - Read the input as stereo
/// * `step` - Effect to apply
/// * `quiet` - Suppress status output
///
/// # Returns
/// Exit code: 0 on success, 1 if the parameters are invalid
pub fn run(input: &str, output: &str, stereo: bool, step: Step, quiet: bool) -> Result<ExitCode> {
    let reporter = Reporter::new(quiet);
    reporter.action("Effect", step.name());

    let chain = EffectChain::new(input, stereo, output).step(step);
    apply::execute(&chain, &FileLoader::default(), &reporter)
}
