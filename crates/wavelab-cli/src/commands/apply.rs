//! Apply command implementation
//!
//! Runs an effect chain file: validate, read the input, apply each step in
//! order and write the output.

use anyhow::{Context, Result};
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;
use wavelab_audio::{apply_steps, write_wav, ChannelLayout, FileLoader, SoundLoader};
use wavelab_spec::{validate_chain, EffectChain};

use super::reporting::Reporter;

/// Run the apply command
///
/// Relative paths inside the chain are resolved against the directory that
/// holds the chain file.
///
/// # Arguments
/// * `chain_path` - Path to the effect chain JSON file
/// * `quiet` - Suppress status output
///
/// # Returns
/// Exit code: 0 on success, 1 if the chain is invalid
pub fn run(chain_path: &str, quiet: bool) -> Result<ExitCode> {
    let reporter = Reporter::new(quiet);
    reporter.action("Applying", chain_path);

    let chain = EffectChain::from_file(chain_path)
        .with_context(|| format!("Failed to load chain file: {}", chain_path))?;
    let base_dir = Path::new(chain_path)
        .parent()
        .unwrap_or_else(|| Path::new("."));

    execute(&chain, &FileLoader::new(base_dir), &reporter)
}

/// Validates and runs a chain, writing its output through `loader`'s paths.
pub(crate) fn execute(
    chain: &EffectChain,
    loader: &FileLoader,
    reporter: &Reporter,
) -> Result<ExitCode> {
    let start = Instant::now();

    let validation = validate_chain(chain);
    reporter.validation(&validation);
    if !validation.is_ok() {
        reporter.failure(format!(
            "Chain has {} error(s)",
            validation.errors.len()
        ));
        return Ok(ExitCode::from(1));
    }

    let input_path = loader.resolve(&chain.input.path);
    reporter.action("Reading", input_path.display());
    let layout = ChannelLayout::from_stereo_flag(chain.input.stereo);
    let sound = loader
        .load(&chain.input.path, layout)
        .with_context(|| format!("Failed to read input: {}", input_path.display()))?;
    reporter.sound(&sound);

    if !chain.steps.is_empty() {
        reporter.action("Processing", format!("{} step(s)", chain.steps.len()));
    }
    let mut completed = 0;
    let sound = apply_steps(sound, &chain.steps, loader, |i, step, sound| {
        reporter.step(i, step.name(), sound);
        completed = i + 1;
    })
    .with_context(|| {
        let name = chain.steps.get(completed).map_or("unknown", |step| step.name());
        format!("Step {} ({}) failed", completed + 1, name)
    })?;

    let output_path = loader.resolve(&chain.output);
    reporter.action("Writing", output_path.display());
    write_wav(&sound, &output_path)
        .with_context(|| format!("Failed to write output: {}", output_path.display()))?;
    reporter.sound(&sound);
    reporter.hash(&sound);

    reporter.success(
        format!("Wrote {}", output_path.display()),
        start.elapsed(),
    );
    Ok(ExitCode::SUCCESS)
}
