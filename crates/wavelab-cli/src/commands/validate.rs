//! Validate command implementation
//!
//! Checks an effect chain file without reading any audio.

use anyhow::{Context, Result};
use std::process::ExitCode;
use std::time::Instant;
use wavelab_spec::{validate_chain, EffectChain};

use super::reporting::Reporter;

/// Run the validate command
///
/// # Arguments
/// * `chain_path` - Path to the effect chain JSON file
/// * `quiet` - Suppress status output
///
/// # Returns
/// Exit code: 0 if valid, 1 if invalid
pub fn run(chain_path: &str, quiet: bool) -> Result<ExitCode> {
    let start = Instant::now();
    let reporter = Reporter::new(quiet);
    reporter.action("Validating", chain_path);

    let chain = EffectChain::from_file(chain_path)
        .with_context(|| format!("Failed to load chain file: {}", chain_path))?;
    reporter.detail("Input", &chain.input.path);
    reporter.detail("Steps", chain.steps.len());
    reporter.detail("Output", &chain.output);

    let result = validate_chain(&chain);
    reporter.validation(&result);

    if result.is_ok() {
        reporter.success("Chain is valid", start.elapsed());
        Ok(ExitCode::SUCCESS)
    } else {
        reporter.failure(format!("Chain has {} error(s)", result.errors.len()));
        Ok(ExitCode::from(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &tempfile::TempDir, json: &str) -> String {
        let path = dir.path().join("chain.json");
        std::fs::write(&path, json).unwrap();
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn validate_accepts_valid_chain() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write(
            &tmp,
            r#"{"input": {"path": "in.wav"}, "steps": [{"type": "reverse"}], "output": "out.wav"}"#,
        );
        assert_eq!(run(&path, true).unwrap(), ExitCode::SUCCESS);
    }

    #[test]
    fn validate_reports_errors() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write(
            &tmp,
            r#"{"input": {"path": ""}, "steps": [{"type": "convolve", "kernel": []}], "output": "out.mp3"}"#,
        );
        assert_eq!(run(&path, true).unwrap(), ExitCode::from(1));
    }

    #[test]
    fn validate_malformed_json_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write(&tmp, r#"{"input": "#);
        let err = run(&path, true).unwrap_err();
        assert!(err.to_string().contains("Failed to load chain file"));
    }
}
