//! Chain validation logic.
//!
//! Validation collects every problem instead of stopping at the first one.

use crate::chain::{EffectChain, Step};
use crate::error::{ErrorCode, ValidationError, ValidationResult, ValidationWarning, WarningCode};

/// Bass-boost iteration count above which a warning is emitted.
const LARGE_KERNEL_ITERATIONS: usize = 5000;

/// Validates a chain.
///
/// # Returns
/// * `ValidationResult` with `ok=true` if validation passed, with any warnings.
/// * `ValidationResult` with `ok=false` and errors if validation failed.
pub fn validate_chain(chain: &EffectChain) -> ValidationResult {
    let mut result = ValidationResult::default();

    validate_paths(chain, &mut result);

    if chain.steps.is_empty() {
        result.add_warning(ValidationWarning::with_path(
            WarningCode::NoSteps,
            "chain has no steps; the input is copied unchanged",
            "steps",
        ));
    }

    for (i, (step, stereo)) in chain.steps.iter().zip(chain.layouts()).enumerate() {
        let path = format!("steps[{}]", i);
        if step.requires_stereo() && !stereo {
            result.add_error(ValidationError::with_path(
                ErrorCode::RequiresStereo,
                format!("{} needs a stereo sound but receives mono", step.name()),
                path.clone(),
            ));
        }
        validate_step(step, &path, &mut result);
    }

    result
}

fn validate_paths(chain: &EffectChain, result: &mut ValidationResult) {
    if chain.input.path.trim().is_empty() {
        result.add_error(ValidationError::with_path(
            ErrorCode::EmptyInputPath,
            "input path must not be empty",
            "input.path",
        ));
    }

    if chain.output.trim().is_empty() {
        result.add_error(ValidationError::with_path(
            ErrorCode::EmptyOutputPath,
            "output path must not be empty",
            "output",
        ));
    } else if !chain.output.to_ascii_lowercase().ends_with(".wav") {
        result.add_error(ValidationError::with_path(
            ErrorCode::OutputNotWav,
            format!("output path must end in .wav, got '{}'", chain.output),
            "output",
        ));
    }
}

fn check_finite(value: f64, path: String, result: &mut ValidationResult) -> bool {
    if value.is_finite() {
        return true;
    }
    result.add_error(ValidationError::with_path(
        ErrorCode::NonFiniteParameter,
        format!("must be a finite number, got {}", value),
        path,
    ));
    false
}

fn validate_step(step: &Step, path: &str, result: &mut ValidationResult) {
    match step {
        Step::Reverse {} | Step::Pan {} | Step::RemoveVocals {} => {}
        Step::Mix { with, p } => {
            if with.trim().is_empty() {
                result.add_error(ValidationError::with_path(
                    ErrorCode::EmptyMixPath,
                    "mix partner path must not be empty",
                    format!("{}.with", path),
                ));
            }
            if check_finite(*p, format!("{}.p", path), result) && !(0.0..=1.0).contains(p) {
                result.add_error(ValidationError::with_path(
                    ErrorCode::MixProportionOutOfRange,
                    format!("must be in [0, 1], got {}", p),
                    format!("{}.p", path),
                ));
            }
        }
        Step::Convolve { kernel } => {
            if kernel.is_empty() {
                result.add_error(ValidationError::with_path(
                    ErrorCode::EmptyKernel,
                    "kernel must have at least one tap",
                    format!("{}.kernel", path),
                ));
            }
            for (i, tap) in kernel.iter().enumerate() {
                check_finite(*tap, format!("{}.kernel[{}]", path, i), result);
            }
        }
        Step::BassBoost { iterations, scale } => {
            check_finite(*scale, format!("{}.scale", path), result);
            if *iterations > LARGE_KERNEL_ITERATIONS {
                result.add_warning(ValidationWarning::with_path(
                    WarningCode::LargeKernel,
                    format!(
                        "{} iterations build a {}-tap kernel; filtering will be slow",
                        iterations,
                        2 * iterations + 3
                    ),
                    format!("{}.iterations", path),
                ));
            }
        }
        Step::Echo {
            count,
            delay_seconds,
            decay,
        } => {
            let delay_path = format!("{}.delay_seconds", path);
            if check_finite(*delay_seconds, delay_path.clone(), result) && *delay_seconds < 0.0 {
                result.add_error(ValidationError::with_path(
                    ErrorCode::NegativeDelay,
                    format!("must not be negative, got {}", delay_seconds),
                    delay_path,
                ));
            }
            if check_finite(*decay, format!("{}.decay", path), result) && decay.abs() >= 1.0 {
                result.add_warning(ValidationWarning::with_path(
                    WarningCode::NonDecayingEcho,
                    format!("decay {} does not attenuate successive echoes", decay),
                    format!("{}.decay", path),
                ));
            }
            if *count == 0 {
                result.add_warning(ValidationWarning::with_path(
                    WarningCode::NoOpStep,
                    "echo with count 0 leaves the sound unchanged",
                    format!("{}.count", path),
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn chain_with(step: Step) -> EffectChain {
        EffectChain::new("in.wav", false, "out.wav").step(step)
    }

    fn error_codes(result: &ValidationResult) -> Vec<ErrorCode> {
        result.errors.iter().map(|e| e.code).collect()
    }

    fn warning_codes(result: &ValidationResult) -> Vec<WarningCode> {
        result.warnings.iter().map(|w| w.code).collect()
    }

    #[test]
    fn test_valid_chain() {
        let result = validate_chain(&chain_with(Step::Echo {
            count: 5,
            delay_seconds: 0.3,
            decay: 0.6,
        }));
        assert!(result.is_ok());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_empty_chain_warns() {
        let result = validate_chain(&EffectChain::new("in.wav", false, "out.wav"));
        assert!(result.is_ok());
        assert_eq!(warning_codes(&result), vec![WarningCode::NoSteps]);
    }

    #[test]
    fn test_path_errors_are_all_reported() {
        let chain = EffectChain::new("", false, "out.mp3");
        let result = validate_chain(&chain);
        assert_eq!(
            error_codes(&result),
            vec![ErrorCode::EmptyInputPath, ErrorCode::OutputNotWav]
        );

        let result = validate_chain(&EffectChain::new("a.wav", false, " "));
        assert_eq!(error_codes(&result), vec![ErrorCode::EmptyOutputPath]);
    }

    #[test]
    fn test_output_extension_is_case_insensitive() {
        assert!(validate_chain(&EffectChain::new("a.wav", false, "B.WAV")).is_ok());
    }

    #[test]
    fn test_mix_proportion_range() {
        let result = validate_chain(&chain_with(Step::Mix {
            with: "b.wav".into(),
            p: 1.5,
        }));
        assert_eq!(
            error_codes(&result),
            vec![ErrorCode::MixProportionOutOfRange]
        );
        assert_eq!(result.errors[0].path.as_deref(), Some("steps[0].p"));
    }

    #[test]
    fn test_mix_nan_is_not_double_reported() {
        let result = validate_chain(&chain_with(Step::Mix {
            with: "".into(),
            p: f64::NAN,
        }));
        assert_eq!(
            error_codes(&result),
            vec![ErrorCode::EmptyMixPath, ErrorCode::NonFiniteParameter]
        );
    }

    #[test]
    fn test_empty_kernel() {
        let result = validate_chain(&chain_with(Step::Convolve { kernel: vec![] }));
        assert_eq!(error_codes(&result), vec![ErrorCode::EmptyKernel]);
    }

    #[test]
    fn test_kernel_tap_paths() {
        let result = validate_chain(&chain_with(Step::Convolve {
            kernel: vec![1.0, f64::INFINITY],
        }));
        assert_eq!(
            result.errors[0].path.as_deref(),
            Some("steps[0].kernel[1]")
        );
    }

    #[test]
    fn test_negative_delay() {
        let result = validate_chain(&chain_with(Step::Echo {
            count: 2,
            delay_seconds: -0.5,
            decay: 0.5,
        }));
        assert_eq!(error_codes(&result), vec![ErrorCode::NegativeDelay]);
    }

    #[test]
    fn test_echo_warnings() {
        let result = validate_chain(&chain_with(Step::Echo {
            count: 0,
            delay_seconds: 0.1,
            decay: 1.2,
        }));
        assert!(result.is_ok());
        assert_eq!(
            warning_codes(&result),
            vec![WarningCode::NonDecayingEcho, WarningCode::NoOpStep]
        );
    }

    #[test]
    fn test_pan_on_mono_input() {
        let result = validate_chain(&chain_with(Step::Pan {}));
        assert_eq!(error_codes(&result), vec![ErrorCode::RequiresStereo]);
        assert!(result.errors[0].message.contains("pan"));
    }

    #[test]
    fn test_pan_after_remove_vocals() {
        let chain = EffectChain::new("in.wav", true, "out.wav")
            .step(Step::RemoveVocals {})
            .step(Step::Pan {});
        let result = validate_chain(&chain);
        assert_eq!(error_codes(&result), vec![ErrorCode::RequiresStereo]);
        assert_eq!(result.errors[0].path.as_deref(), Some("steps[1]"));
    }

    #[test]
    fn test_large_bass_boost_warns() {
        let result = validate_chain(&chain_with(Step::BassBoost {
            iterations: 10_000,
            scale: 1.0,
        }));
        assert!(result.is_ok());
        assert_eq!(warning_codes(&result), vec![WarningCode::LargeKernel]);
        assert!(result.warnings[0].message.contains("20003-tap"));
    }
}
