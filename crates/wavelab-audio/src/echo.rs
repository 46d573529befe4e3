//! Multi-tap echo.
//!
//! A feed-forward cascade: tap `k` is the input delayed by `k * delay` samples
//! and scaled by `decay` `k` times. Taps never read back from the output.

use crate::error::{AudioError, AudioResult};
use crate::signal::MonoSignal;

/// Converts a delay in seconds to whole samples, rounding half away from zero.
///
/// # Returns
/// The sample count, or `DegenerateInput` for a negative, non-finite or
/// unrepresentable delay
pub fn delay_in_samples(delay_seconds: f64, rate: u32) -> AudioResult<usize> {
    if !delay_seconds.is_finite() {
        return Err(AudioError::degenerate(
            "echo",
            format!("delay must be finite, got {}", delay_seconds),
        ));
    }
    if delay_seconds < 0.0 {
        return Err(AudioError::degenerate(
            "echo",
            format!("delay must not be negative, got {}", delay_seconds),
        ));
    }

    let samples = (delay_seconds * rate as f64).round();
    if samples > usize::MAX as f64 {
        return Err(AudioError::degenerate(
            "echo",
            format!("delay of {} seconds is too long", delay_seconds),
        ));
    }
    Ok(samples as usize)
}

/// Adds `num_echoes` decaying, delayed copies of a signal to itself.
///
/// # Arguments
/// * `signal` - Input signal
/// * `num_echoes` - Number of echo taps (0 = no echo)
/// * `delay_seconds` - Time between successive taps
/// * `decay` - Attenuation applied once per tap, usually below 1
///
/// # Returns
/// A signal of length `signal.len() + num_echoes * delay` samples at the input rate
pub fn echo(
    signal: &MonoSignal,
    num_echoes: usize,
    delay_seconds: f64,
    decay: f64,
) -> AudioResult<MonoSignal> {
    if !decay.is_finite() {
        return Err(AudioError::invalid_param(
            "decay",
            format!("must be finite, got {}", decay),
        ));
    }
    let sample_delay = delay_in_samples(delay_seconds, signal.rate())?;
    let input = signal.samples();
    let total = num_echoes
        .checked_mul(sample_delay)
        .and_then(|tail| input.len().checked_add(tail))
        .ok_or_else(|| AudioError::degenerate("echo", "echo tail length overflows"))?;

    let mut output = Vec::with_capacity(total);
    output.extend_from_slice(input);
    output.resize(total, 0.0);

    // Each pass rescales the previous tap, matching a chain of delay stages.
    let mut tap = input.to_vec();
    for k in 1..=num_echoes {
        for value in tap.iter_mut() {
            *value *= decay;
        }
        let offset = k * sample_delay;
        for (out, &value) in output[offset..offset + tap.len()].iter_mut().zip(&tap) {
            *out += value;
        }
    }

    Ok(signal.with_samples(output))
}
