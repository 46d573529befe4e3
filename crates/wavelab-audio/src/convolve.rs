//! Direct-form discrete linear convolution.
//!
//! Output index `n` is `sum_k samples[n - k] * kernel[k]` over the terms where
//! both indices are in range. Terms are accumulated in ascending kernel order,
//! so results are reproducible bit for bit. Cost is
//! `O(samples.len() * kernel.len())`.

use crate::signal::MonoSignal;

/// Length of the full convolution of sequences of length `a` and `b`.
pub fn convolved_len(a: usize, b: usize) -> usize {
    (a + b).saturating_sub(1)
}

/// Convolves two sample sequences.
///
/// Each kernel tap adds a scaled copy of `samples`, shifted right by the tap
/// index, into the output. Only the overlapping index range is visited.
pub fn convolve_samples(samples: &[f64], kernel: &[f64]) -> Vec<f64> {
    let mut output = vec![0.0; convolved_len(samples.len(), kernel.len())];

    for (k, &coefficient) in kernel.iter().enumerate() {
        let shifted = &mut output[k..k + samples.len()];
        for (out, &sample) in shifted.iter_mut().zip(samples) {
            *out += sample * coefficient;
        }
    }

    output
}

/// Filters a signal through a finite impulse response.
///
/// # Arguments
/// * `signal` - Input signal
/// * `kernel` - Impulse response; may contain zero or negative taps and is not normalized
///
/// # Returns
/// A signal of length `signal.len() + kernel.len() - 1` at the input rate
pub fn convolve(signal: &MonoSignal, kernel: &[f64]) -> MonoSignal {
    signal.with_samples(convolve_samples(signal.samples(), kernel))
}
