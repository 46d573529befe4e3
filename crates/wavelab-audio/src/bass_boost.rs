//! Bass-boost kernel construction.
//!
//! The base kernel `[0.25, 0.5, 0.25]` is a low-pass filter with frequency
//! response `1/2 + 1/2 cos(w)`. Convolving it with itself `n` times raises
//! that response to the `n + 1`-th power. The low-pass part is then scaled
//! and a unit impulse is added at the center so the dry signal passes through
//! with a delay of `n + 1` samples.

use crate::convolve::{convolve, convolve_samples};
use crate::signal::MonoSignal;

/// Three-tap smoothing kernel the bass-boost filter is built from.
pub const SMOOTHING_KERNEL: [f64; 3] = [0.25, 0.5, 0.25];

/// Length of the kernel built with `n` self-convolutions.
pub fn kernel_len(n: usize) -> usize {
    2 * n + SMOOTHING_KERNEL.len()
}

/// Builds the low-pass part of the kernel: the smoothing kernel convolved
/// with itself `n` times.
pub fn low_pass_kernel(n: usize) -> Vec<f64> {
    let mut kernel = SMOOTHING_KERNEL.to_vec();
    for _ in 0..n {
        kernel = convolve_samples(&kernel, &SMOOTHING_KERNEL);
    }
    kernel
}

/// Builds a bass-boost kernel.
///
/// # Arguments
/// * `n` - Number of self-convolutions; larger values narrow the boosted band
/// * `scale` - Gain applied to the low-pass part before the dry impulse is added
///
/// # Returns
/// A kernel of length `2n + 3`
pub fn bass_boost_kernel(n: usize, scale: f64) -> Vec<f64> {
    let mut kernel: Vec<f64> = low_pass_kernel(n).into_iter().map(|c| c * scale).collect();
    let center = kernel.len() / 2;
    kernel[center] += 1.0;
    kernel
}

/// Applies the bass-boost filter to a signal.
///
/// The output is `2n + 2` samples longer than the input.
pub fn bass_boost(signal: &MonoSignal, n: usize, scale: f64) -> MonoSignal {
    convolve(signal, &bass_boost_kernel(n, scale))
}
