//! Element-wise transforms: reversal, cross-fade mix, stereo pan and vocal
//! cancellation.

use crate::error::{AudioError, AudioResult};
use crate::signal::{MonoSignal, StereoSignal};

/// Returns the signal played backwards.
pub fn reverse(signal: &MonoSignal) -> MonoSignal {
    let samples = signal.samples().iter().rev().copied().collect();
    signal.with_samples(samples)
}

fn check_same_rate(a: u32, b: u32) -> AudioResult<()> {
    if a != b {
        return Err(AudioError::RateMismatch { left: a, right: b });
    }
    Ok(())
}

fn mix_samples(a: &[f64], b: &[f64], p: f64) -> Vec<f64> {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| x * p + y * (1.0 - p))
        .collect()
}

/// Cross-fades two signals.
///
/// # Arguments
/// * `a` - First signal, weighted by `p`
/// * `b` - Second signal, weighted by `1 - p`
/// * `p` - Mixing proportion, nominally in [0, 1] (not enforced)
///
/// # Returns
/// A signal as long as the shorter input, or `RateMismatch` if the rates differ
pub fn mix(a: &MonoSignal, b: &MonoSignal, p: f64) -> AudioResult<MonoSignal> {
    check_same_rate(a.rate(), b.rate())?;
    Ok(a.with_samples(mix_samples(a.samples(), b.samples(), p)))
}

/// Cross-fades two stereo signals channel by channel.
pub fn mix_stereo(a: &StereoSignal, b: &StereoSignal, p: f64) -> AudioResult<StereoSignal> {
    check_same_rate(a.rate(), b.rate())?;
    Ok(a.with_channels(
        mix_samples(a.left(), b.left(), p),
        mix_samples(a.right(), b.right(), p),
    ))
}

/// Sweeps the sound from the left speaker to the right over its duration.
///
/// At sample `i` of `n`, the right channel is scaled by `i / (n - 1)` and the
/// left by `1 - i / (n - 1)`. Signals of zero or one sample have no sweep to
/// perform and are returned unchanged.
pub fn pan(signal: &StereoSignal) -> StereoSignal {
    let n = signal.len();
    if n < 2 {
        return signal.clone();
    }

    let last = (n - 1) as f64;
    let mut left = Vec::with_capacity(n);
    let mut right = Vec::with_capacity(n);
    for (i, (l, r)) in signal.left().iter().zip(signal.right()).enumerate() {
        let position = i as f64 / last;
        left.push(l * (1.0 - position));
        right.push(r * position);
    }
    signal.with_channels(left, right)
}

/// Subtracts the right channel from the left.
///
/// Center-panned material (usually the lead vocal) is identical in both
/// channels and cancels out.
pub fn remove_vocals(signal: &StereoSignal) -> MonoSignal {
    let samples = signal
        .left()
        .iter()
        .zip(signal.right())
        .map(|(l, r)| l - r)
        .collect();
    MonoSignal::with_rate(signal.rate(), samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn mono(rate: u32, samples: &[f64]) -> MonoSignal {
        MonoSignal::new(rate, samples.to_vec()).unwrap()
    }

    fn stereo(rate: u32, left: &[f64], right: &[f64]) -> StereoSignal {
        StereoSignal::new(rate, left.to_vec(), right.to_vec()).unwrap()
    }

    #[test]
    fn test_reverse() {
        let s = mono(8, &[1.0, 2.0, 3.0, 4.0]);
        let r = reverse(&s);
        assert_eq!(r.samples(), &[4.0, 3.0, 2.0, 1.0]);
        assert_eq!(r.rate(), 8);
        // Input untouched.
        assert_eq!(s.samples(), &[1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_reverse_empty() {
        let s = mono(8, &[]);
        assert!(reverse(&s).is_empty());
    }

    #[test]
    fn test_mix_weights_and_truncates() {
        let a = mono(10, &[1.0, 1.0, 1.0, 1.0]);
        let b = mono(10, &[0.0, 2.0]);
        let m = mix(&a, &b, 0.25).unwrap();
        assert_eq!(m.samples(), &[0.25, 1.75]);
        assert_eq!(m.rate(), 10);
    }

    #[test]
    fn test_mix_rate_mismatch() {
        let a = mono(10, &[1.0]);
        let b = mono(20, &[1.0]);
        let err = mix(&a, &b, 0.5).unwrap_err();
        assert!(matches!(
            err,
            AudioError::RateMismatch {
                left: 10,
                right: 20
            }
        ));
    }

    #[test]
    fn test_mix_stereo_channelwise() {
        let a = stereo(10, &[1.0, 1.0], &[0.0, 0.0]);
        let b = stereo(10, &[0.0, 0.0, 0.0], &[1.0, 1.0, 1.0]);
        let m = mix_stereo(&a, &b, 0.5).unwrap();
        assert_eq!(m.left(), &[0.5, 0.5]);
        assert_eq!(m.right(), &[0.5, 0.5]);
    }

    #[test]
    fn test_mix_stereo_rate_mismatch() {
        let a = stereo(10, &[1.0], &[1.0]);
        let b = stereo(11, &[1.0], &[1.0]);
        assert!(mix_stereo(&a, &b, 0.5).is_err());
    }

    #[test]
    fn test_pan_endpoints() {
        let s = stereo(10, &[1.0; 5], &[1.0; 5]);
        let p = pan(&s);
        assert_eq!(p.left(), &[1.0, 0.75, 0.5, 0.25, 0.0]);
        assert_eq!(p.right(), &[0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn test_pan_single_sample_is_unchanged() {
        let s = stereo(10, &[0.3], &[0.7]);
        let p = pan(&s);
        assert_eq!(p, s);
        assert!(p.left()[0].is_finite());
    }

    #[test]
    fn test_pan_empty() {
        let s = stereo(10, &[], &[]);
        assert!(pan(&s).is_empty());
    }

    #[test]
    fn test_remove_vocals() {
        let s = stereo(10, &[0.5, 0.2, -0.1], &[0.5, 0.1, 0.4]);
        let v = remove_vocals(&s);
        assert_eq!(v.rate(), 10);
        assert_eq!(v.samples()[0], 0.0);
        assert!((v.samples()[1] - 0.1).abs() < 1e-12);
        assert!((v.samples()[2] + 0.5).abs() < 1e-12);
    }
}
