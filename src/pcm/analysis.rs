//! Diagnostic helpers over float PCM buffers.
//!
//! All functions here are total: they never panic and never fail.

use serde::Serialize;

/// RMS below this is treated as silence
pub const DEFAULT_SILENCE_THRESHOLD: f32 = 0.01;

/// Check that a buffer is usable audio: non-empty, every sample finite and
/// within [-1.0, 1.0].
///
/// A missing buffer is expressed by the caller as `Option`, e.g.
/// `maybe_samples.is_some_and(validate)`.
pub fn validate(samples: &[f32]) -> bool {
    !samples.is_empty() && samples.iter().all(|s| (-1.0..=1.0).contains(s))
}

/// Root-mean-square loudness. Exactly 0.0 for an empty buffer.
pub fn rms(samples: &[f32]) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }

    // Accumulate in f64 so long recordings don't drift
    let sum_squares: f64 = samples.iter().map(|&s| (s as f64) * (s as f64)).sum();
    (sum_squares / samples.len() as f64).sqrt() as f32
}

/// Silence check with the default threshold (0.01).
pub fn is_silence(samples: &[f32]) -> bool {
    is_silence_below(samples, DEFAULT_SILENCE_THRESHOLD)
}

/// True iff RMS is strictly less than `threshold`.
///
/// Each call is independent; smoothing across buffers is up to the caller.
pub fn is_silence_below(samples: &[f32], threshold: f32) -> bool {
    rms(samples) < threshold
}

/// Largest absolute sample value, 0.0 for an empty buffer.
pub fn peak(samples: &[f32]) -> f32 {
    samples.iter().fold(0.0f32, |acc, &s| acc.max(s.abs()))
}

/// Normalized cross-correlation `sum(a*b) / sqrt(sum(a^2) * sum(b^2))`.
///
/// Returns `None` if the lengths differ, the buffers are empty, or either
/// buffer carries no energy.
pub fn correlation(a: &[f32], b: &[f32]) -> Option<f64> {
    if a.len() != b.len() || a.is_empty() {
        return None;
    }

    let mut sum_products = 0.0f64;
    let mut sum_a_sq = 0.0f64;
    let mut sum_b_sq = 0.0f64;

    for (&x, &y) in a.iter().zip(b.iter()) {
        let (x, y) = (x as f64, y as f64);
        sum_products += x * y;
        sum_a_sq += x * x;
        sum_b_sq += y * y;
    }

    let denom = (sum_a_sq * sum_b_sq).sqrt();
    if denom == 0.0 || !denom.is_finite() {
        return None;
    }

    Some(sum_products / denom)
}

/// One-shot summary of a buffer, used by the `stats` command
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignalStats {
    pub samples: usize,
    pub rms: f32,
    pub peak: f32,
    pub silent: bool,
    pub valid: bool,
}

impl SignalStats {
    pub fn analyze(samples: &[f32], silence_threshold: f32) -> Self {
        let rms = rms(samples);
        Self {
            samples: samples.len(),
            rms,
            peak: peak(samples),
            silent: rms < silence_threshold,
            valid: validate(samples),
        }
    }
}
