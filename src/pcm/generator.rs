/// Synthetic signal generators
///
/// Deterministic buffers for seeding tests and diagnostics. Not used on the
/// recording or playback paths.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::PI;

/// Sine wave of unit amplitude.
///
/// Produces `floor(sample_rate * duration_secs)` samples where sample `i` is
/// `sin(2π · frequency · i / sample_rate)`.
pub fn sine_wave(frequency: f64, sample_rate: u32, duration_secs: f64) -> Vec<f32> {
    if sample_rate == 0 || !duration_secs.is_finite() || duration_secs <= 0.0 {
        return Vec::new();
    }

    let num_samples = (sample_rate as f64 * duration_secs).floor() as usize;
    let rate = sample_rate as f64;

    (0..num_samples)
        .map(|i| {
            let t = i as f64 / rate;
            (2.0 * PI * frequency * t).sin() as f32
        })
        .collect()
}

/// Uniform white noise in `[-amplitude, amplitude]`, reproducible per seed.
///
/// `amplitude` is taken by magnitude and capped at 1.0. Non-finite
/// amplitudes yield silence.
pub fn white_noise(amplitude: f32, len: usize, seed: u64) -> Vec<f32> {
    if !amplitude.is_finite() {
        return vec![0.0; len];
    }
    // Audio amplitudes live in [0, 1]; wider ranges overflow the sampler
    let amplitude = amplitude.abs().min(1.0);
    if amplitude == 0.0 {
        return vec![0.0; len];
    }

    let mut rng = StdRng::seed_from_u64(seed);
    (0..len)
        .map(|_| rng.gen_range(-amplitude..=amplitude))
        .collect()
}

/// Constant (DC) buffer.
pub fn constant(level: f32, len: usize) -> Vec<f32> {
    vec![level; len]
}
