//! Tone and silence buffer synthesis.
//!
//! Pure functions of (duration, frequency, sample rate). Output is mono
//! f32 at the configured sample rate, peak amplitude scaled to the
//! configured fraction of full scale.

use std::f32::consts::TAU;
use std::time::Duration;

use crate::config::PuzzleConfig;

/// Number of samples for a duration at a sample rate, rounded.
#[inline]
pub fn sample_count(sample_rate: u32, duration: Duration) -> usize {
    (sample_rate as f64 * duration.as_secs_f64()).round() as usize
}

/// Generate a sine tone buffer.
///
/// Exactly `round(sample_rate * duration)` samples, each in
/// [-amplitude, amplitude].
pub fn tone(config: &PuzzleConfig, duration: Duration) -> Vec<f32> {
    let count = sample_count(config.sample_rate, duration);
    let step = TAU * config.freq_hz / config.sample_rate as f32;

    (0..count)
        .map(|i| config.amplitude * (i as f32 * step).sin())
        .collect()
}

/// Generate a silence buffer of the same sample count as [`tone`].
pub fn silence(config: &PuzzleConfig, duration: Duration) -> Vec<f32> {
    vec![0.0; sample_count(config.sample_rate, duration)]
}
