//! Tone synthesizer tests

use std::time::Duration;

use morse_room::audio::{sample_count, silence, tone};
use morse_room::PuzzleConfig;

const UNIT: Duration = Duration::from_millis(100);

#[test]
fn test_tone_sample_count() {
    let config = PuzzleConfig::default();

    // round(44100 * 0.1) = 4410
    assert_eq!(tone(&config, UNIT).len(), 4410);
    assert_eq!(tone(&config, UNIT * 3).len(), 13_230);
    assert_eq!(tone(&config, Duration::ZERO).len(), 0);
}

#[test]
fn test_tone_amplitude_bounded() {
    let config = PuzzleConfig::default();
    let samples = tone(&config, UNIT);

    assert!(!samples.is_empty());
    for sample in &samples {
        assert!(sample.abs() <= config.amplitude);
    }

    // Sine starts at phase zero.
    assert_eq!(samples[0], 0.0);

    // And actually swings: some sample must come close to the peak.
    let peak = samples.iter().fold(0.0f32, |max, s| max.max(s.abs()));
    assert!(peak > config.amplitude * 0.9);
}

#[test]
fn test_silence_is_zero_filled() {
    let config = PuzzleConfig::default();
    let samples = silence(&config, UNIT * 7);

    assert_eq!(samples.len(), 30_870);
    assert!(samples.iter().all(|s| *s == 0.0));
}

#[test]
fn test_tone_and_silence_counts_match() {
    let config = PuzzleConfig::default();

    for millis in [1, 37, 100, 300, 700] {
        let d = Duration::from_millis(millis);
        assert_eq!(tone(&config, d).len(), silence(&config, d).len());
        assert_eq!(tone(&config, d).len(), sample_count(config.sample_rate, d));
    }
}

#[test]
fn test_tone_is_deterministic() {
    let config = PuzzleConfig::default();

    assert_eq!(tone(&config, UNIT), tone(&config, UNIT));
}
