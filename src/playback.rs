//! Playback engine.
//!
//! Splits playback into a pure scheduling pass (pattern → timed
//! segments, fully testable on host) and a rendering pass that
//! synthesizes each segment and feeds it to the audio sink.

use std::time::Duration;

use anyhow::Result;

use crate::audio::{silence, tone, AudioSink};
use crate::config::PuzzleConfig;
use crate::morse;

/// One timed playback step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Segment {
    /// Sine tone for the given duration.
    Tone(Duration),
    /// Silence for the given duration.
    Silence(Duration),
}

/// Turn a Morse pattern string into an ordered segment list.
///
/// Standard ratios: dot = 1 unit tone, dash = 3 units tone, each
/// followed by a 1 unit symbol gap; a pattern space is a 3 unit letter
/// gap. One trailing 7 unit word gap closes the sequence.
pub fn schedule(pattern: &str, config: &PuzzleConfig) -> Vec<Segment> {
    let mut segments = Vec::new();

    for symbol in pattern.chars() {
        match symbol {
            '.' => {
                segments.push(Segment::Tone(config.dot_duration()));
                segments.push(Segment::Silence(config.symbol_gap()));
            }
            '-' => {
                segments.push(Segment::Tone(config.dash_duration()));
                segments.push(Segment::Silence(config.symbol_gap()));
            }
            ' ' => segments.push(Segment::Silence(config.letter_gap())),
            _ => {}
        }
    }

    segments.push(Segment::Silence(config.word_gap()));
    segments
}

/// Renders a phrase audibly. The session drives playback through this
/// seam so tests can substitute a silent recorder.
pub trait Player {
    fn play(&mut self, phrase: &str) -> Result<()>;
}

/// Real player: encodes the phrase and renders it on the default
/// audio output device.
pub struct MorsePlayer {
    config: PuzzleConfig,
}

impl MorsePlayer {
    pub fn new(config: PuzzleConfig) -> Self {
        Self { config }
    }
}

impl Player for MorsePlayer {
    /// Play the phrase as Morse audio, blocking until it is done.
    ///
    /// The sink is opened just before the first sample and released when
    /// this call returns, on success or error.
    fn play(&mut self, phrase: &str) -> Result<()> {
        let pattern = morse::encode(phrase);
        let segments = schedule(&pattern, &self.config);

        tracing::info!(segments = segments.len(), "playing phrase");

        let sink = AudioSink::open(self.config.sample_rate)?;
        for segment in &segments {
            match *segment {
                Segment::Tone(d) => sink.write(tone(&self.config, d)),
                Segment::Silence(d) => sink.write(silence(&self.config, d)),
            }
        }
        sink.drain();

        Ok(())
    }
}
