//! Puzzle configuration.
//!
//! All timing derives from a single base unit (standard Morse ratios):
//! dot = 1 unit tone, dash = 3 units tone, symbol gap = 1 unit silence,
//! letter gap = 3 units silence, word gap = 7 units silence.

use std::time::Duration;

/// Puzzle configuration.
///
/// One value owns every tunable constant so that tests can shrink the
/// pauses to zero without touching the state machines.
#[derive(Clone, Copy, Debug)]
pub struct PuzzleConfig {
    /// Base Morse timing unit.
    pub unit: Duration,

    /// Tone frequency in Hz.
    pub freq_hz: f32,

    /// Output sample rate in Hz.
    pub sample_rate: u32,

    /// Peak amplitude as a fraction of full scale.
    pub amplitude: f32,

    /// Foreground block applied per interrupt attempt.
    pub penalty: Duration,

    /// Pause after the phrase has been entered.
    pub load_pause: Duration,

    /// Pause before a replay of the phrase.
    pub replay_pause: Duration,

    /// Pause after an incorrect guess.
    pub retry_pause: Duration,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            unit: Duration::from_millis(100),
            freq_hz: 600.0,
            sample_rate: 44_100,
            amplitude: 0.5,
            penalty: Duration::from_secs(5),
            load_pause: Duration::from_secs(1),
            replay_pause: Duration::from_secs(1),
            retry_pause: Duration::from_secs(2),
        }
    }
}

impl PuzzleConfig {
    /// Dot tone duration (1 unit).
    #[inline]
    pub fn dot_duration(&self) -> Duration {
        self.unit
    }

    /// Dash tone duration (3 units).
    #[inline]
    pub fn dash_duration(&self) -> Duration {
        self.unit * 3
    }

    /// Gap between symbols of one letter (1 unit).
    #[inline]
    pub fn symbol_gap(&self) -> Duration {
        self.unit
    }

    /// Gap between letters (3 units).
    #[inline]
    pub fn letter_gap(&self) -> Duration {
        self.unit * 3
    }

    /// Trailing gap marking end of word (7 units).
    #[inline]
    pub fn word_gap(&self) -> Duration {
        self.unit * 7
    }
}
