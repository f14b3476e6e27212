//! Audio subsystem: tone synthesis and the output sink.

pub mod sink;
pub mod synth;

pub use sink::AudioSink;
pub use synth::{sample_count, silence, tone};
