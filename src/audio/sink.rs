//! Audio output sink.
//!
//! RAII wrapper around the default output device. Opened immediately
//! before the first sample of a playback and released when the value
//! drops, so the device is never leaked mid-sequence.

use anyhow::{Context, Result};
use rodio::buffer::SamplesBuffer;
use rodio::{OutputStream, Sink};

/// Open audio output, valid for one playback invocation.
///
/// Buffers are queued in write order; [`AudioSink::drain`] blocks until
/// everything queued has been heard.
pub struct AudioSink {
    // Keeps the device alive; dropping it tears the stream down.
    _stream: OutputStream,
    sink: Sink,
    sample_rate: u32,
}

impl AudioSink {
    /// Open the default output device, mono at the given sample rate.
    pub fn open(sample_rate: u32) -> Result<Self> {
        let (stream, handle) =
            OutputStream::try_default().context("unable to open default audio output device")?;
        let sink = Sink::try_new(&handle).context("failed to create audio sink")?;

        tracing::debug!(sample_rate, "audio sink opened");

        Ok(Self {
            _stream: stream,
            sink,
            sample_rate,
        })
    }

    /// Queue a buffer of mono samples.
    pub fn write(&self, samples: Vec<f32>) {
        self.sink
            .append(SamplesBuffer::new(1, self.sample_rate, samples));
    }

    /// Block until all queued audio has played, then release the device.
    pub fn drain(self) {
        self.sink.sleep_until_end();
        tracing::debug!("audio sink drained");
        // Device released on drop.
    }
}
