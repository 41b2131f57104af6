//! Stream lifecycle: at most one live connection to the sound server
//!
//! The manager owns the sample specification of the stream and the stream
//! itself. The stream is created on demand from the stored specification and
//! torn down by `close` or `drain_and_close`; it is never half-open.

use crate::error::{PulseError, Result};
use crate::format::PulseSampleFormat;
use tracing::{debug, info, warn};

/// Sample specification of a PulseAudio stream (`pa_sample_spec`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamSpec {
    /// Sample format, `PulseSampleFormat::Invalid` after a rejected open
    pub format: PulseSampleFormat,
    /// Number of channels
    pub channels: u8,
    /// Sample rate in Hz
    pub rate: u32,
}

/// An open playback connection to the sound server
pub trait PlaybackStream {
    /// Write audio, blocking until the server has accepted all of it
    fn write(&mut self, data: &[u8]) -> Result<()>;

    /// Block until everything written so far has been played
    fn drain(&mut self) -> Result<()>;
}

/// Creates playback connections
pub trait StreamConnector {
    /// Open a playback stream for the given specification
    fn connect(&self, spec: &StreamSpec) -> Result<Box<dyn PlaybackStream>>;
}

/// Owns the stream handle and the specification it is (re)created from
pub struct StreamManager {
    connector: Box<dyn StreamConnector>,
    spec: Option<StreamSpec>,
    stream: Option<Box<dyn PlaybackStream>>,
}

impl StreamManager {
    /// Create a closed manager with no specification
    pub fn new(connector: Box<dyn StreamConnector>) -> Self {
        Self {
            connector,
            spec: None,
            stream: None,
        }
    }

    /// Whether a stream is currently open
    pub fn is_open(&self) -> bool {
        self.stream.is_some()
    }

    /// Specification used for the next connection
    pub fn spec(&self) -> Option<&StreamSpec> {
        self.spec.as_ref()
    }

    /// Store the specification for the next connection
    ///
    /// An open stream with a different specification is closed without
    /// draining; the next `ensure_open` reconnects with the new one.
    pub fn set_spec(&mut self, spec: StreamSpec) {
        if self.is_open() && self.spec.as_ref() != Some(&spec) {
            debug!("Stream specification changed, closing current stream");
            self.close();
        }
        self.spec = Some(spec);
    }

    /// Mark the stored specification as unusable after a rejected open
    ///
    /// Closes the stream without draining. The rate is kept for `spec()`
    /// readers, but nothing connects again until a valid `set_spec`.
    pub fn invalidate(&mut self) {
        self.close();
        if let Some(spec) = self.spec.as_mut() {
            spec.format = PulseSampleFormat::Invalid;
        }
    }

    /// Open the stream unless it already is
    pub fn try_open(&mut self) -> Result<()> {
        if self.stream.is_some() {
            return Ok(());
        }

        let spec = self
            .spec
            .ok_or_else(|| PulseError::ConnectionFailed("no stream parameters set".to_string()))?;

        if spec.format.is_invalid() {
            return Err(PulseError::ConnectionFailed(
                "stream parameters were rejected".to_string(),
            ));
        }

        match self.connector.connect(&spec) {
            Ok(stream) => {
                info!(
                    "Opened PulseAudio stream: {} {}ch {}Hz",
                    spec.format, spec.channels, spec.rate
                );
                self.stream = Some(stream);
                Ok(())
            }
            Err(e) => {
                warn!("Failed to open PulseAudio stream: {}", e);
                Err(e)
            }
        }
    }

    /// Open the stream unless it already is, reporting only success
    pub fn ensure_open(&mut self) -> bool {
        self.try_open().is_ok()
    }

    /// Write to the open stream
    pub fn write(&mut self, data: &[u8]) -> Result<()> {
        self.stream
            .as_mut()
            .ok_or(PulseError::NotOpen)?
            .write(data)
    }

    /// Release the stream if there is one
    pub fn close(&mut self) {
        if self.stream.take().is_some() {
            debug!("Closed PulseAudio stream");
        }
    }

    /// Wait for queued audio to play out, then close
    pub fn drain_and_close(&mut self) {
        if let Some(stream) = self.stream.as_mut() {
            if let Err(e) = stream.drain() {
                warn!("{}", e);
            }
        }
        self.close();
    }
}
