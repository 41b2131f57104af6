//! Connector backed by libpulse-simple (`pa_simple`)

use crate::config::PulseConfig;
use crate::error::{PulseError, Result};
use crate::stream::{PlaybackStream, StreamConnector, StreamSpec};
use libpulse_binding::sample::Spec;
use libpulse_binding::stream::Direction;
use libpulse_simple_binding::Simple;

/// Opens blocking playback streams through `pa_simple_new`
///
/// Uses the configured server and sink, or the defaults when unset, with the
/// default channel map and buffering attributes.
pub struct SimpleConnector {
    config: PulseConfig,
}

impl SimpleConnector {
    /// Create a connector using the given settings
    pub fn new(config: PulseConfig) -> Self {
        Self { config }
    }
}

impl Default for SimpleConnector {
    fn default() -> Self {
        Self::new(PulseConfig::default())
    }
}

impl StreamConnector for SimpleConnector {
    fn connect(&self, spec: &StreamSpec) -> Result<Box<dyn PlaybackStream>> {
        let sample_spec = Spec {
            format: spec.format.into(),
            channels: spec.channels,
            rate: spec.rate,
        };

        let simple = Simple::new(
            self.config.server.as_deref(),
            &self.config.client_name,
            Direction::Playback,
            self.config.device.as_deref(),
            &self.config.stream_name,
            &sample_spec,
            None,
            None,
        )?;

        Ok(Box::new(SimpleStream { simple }))
    }
}

struct SimpleStream {
    simple: Simple,
}

impl PlaybackStream for SimpleStream {
    fn write(&mut self, data: &[u8]) -> Result<()> {
        // pa_simple_write rejects empty buffers
        if data.is_empty() {
            return Ok(());
        }

        self.simple
            .write(data)
            .map_err(|e| PulseError::WriteFailed(format!("{}", e)))
    }

    fn drain(&mut self) -> Result<()> {
        self.simple
            .drain()
            .map_err(|e| PulseError::DrainFailed(format!("{}", e)))
    }
}
