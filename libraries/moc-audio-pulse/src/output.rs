//! PulseAudio output driver

use crate::error::PulseError;
use crate::format::{format_to_pulse, supported_formats_mask};
use crate::stream::{StreamConnector, StreamManager, StreamSpec};
use moc_core::{OutputCaps, OutputDriver, SoundParams};
use tracing::{debug, warn};

#[cfg(feature = "pulseaudio")]
use crate::{config::PulseConfig, simple::SimpleConnector};

/// Fewest channels a stream may have
pub const MIN_CHANNELS: u8 = 1;

/// Most channels a stream may have (`PA_CHANNELS_MAX`)
pub const MAX_CHANNELS: u8 = 32;

/// Name reported for the (only) mixer channel
pub const MIXER_CHANNEL_NAME: &str = "PulseAudio";

/// Volume is handled by the sound server, so the mixer always reads full
const FULL_VOLUME: i32 = 100;

/// PulseAudio output
///
/// Implements the `OutputDriver` trait on top of a blocking simple-API
/// stream. Each `PulseOutput` owns its own stream, so several can coexist.
///
/// The stream is opened by `open` and reopened lazily by `play` after a
/// `close` or `reset`. When it cannot be (re)opened, `play` still reports the
/// whole buffer as consumed so the caller never stalls; such bytes are counted
/// in `dropped_bytes`.
pub struct PulseOutput {
    stream: StreamManager,
    dropped_bytes: u64,
}

impl PulseOutput {
    /// Create an output that talks to the default PulseAudio server
    #[cfg(feature = "pulseaudio")]
    pub fn new() -> Self {
        Self::with_connector(SimpleConnector::default())
    }

    /// Create an output with the given connection settings
    ///
    /// # Errors
    /// Returns an error if the settings are invalid
    #[cfg(feature = "pulseaudio")]
    pub fn with_config(config: PulseConfig) -> crate::Result<Self> {
        config.validate()?;
        Ok(Self::with_connector(SimpleConnector::new(config)))
    }

    /// Create an output that opens streams through `connector`
    pub fn with_connector(connector: impl StreamConnector + 'static) -> Self {
        Self {
            stream: StreamManager::new(Box::new(connector)),
            dropped_bytes: 0,
        }
    }

    /// Whether a stream is currently open
    pub fn is_open(&self) -> bool {
        self.stream.is_open()
    }

    /// Bytes `play` reported as consumed without handing them to the server
    pub fn dropped_bytes(&self) -> u64 {
        self.dropped_bytes
    }

    fn drop_buffer(&mut self, len: usize) {
        self.dropped_bytes += len as u64;
    }
}

#[cfg(feature = "pulseaudio")]
impl Default for PulseOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputDriver for PulseOutput {
    fn init(&mut self) -> moc_core::Result<OutputCaps> {
        Ok(OutputCaps {
            min_channels: u16::from(MIN_CHANNELS),
            max_channels: u16::from(MAX_CHANNELS),
            formats: supported_formats_mask(),
        })
    }

    fn shutdown(&mut self) {
        self.stream.drain_and_close();
    }

    fn open(&mut self, params: &SoundParams) -> moc_core::Result<()> {
        let format = format_to_pulse(params.format);
        if format.is_invalid() {
            warn!("Invalid format: {}", params.format);
            self.stream.invalidate();
            return Err(PulseError::UnsupportedFormat(params.format).into());
        }

        let Some(channels) = u8::try_from(params.channels)
            .ok()
            .filter(|c| (MIN_CHANNELS..=MAX_CHANNELS).contains(c))
        else {
            warn!("Invalid channel count: {}", params.channels);
            self.stream.invalidate();
            return Err(PulseError::InvalidChannels(params.channels).into());
        };

        self.stream.set_spec(StreamSpec {
            format,
            channels,
            rate: params.rate,
        });

        self.stream.try_open()?;
        Ok(())
    }

    fn close(&mut self) {
        self.stream.close();
    }

    fn play(&mut self, buf: &[u8]) -> moc_core::Result<usize> {
        if !self.stream.ensure_open() {
            debug!("No PulseAudio stream, dropping {} bytes", buf.len());
            self.drop_buffer(buf.len());
            return Ok(buf.len());
        }

        if let Err(e) = self.stream.write(buf) {
            warn!("{}, dropping {} bytes", e, buf.len());
            self.stream.close();
            self.drop_buffer(buf.len());
        }

        Ok(buf.len())
    }

    fn read_mixer(&self) -> i32 {
        FULL_VOLUME
    }

    fn set_mixer(&mut self, _volume: i32) {}

    fn buffer_fill(&self) -> usize {
        // The simple API does not expose how much is queued
        0
    }

    fn reset(&mut self) -> moc_core::Result<()> {
        self.stream.drain_and_close();
        Ok(())
    }

    fn rate(&self) -> u32 {
        self.stream.spec().map_or(0, |spec| spec.rate)
    }

    fn toggle_mixer_channel(&mut self) {}

    fn mixer_channel_name(&self) -> &str {
        MIXER_CHANNEL_NAME
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use crate::stream::PlaybackStream;
    use moc_core::{MocError, SampleFormat};
    use std::cell::Cell;
    use std::rc::Rc;

    /// Connector whose streams fail every write
    struct BrokenPipe {
        connects: Rc<Cell<usize>>,
    }

    struct BrokenStream;

    impl StreamConnector for BrokenPipe {
        fn connect(&self, _spec: &StreamSpec) -> Result<Box<dyn PlaybackStream>> {
            self.connects.set(self.connects.get() + 1);
            Ok(Box::new(BrokenStream))
        }
    }

    impl PlaybackStream for BrokenStream {
        fn write(&mut self, _data: &[u8]) -> Result<()> {
            Err(PulseError::WriteFailed("Connection terminated".into()))
        }

        fn drain(&mut self) -> Result<()> {
            Err(PulseError::DrainFailed("Connection terminated".into()))
        }
    }

    fn broken_output() -> (PulseOutput, Rc<Cell<usize>>) {
        let connects = Rc::new(Cell::new(0));
        let output = PulseOutput::with_connector(BrokenPipe {
            connects: Rc::clone(&connects),
        });
        (output, connects)
    }

    #[test]
    fn init_advertises_table() {
        let (mut output, _) = broken_output();
        let caps = output.init().unwrap();

        assert_eq!(caps.min_channels, 1);
        assert_eq!(caps.max_channels, 32);
        assert_eq!(caps.formats, supported_formats_mask());
    }

    #[test]
    fn rejects_channel_counts_pulse_cannot_carry() {
        let (mut output, connects) = broken_output();

        for channels in [0, 33, 300] {
            let params = SoundParams::new(channels, 44_100, SampleFormat::S16 | SampleFormat::NE);
            let err = output.open(&params).unwrap_err();
            assert!(matches!(err, MocError::InvalidInput(_)));
        }
        assert_eq!(connects.get(), 0);
        assert_eq!(output.rate(), 0);
    }

    #[test]
    fn write_failure_drops_stream_and_reports_full_size() {
        let (mut output, connects) = broken_output();
        output.open(&SoundParams::cd_quality()).unwrap();

        assert_eq!(output.play(&[0; 64]).unwrap(), 64);
        assert!(!output.is_open());
        assert_eq!(output.dropped_bytes(), 64);

        // Next play reconnects once
        assert_eq!(output.play(&[0; 32]).unwrap(), 32);
        assert_eq!(connects.get(), 2);
        assert_eq!(output.dropped_bytes(), 96);
    }

    #[test]
    fn drain_failure_still_closes() {
        let (mut output, _) = broken_output();
        output.open(&SoundParams::cd_quality()).unwrap();

        assert!(output.reset().is_ok());
        assert!(!output.is_open());
        assert_eq!(output.rate(), 44_100);
    }
}
