//! Stream parameters and driver capabilities

use super::SampleFormat;
use serde::{Deserialize, Serialize};

/// Parameters of a raw PCM stream handed to an output driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoundParams {
    /// Number of interleaved channels (1 = mono, 2 = stereo, etc.)
    pub channels: u16,

    /// Sample rate in Hz
    pub rate: u32,

    /// Sample encoding
    pub format: SampleFormat,
}

impl SoundParams {
    /// Create new stream parameters
    pub fn new(channels: u16, rate: u32, format: SampleFormat) -> Self {
        Self {
            channels,
            rate,
            format,
        }
    }

    /// CD quality in host byte order (44.1kHz, 16-bit, stereo)
    pub fn cd_quality() -> Self {
        Self::new(2, 44_100, SampleFormat::S16 | SampleFormat::NE)
    }

    /// Size of one frame (one sample for every channel) in bytes
    pub fn bytes_per_frame(&self) -> Option<usize> {
        self.format
            .bytes_per_sample()
            .and_then(|bytes| bytes.checked_mul(usize::from(self.channels)))
    }

    /// Calculate the byte rate (bytes per second), `None` if it overflows `usize`
    pub fn bytes_per_second(&self) -> Option<usize> {
        let rate = usize::try_from(self.rate).ok()?;
        self.bytes_per_frame()
            .and_then(|bytes| bytes.checked_mul(rate))
    }
}

/// What an output driver can accept, reported from `OutputDriver::init`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputCaps {
    /// Smallest channel count the driver accepts
    pub min_channels: u16,

    /// Largest channel count the driver accepts
    pub max_channels: u16,

    /// OR of every sample format tag the driver accepts
    pub formats: SampleFormat,
}

impl OutputCaps {
    /// Whether `format` is one of the advertised encodings
    pub fn supports_format(&self, format: SampleFormat) -> bool {
        format.is_valid() && self.formats.contains(format)
    }

    /// Whether `channels` lies within the advertised range
    pub fn supports_channels(&self, channels: u16) -> bool {
        (self.min_channels..=self.max_channels).contains(&channels)
    }

    /// Whether the driver can play a stream with these parameters
    pub fn supports(&self, params: &SoundParams) -> bool {
        self.supports_format(params.format) && self.supports_channels(params.channels)
    }
}
