//! PulseAudio output backend for MOC
//!
//! This crate provides `PulseOutput`, an implementation of the
//! `OutputDriver` trait on top of PulseAudio's simple (synchronous)
//! playback API.
//!
//! # Features
//!
//! - Lazy stream creation on the first `play`, tolerating earlier closes
//! - Blocking writes: the server applies backpressure
//! - Graceful `reset`/`shutdown` that drain queued audio before closing
//! - Fixed mapping between MOC sample formats and PulseAudio formats
//! - Volume is left to the sound server (mixer calls are constant)
//!
//! The native connector is compiled with the `pulseaudio` feature, which
//! links `libpulse-simple`. Without it, any `StreamConnector` can be plugged
//! in through `PulseOutput::with_connector`.
//!
//! # Example
//!
//! ```no_run
//! # #[cfg(feature = "pulseaudio")]
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use moc_audio_pulse::{PulseConfig, PulseOutput};
//! use moc_core::{OutputDriver, SoundParams};
//!
//! let mut output = PulseOutput::with_config(PulseConfig::load(None)?)?;
//! let caps = output.init()?;
//!
//! let params = SoundParams::cd_quality();
//! assert!(caps.supports(&params));
//! output.open(&params)?;
//!
//! // One second of silence
//! let silence = vec![0u8; 44_100 * 4];
//! output.play(&silence)?;
//!
//! output.shutdown();
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "pulseaudio"))]
//! # fn main() {}
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
mod error;
pub mod format;
mod output;
#[cfg(feature = "pulseaudio")]
mod simple;
pub mod stream;

pub use config::PulseConfig;
pub use error::{PulseError, Result};
pub use format::{
    format_table, format_to_pulse, pulse_to_format, supported_formats_mask, PulseSampleFormat,
};
pub use output::{PulseOutput, MAX_CHANNELS, MIN_CHANNELS, MIXER_CHANNEL_NAME};
#[cfg(feature = "pulseaudio")]
pub use simple::SimpleConnector;
pub use stream::{PlaybackStream, StreamConnector, StreamManager, StreamSpec};
