//! PulseAudio backend errors

use moc_core::{MocError, SampleFormat};
use thiserror::Error;

/// Result type for PulseAudio backend operations
pub type Result<T> = std::result::Result<T, PulseError>;

/// PulseAudio backend errors
#[derive(Debug, Error)]
pub enum PulseError {
    /// No PulseAudio format matches the requested tag
    #[error("Invalid format: {0}")]
    UnsupportedFormat(SampleFormat),

    /// Channel count outside what a PulseAudio stream can carry
    #[error("Invalid channel count: {0}")]
    InvalidChannels(u16),

    /// The stream could not be created
    #[error("Failed to connect to PulseAudio: {0}")]
    ConnectionFailed(String),

    /// No stream is open
    #[error("No PulseAudio stream open")]
    NotOpen,

    /// Writing to the stream failed
    #[error("Failed to write to PulseAudio stream: {0}")]
    WriteFailed(String),

    /// Draining the stream failed
    #[error("Failed to drain PulseAudio stream: {0}")]
    DrainFailed(String),

    /// Backend configuration could not be loaded or is invalid
    #[error("Configuration error: {0}")]
    Config(String),
}

#[cfg(feature = "pulseaudio")]
impl From<libpulse_binding::error::PAErr> for PulseError {
    fn from(err: libpulse_binding::error::PAErr) -> Self {
        PulseError::ConnectionFailed(format!("{}", err))
    }
}

impl From<config::ConfigError> for PulseError {
    fn from(err: config::ConfigError) -> Self {
        PulseError::Config(err.to_string())
    }
}

impl From<PulseError> for MocError {
    fn from(err: PulseError) -> Self {
        match err {
            PulseError::UnsupportedFormat(_) => MocError::unsupported_format(err.to_string()),
            PulseError::InvalidChannels(_) => MocError::invalid_input(err.to_string()),
            PulseError::Config(_) => MocError::config(err.to_string()),
            _ => MocError::audio(err.to_string()),
        }
    }
}
