//! Core error types for MOC output backends

use thiserror::Error;

/// Result type alias using `MocError`
pub type Result<T> = std::result::Result<T, MocError>;

/// Core error type shared by all output drivers
#[derive(Error, Debug)]
pub enum MocError {
    /// Audio output errors (connection, write, drain)
    #[error("Audio error: {0}")]
    Audio(String),

    /// Sample format not handled by the driver
    #[error("Unsupported sample format: {0}")]
    UnsupportedFormat(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl MocError {
    /// Create an audio error
    pub fn audio(msg: impl Into<String>) -> Self {
        Self::Audio(msg.into())
    }

    /// Create an unsupported format error
    pub fn unsupported_format(msg: impl Into<String>) -> Self {
        Self::UnsupportedFormat(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
