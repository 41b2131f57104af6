//! PulseAudio backend configuration

use crate::error::{PulseError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable prefix for backend settings (`MOC_PULSE_DEVICE`, ...)
pub const ENV_PREFIX: &str = "MOC_PULSE";

/// Connection settings for the PulseAudio stream
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PulseConfig {
    /// Application name shown by the sound server
    #[serde(default = "default_client_name")]
    pub client_name: String,

    /// Description of the playback stream
    #[serde(default = "default_stream_name")]
    pub stream_name: String,

    /// Server to connect to, `None` for the default server
    #[serde(default)]
    pub server: Option<String>,

    /// Sink to play on, `None` for the default sink
    #[serde(default)]
    pub device: Option<String>,
}

impl PulseConfig {
    /// Load configuration from an optional file and the environment
    ///
    /// Values from `MOC_PULSE_*` environment variables override the file.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        if let Some(path) = path {
            settings = settings.add_source(config::File::from(path));
        }

        settings = settings.add_source(config::Environment::with_prefix(ENV_PREFIX));

        let config: Self = settings.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.client_name.trim().is_empty() {
            return Err(PulseError::Config("client_name must not be empty".to_string()));
        }

        if self.stream_name.trim().is_empty() {
            return Err(PulseError::Config("stream_name must not be empty".to_string()));
        }

        if self.server.as_deref().is_some_and(|s| s.trim().is_empty()) {
            return Err(PulseError::Config(
                "server must be omitted or non-empty".to_string(),
            ));
        }

        if self.device.as_deref().is_some_and(|d| d.trim().is_empty()) {
            return Err(PulseError::Config(
                "device must be omitted or non-empty".to_string(),
            ));
        }

        Ok(())
    }
}

// Default values
fn default_client_name() -> String {
    "mocp".to_string()
}

fn default_stream_name() -> String {
    "Music".to_string()
}

impl Default for PulseConfig {
    fn default() -> Self {
        Self {
            client_name: default_client_name(),
            stream_name: default_stream_name(),
            server: None,
            device: None,
        }
    }
}
