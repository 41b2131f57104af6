//! Core traits for MOC output backends

use crate::error::Result;
use crate::types::{OutputCaps, SoundParams};

/// Output driver trait
///
/// Implemented once per audio backend. The player core drives it as
/// `init` → `open` → `play`* → `close`/`reset`, queries the mixer on demand
/// and calls `shutdown` once at teardown. All calls come from the single
/// thread that owns audio output; `&mut self` enforces that serialization.
pub trait OutputDriver {
    /// Report the channel range and sample formats this driver accepts
    ///
    /// # Errors
    /// Returns an error if the backend cannot be initialised
    fn init(&mut self) -> Result<OutputCaps>;

    /// Release everything, letting already written audio finish first
    fn shutdown(&mut self);

    /// Prepare the output for a stream with the given parameters
    ///
    /// # Errors
    /// Returns an error if the format is not supported or the device
    /// cannot be opened
    fn open(&mut self, params: &SoundParams) -> Result<()>;

    /// Close the output immediately, discarding queued audio
    fn close(&mut self);

    /// Play raw interleaved PCM in the format given to `open`
    ///
    /// Returns the number of bytes consumed. May block until the device
    /// has room for the data.
    ///
    /// # Errors
    /// Returns an error if the data could not be handed to the device
    fn play(&mut self, buf: &[u8]) -> Result<usize>;

    /// Current mixer volume in percent (0-100)
    fn read_mixer(&self) -> i32;

    /// Set the mixer volume in percent (0-100)
    fn set_mixer(&mut self, volume: i32);

    /// Number of bytes queued in the driver but not yet played
    fn buffer_fill(&self) -> usize;

    /// Stop playback and drop the device so that a new stream can start
    ///
    /// # Errors
    /// Returns an error if the device could not be reset
    fn reset(&mut self) -> Result<()>;

    /// Sample rate the device is actually running at
    fn rate(&self) -> u32;

    /// Switch to the next mixer channel
    fn toggle_mixer_channel(&mut self);

    /// Name of the mixer channel currently in use
    fn mixer_channel_name(&self) -> &str;
}
