//! Sound types shared by the player core and output drivers

mod format;
mod sound;

pub use format::SampleFormat;
pub use sound::{OutputCaps, SoundParams};
