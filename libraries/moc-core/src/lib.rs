//! MOC Core
//!
//! Platform-agnostic sound types, the output driver contract and error
//! handling shared by MOC's audio output backends.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Sound Types**: `SampleFormat`, `SoundParams`, `OutputCaps`
//! - **Core Traits**: `OutputDriver`, implemented once per backend
//! - **Error Handling**: Unified `MocError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use moc_core::{SampleFormat, SoundParams};
//!
//! let params = SoundParams::new(2, 44_100, SampleFormat::S16 | SampleFormat::LE);
//! assert_eq!(params.bytes_per_frame(), Some(4));
//! assert_eq!(params.format.to_string(), "S16 LE");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{MocError, Result};
pub use traits::OutputDriver;
pub use types::{OutputCaps, SampleFormat, SoundParams};
