//! Translation between MOC sample format tags and PulseAudio sample formats

use moc_core::SampleFormat;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// PulseAudio sample format (`pa_sample_format_t`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i32)]
pub enum PulseSampleFormat {
    /// Unsigned 8-bit PCM
    U8 = 0,
    /// 8-bit a-Law
    ALaw = 1,
    /// 8-bit mu-Law
    ULaw = 2,
    /// Signed 16-bit PCM, little endian
    S16Le = 3,
    /// Signed 16-bit PCM, big endian
    S16Be = 4,
    /// 32-bit IEEE float, little endian, range -1.0 to 1.0
    Float32Le = 5,
    /// 32-bit IEEE float, big endian, range -1.0 to 1.0
    Float32Be = 6,
    /// Signed 32-bit PCM, little endian
    S32Le = 7,
    /// Signed 32-bit PCM, big endian
    S32Be = 8,
    /// Signed 24-bit PCM packed, little endian
    S24Le = 9,
    /// Signed 24-bit PCM packed, big endian
    S24Be = 10,
    /// Signed 24-bit PCM in LSB of 32-bit words, little endian
    S24_32Le = 11,
    /// Signed 24-bit PCM in LSB of 32-bit words, big endian
    S24_32Be = 12,
    /// No valid format
    Invalid = -1,
}

impl PulseSampleFormat {
    /// Whether this is the "no match" sentinel
    pub fn is_invalid(self) -> bool {
        self == Self::Invalid
    }

    /// Name as used by PulseAudio (`pa_sample_format_to_string`)
    pub fn name(self) -> &'static str {
        match self {
            Self::U8 => "u8",
            Self::ALaw => "aLaw",
            Self::ULaw => "uLaw",
            Self::S16Le => "s16le",
            Self::S16Be => "s16be",
            Self::Float32Le => "float32le",
            Self::Float32Be => "float32be",
            Self::S32Le => "s32le",
            Self::S32Be => "s32be",
            Self::S24Le => "s24le",
            Self::S24Be => "s24be",
            Self::S24_32Le => "s24-32le",
            Self::S24_32Be => "s24-32be",
            Self::Invalid => "invalid",
        }
    }
}

impl fmt::Display for PulseSampleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(feature = "pulseaudio")]
impl From<PulseSampleFormat> for libpulse_binding::sample::Format {
    fn from(format: PulseSampleFormat) -> Self {
        use libpulse_binding::sample::Format;

        match format {
            PulseSampleFormat::U8 => Format::U8,
            PulseSampleFormat::ALaw => Format::ALaw,
            PulseSampleFormat::ULaw => Format::ULaw,
            PulseSampleFormat::S16Le => Format::S16le,
            PulseSampleFormat::S16Be => Format::S16be,
            PulseSampleFormat::Float32Le => Format::F32le,
            PulseSampleFormat::Float32Be => Format::F32be,
            PulseSampleFormat::S32Le => Format::S32le,
            PulseSampleFormat::S32Be => Format::S32be,
            PulseSampleFormat::S24Le => Format::S24le,
            PulseSampleFormat::S24Be => Format::S24be,
            PulseSampleFormat::S24_32Le => Format::S24_32le,
            PulseSampleFormat::S24_32Be => Format::S24_32be,
            PulseSampleFormat::Invalid => Format::Invalid,
        }
    }
}

// 32-bit signed samples go out as 24-in-32.
#[cfg(target_endian = "big")]
const FORMAT_TABLE: [(PulseSampleFormat, SampleFormat); 4] = [
    (PulseSampleFormat::U8, SampleFormat::BE.union(SampleFormat::U8)),
    (PulseSampleFormat::S16Be, SampleFormat::BE.union(SampleFormat::S16)),
    (PulseSampleFormat::S24_32Be, SampleFormat::BE.union(SampleFormat::S32)),
    (PulseSampleFormat::Float32Be, SampleFormat::BE.union(SampleFormat::FLOAT)),
];

#[cfg(target_endian = "little")]
const FORMAT_TABLE: [(PulseSampleFormat, SampleFormat); 4] = [
    (PulseSampleFormat::U8, SampleFormat::LE.union(SampleFormat::U8)),
    (PulseSampleFormat::S16Le, SampleFormat::LE.union(SampleFormat::S16)),
    (PulseSampleFormat::S24_32Le, SampleFormat::LE.union(SampleFormat::S32)),
    (PulseSampleFormat::Float32Le, SampleFormat::LE.union(SampleFormat::FLOAT)),
];

/// The format table as `(pulse, moc)` pairs
pub fn format_table() -> &'static [(PulseSampleFormat, SampleFormat)] {
    &FORMAT_TABLE
}

/// Map a MOC format tag to the PulseAudio format
///
/// Returns `PulseSampleFormat::Invalid` when the tag is not in the table;
/// callers must check for it.
pub fn format_to_pulse(format: SampleFormat) -> PulseSampleFormat {
    let found = FORMAT_TABLE
        .iter()
        .find(|(_, tag)| *tag == format)
        .map(|(pulse, _)| *pulse);

    found.unwrap_or_else(|| {
        debug!("No PulseAudio format for {}", format);
        PulseSampleFormat::Invalid
    })
}

/// Map a PulseAudio format back to the MOC tag, if the backend plays it
pub fn pulse_to_format(format: PulseSampleFormat) -> Option<SampleFormat> {
    FORMAT_TABLE
        .iter()
        .find(|(pulse, _)| *pulse == format)
        .map(|(_, tag)| *tag)
}

/// OR of every format tag this backend accepts
pub fn supported_formats_mask() -> SampleFormat {
    FORMAT_TABLE
        .iter()
        .fold(SampleFormat::empty(), |mask, (_, tag)| mask | *tag)
}
