//! Sample format tags used across the player

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};

/// Sample format as a set of bit flags
///
/// A complete tag combines exactly one sample type (`S8`, `U8`, `S16`, `U16`,
/// `S32`, `U32`, `FLOAT`) with a byte order (`LE` or `BE`). Drivers advertise
/// what they accept by OR-ing the tags of every supported encoding together.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SampleFormat(u32);

impl SampleFormat {
    /// Signed 8-bit
    pub const S8: Self = Self(0x01);
    /// Unsigned 8-bit
    pub const U8: Self = Self(0x02);
    /// Signed 16-bit
    pub const S16: Self = Self(0x04);
    /// Unsigned 16-bit
    pub const U16: Self = Self(0x08);
    /// Signed 32-bit (also carries 24-bit samples padded to 32)
    pub const S32: Self = Self(0x10);
    /// Unsigned 32-bit
    pub const U32: Self = Self(0x20);
    /// 32-bit IEEE float
    pub const FLOAT: Self = Self(0x40);
    /// Little-endian byte order
    pub const LE: Self = Self(0x80);
    /// Big-endian byte order
    pub const BE: Self = Self(0x100);

    /// Host byte order
    #[cfg(target_endian = "little")]
    pub const NE: Self = Self::LE;
    /// Host byte order
    #[cfg(target_endian = "big")]
    pub const NE: Self = Self::BE;

    /// All sample type bits
    pub const MASK_FORMAT: Self = Self(0x7f);
    /// All byte order bits
    pub const MASK_ENDIANNESS: Self = Self(0x180);

    /// Empty tag (no flags set)
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Build a tag from raw bits
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// Raw bit value
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Tag with the flags of both `self` and `other` (`|` for const contexts)
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// True when no flag is set
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True when every flag of `other` is also set in `self`
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// True when `self` and `other` share at least one flag
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// The sample type bits only
    pub const fn sample_type(self) -> Self {
        Self(self.0 & Self::MASK_FORMAT.0)
    }

    /// The byte order bits only
    pub const fn endianness(self) -> Self {
        Self(self.0 & Self::MASK_ENDIANNESS.0)
    }

    /// Whether this is a single, fully specified encoding
    ///
    /// Exactly one sample type, at most one byte order and no unknown bits.
    pub const fn is_valid(self) -> bool {
        let known = Self::MASK_FORMAT.0 | Self::MASK_ENDIANNESS.0;
        self.0 & !known == 0
            && self.sample_type().0.count_ones() == 1
            && self.endianness().0.count_ones() <= 1
    }

    /// Size of one sample in bytes, `None` unless exactly one sample type is set
    pub fn bytes_per_sample(self) -> Option<usize> {
        match self.sample_type() {
            Self::S8 | Self::U8 => Some(1),
            Self::S16 | Self::U16 => Some(2),
            Self::S32 | Self::U32 | Self::FLOAT => Some(4),
            _ => None,
        }
    }

    fn type_name(self) -> Option<&'static str> {
        match self.sample_type() {
            Self::S8 => Some("S8"),
            Self::U8 => Some("U8"),
            Self::S16 => Some("S16"),
            Self::U16 => Some("U16"),
            Self::S32 => Some("S32"),
            Self::U32 => Some("U32"),
            Self::FLOAT => Some("FLOAT"),
            _ => None,
        }
    }
}

impl BitOr for SampleFormat {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for SampleFormat {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for SampleFormat {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl fmt::Display for SampleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(name) = self.type_name().filter(|_| self.is_valid()) else {
            return write!(f, "{:#x}", self.0);
        };

        match self.endianness() {
            Self::LE => write!(f, "{} LE", name),
            Self::BE => write!(f, "{} BE", name),
            _ => f.write_str(name),
        }
    }
}

impl fmt::Debug for SampleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SampleFormat({})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_endianness_matches_host() {
        #[cfg(target_endian = "little")]
        assert_eq!(SampleFormat::NE, SampleFormat::LE);
        #[cfg(target_endian = "big")]
        assert_eq!(SampleFormat::NE, SampleFormat::BE);
    }

    #[test]
    fn split_type_and_endianness() {
        let tag = SampleFormat::S16 | SampleFormat::BE;
        assert_eq!(tag.sample_type(), SampleFormat::S16);
        assert_eq!(tag.endianness(), SampleFormat::BE);
    }

    #[test]
    fn validity() {
        assert!((SampleFormat::S16 | SampleFormat::LE).is_valid());
        assert!(SampleFormat::U8.is_valid());
        assert!(!SampleFormat::empty().is_valid());
        assert!(!(SampleFormat::S16 | SampleFormat::S32 | SampleFormat::LE).is_valid());
        assert!(!(SampleFormat::S16 | SampleFormat::LE | SampleFormat::BE).is_valid());
        assert!(!SampleFormat::from_bits(0x200 | 0x04).is_valid());
    }

    #[test]
    fn bytes_per_sample_by_width() {
        assert_eq!(SampleFormat::U8.bytes_per_sample(), Some(1));
        assert_eq!((SampleFormat::S16 | SampleFormat::LE).bytes_per_sample(), Some(2));
        assert_eq!((SampleFormat::S32 | SampleFormat::BE).bytes_per_sample(), Some(4));
        assert_eq!(SampleFormat::FLOAT.bytes_per_sample(), Some(4));
        assert_eq!(SampleFormat::LE.bytes_per_sample(), None);
        assert_eq!((SampleFormat::S8 | SampleFormat::S16).bytes_per_sample(), None);
    }

    #[test]
    fn display() {
        assert_eq!((SampleFormat::S16 | SampleFormat::LE).to_string(), "S16 LE");
        assert_eq!((SampleFormat::FLOAT | SampleFormat::BE).to_string(), "FLOAT BE");
        assert_eq!(SampleFormat::U8.to_string(), "U8");
        assert_eq!((SampleFormat::S8 | SampleFormat::U8).to_string(), "0x3");
    }

    #[test]
    fn contains_and_intersects() {
        let mask = SampleFormat::LE | SampleFormat::U8 | SampleFormat::S16;
        assert!(mask.contains(SampleFormat::LE | SampleFormat::S16));
        assert!(!mask.contains(SampleFormat::BE | SampleFormat::S16));
        assert!(mask.intersects(SampleFormat::S16 | SampleFormat::BE));
        assert!(!mask.intersects(SampleFormat::FLOAT));
    }
}
