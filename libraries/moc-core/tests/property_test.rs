//! Property-based tests for sample format tags

use moc_core::{OutputCaps, SampleFormat, SoundParams};
use proptest::prelude::*;

fn arbitrary_tag() -> impl Strategy<Value = SampleFormat> {
    (0u32..0x400).prop_map(SampleFormat::from_bits)
}

fn valid_tag() -> impl Strategy<Value = SampleFormat> {
    let types = vec![
        SampleFormat::S8,
        SampleFormat::U8,
        SampleFormat::S16,
        SampleFormat::U16,
        SampleFormat::S32,
        SampleFormat::U32,
        SampleFormat::FLOAT,
    ];
    let orders = vec![SampleFormat::empty(), SampleFormat::LE, SampleFormat::BE];

    (prop::sample::select(types), prop::sample::select(orders))
        .prop_map(|(sample_type, order)| sample_type | order)
}

proptest! {
    /// Property: a valid tag always has a sample size and a readable name
    #[test]
    fn valid_tags_have_size_and_name(tag in valid_tag()) {
        prop_assert!(tag.is_valid());
        prop_assert!(tag.bytes_per_sample().is_some());
        prop_assert!(!tag.to_string().starts_with("0x"));
    }

    /// Property: splitting a tag loses no known flag
    #[test]
    fn type_and_endianness_recompose(tag in arbitrary_tag()) {
        let known = tag & (SampleFormat::MASK_FORMAT | SampleFormat::MASK_ENDIANNESS);
        prop_assert_eq!(tag.sample_type() | tag.endianness(), known);
    }

    /// Property: frame size scales with channel count
    #[test]
    fn frame_size_scales(channels in 1u16..=32, rate in 8_000u32..=192_000) {
        let params = SoundParams::new(channels, rate, SampleFormat::S16 | SampleFormat::NE);
        prop_assert_eq!(params.bytes_per_frame(), Some(2 * channels as usize));
        prop_assert_eq!(
            params.bytes_per_second(),
            Some(2 * channels as usize * rate as usize)
        );
    }

    /// Property: caps accept exactly the valid tags contained in their mask
    #[test]
    fn caps_accept_contained_tags(mask in arbitrary_tag(), tag in arbitrary_tag()) {
        let caps = OutputCaps { min_channels: 1, max_channels: 2, formats: mask };
        prop_assert_eq!(
            caps.supports_format(tag),
            tag.is_valid() && mask.contains(tag)
        );
    }
}
