//! Binary channel decoding.
//!
//! Session blob columns pack fixed-width little-endian samples. Each named
//! channel has a static [`ChannelSpec`]; decoding turns the raw bytes into
//! an ordered numeric sequence, or nothing at all when the channel was never
//! populated at capture time.

use serde_json::Value;

/// Element layout of a packed channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleKind {
    /// Unsigned 16-bit (pulse waveform samples).
    U16,
    /// Signed 32-bit (interval, flag, and score series).
    I32,
}

impl SampleKind {
    pub fn width(self) -> usize {
        match self {
            SampleKind::U16 => 2,
            SampleKind::I32 => 4,
        }
    }
}

/// Static decode metadata for one named channel.
///
/// Width, signedness, and scale are fixed contracts of the upstream capture
/// format; existing consumers of the export document rely on them.
#[derive(Debug, Clone, Copy)]
pub struct ChannelSpec {
    pub kind: SampleKind,
    /// Post-decode divisor. Entrainment values are stored as hundredths.
    pub scale: Option<f64>,
}

impl ChannelSpec {
    pub const fn plain(kind: SampleKind) -> Self {
        Self { kind, scale: None }
    }

    pub const fn scaled(kind: SampleKind, divisor: f64) -> Self {
        Self {
            kind,
            scale: Some(divisor),
        }
    }
}

/// A decoded channel, in blob order.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodedChannel {
    Ints(Vec<i64>),
    Floats(Vec<f64>),
}

impl From<DecodedChannel> for Value {
    fn from(channel: DecodedChannel) -> Self {
        match channel {
            DecodedChannel::Ints(values) => Value::from(values),
            DecodedChannel::Floats(values) => Value::from(values),
        }
    }
}

/// Decode a raw blob into a numeric sequence.
///
/// Returns `None` for an empty blob or one shorter than a single element:
/// an unpopulated channel is omitted from the export record rather than
/// emitted as an empty list. Trailing bytes that do not complete a full
/// element are discarded without error.
pub fn decode_channel(blob: &[u8], spec: &ChannelSpec) -> Option<DecodedChannel> {
    let raw: Vec<i64> = match spec.kind {
        SampleKind::U16 => blob
            .chunks_exact(2)
            .map(|c| i64::from(u16::from_le_bytes([c[0], c[1]])))
            .collect(),
        SampleKind::I32 => blob
            .chunks_exact(4)
            .map(|c| i64::from(i32::from_le_bytes([c[0], c[1], c[2], c[3]])))
            .collect(),
    };

    if raw.is_empty() {
        return None;
    }

    match spec.scale {
        Some(divisor) => Some(DecodedChannel::Floats(
            raw.into_iter().map(|v| v as f64 / divisor).collect(),
        )),
        None => Some(DecodedChannel::Ints(raw)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PULSE: ChannelSpec = ChannelSpec::plain(SampleKind::U16);
    const SERIES: ChannelSpec = ChannelSpec::plain(SampleKind::I32);
    const ENTRAINMENT: ChannelSpec = ChannelSpec::scaled(SampleKind::I32, 100.0);

    #[test]
    fn test_empty_blob_is_absent() {
        assert_eq!(decode_channel(&[], &PULSE), None);
        assert_eq!(decode_channel(&[], &SERIES), None);
    }

    #[test]
    fn test_blob_shorter_than_one_element_is_absent() {
        assert_eq!(decode_channel(&[0x01], &PULSE), None);
        assert_eq!(decode_channel(&[0x01, 0x02, 0x03], &SERIES), None);
    }

    #[test]
    fn test_pulse_decodes_little_endian_u16() {
        let decoded = decode_channel(&[0x01, 0x00, 0x02, 0x00], &PULSE).unwrap();
        assert_eq!(decoded, DecodedChannel::Ints(vec![1, 2]));
    }

    #[test]
    fn test_i32_decodes_sign() {
        // -1 and 2 as little-endian i32
        let blob = [0xff, 0xff, 0xff, 0xff, 0x02, 0x00, 0x00, 0x00];
        let decoded = decode_channel(&blob, &SERIES).unwrap();
        assert_eq!(decoded, DecodedChannel::Ints(vec![-1, 2]));
    }

    #[test]
    fn test_trailing_bytes_are_discarded() {
        // Two complete u16 elements plus one stray byte.
        let decoded = decode_channel(&[0x01, 0x00, 0x02, 0x00, 0x7f], &PULSE).unwrap();
        assert_eq!(decoded, DecodedChannel::Ints(vec![1, 2]));

        // One complete i32 element, three bytes short of a second.
        let decoded = decode_channel(&[0x05, 0x00, 0x00, 0x00, 0x01], &SERIES).unwrap();
        assert_eq!(decoded, DecodedChannel::Ints(vec![5]));
    }

    #[test]
    fn test_element_count_is_floor_of_len_over_width() {
        for extra in 0..4 {
            let blob = vec![0u8; 12 + extra];
            let decoded = decode_channel(&blob, &SERIES).unwrap();
            assert_eq!(decoded, DecodedChannel::Ints(vec![0, 0, 0]));
        }
    }

    #[test]
    fn test_scale_divides_into_floats() {
        // 250 -> 2.5 at divisor 100
        let decoded = decode_channel(&[0xfa, 0x00, 0x00, 0x00], &ENTRAINMENT).unwrap();
        assert_eq!(decoded, DecodedChannel::Floats(vec![2.5]));
    }

    #[test]
    fn test_scaled_channel_of_partial_element_is_absent() {
        assert_eq!(decode_channel(&[0xfa, 0x00], &ENTRAINMENT), None);
    }
}
