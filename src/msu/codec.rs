//! Single-sample decode/encode
//!
//! MSU-1 samples are plain signed 16-bit little-endian integers, two bytes
//! per sample, interleaved stereo. This module deliberately works on one
//! 2-byte block at a time; iterating the stream is the job of
//! [`crate::editor::stream`].

/// Decode a 2-byte block as a signed 16-bit little-endian sample.
///
/// Every 2-byte block is a valid sample, so this cannot fail.
pub fn decode(block: [u8; 2]) -> i16 {
    i16::from_le_bytes(block)
}

/// Encode a sample back into its 2-byte little-endian form.
///
/// Inverse of [`decode`]: `decode(encode(s)) == s` for every `i16`.
pub fn encode(sample: i16) -> [u8; 2] {
    sample.to_le_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================================
    // ROUND-TRIP LAW
    // ==========================================================================
    //
    // decode(encode(s)) == s must hold for every representable sample.
    // The full 65536-value sweep is cheap enough to just run outright.
    // ==========================================================================

    #[test]
    fn test_round_trip_full_range() {
        for s in i16::MIN..=i16::MAX {
            assert_eq!(decode(encode(s)), s, "round-trip failed for {}", s);
        }
    }

    #[test]
    fn test_little_endian_layout() {
        // 1000 = 0x03E8 → low byte first on the wire
        assert_eq!(encode(1000), [0xE8, 0x03]);
        assert_eq!(decode([0xE8, 0x03]), 1000);
    }

    #[test]
    fn test_negative_sample_encoding() {
        // -1 is all bits set in two's complement
        assert_eq!(encode(-1), [0xFF, 0xFF]);
        assert_eq!(decode([0xFF, 0xFF]), -1);
    }

    #[test]
    fn test_range_extremes() {
        assert_eq!(encode(i16::MIN), [0x00, 0x80]);
        assert_eq!(encode(i16::MAX), [0xFF, 0x7F]);
        assert_eq!(decode([0x00, 0x80]), i16::MIN);
        assert_eq!(decode([0xFF, 0x7F]), i16::MAX);
    }

    #[test]
    fn test_silence() {
        assert_eq!(decode([0x00, 0x00]), 0);
        assert_eq!(encode(0), [0x00, 0x00]);
    }
}
