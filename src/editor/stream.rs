//! Whole-stream transformation
//!
//! Takes the raw bytes of an MSU-1 file and produces the rewritten bytes:
//! the 8-byte header (magic + loop point) is copied through untouched,
//! then every complete 2-byte sample is decoded, scaled, and re-encoded.
//!
//! A trailing odd byte - a truncated final sample - is dropped, so the
//! output can be exactly one byte shorter than the input. That asymmetry
//! is a property of the format (`8 + 2k + r` in, `8 + 2k` out), not
//! something to paper over by padding.
//!
//! No I/O happens here; reading the file and swapping the result into
//! place belong to [`crate::editor`].

use crate::editor::gain::{scale, GainFactor};
use crate::msu::codec;
use crate::msu::HEADER_LEN;

/// Rewrite an MSU-1 byte stream with every sample scaled by `gain`.
///
/// For an input of `8 + 2k + r` bytes (`r` ∈ {0, 1}) the output is
/// exactly `8 + 2k` bytes. Inputs shorter than the 8-byte header are
/// returned as-is; there is nothing after the header to transform.
pub fn process(input: &[u8], gain: GainFactor) -> Vec<u8> {
    if input.len() <= HEADER_LEN {
        return input.to_vec();
    }

    let (header, samples) = input.split_at(HEADER_LEN);

    let mut output = Vec::with_capacity(HEADER_LEN + samples.len());
    output.extend_from_slice(header);

    // chunks_exact silently leaves a truncated final sample in the
    // remainder, which is exactly the drop-the-tail policy we want.
    for block in samples.chunks_exact(2) {
        let sample = codec::decode([block[0], block[1]]);
        output.extend_from_slice(&codec::encode(scale(sample, gain)));
    }

    output
}

/// Number of complete samples a stream of `len` bytes carries.
pub fn sample_count(len: usize) -> usize {
    len.saturating_sub(HEADER_LEN) / 2
}
