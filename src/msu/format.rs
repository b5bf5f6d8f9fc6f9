//! MSU-1 header validation
//!
//! The only structural check the format allows: the first four bytes must
//! be the ASCII tag "MSU1". The loop point is not validated (any 4 bytes
//! are legal) and neither is sample parity - a file with a truncated
//! final sample still validates, the trailing byte is simply dropped
//! during processing.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// The 4-byte magic tag identifying an MSU-1 PCM file: `4D 53 55 31`.
pub const MAGIC: [u8; 4] = *b"MSU1";

/// Header length in bytes: magic tag plus the opaque loop point.
pub const HEADER_LEN: usize = 8;

/// Check whether a byte stream begins with the MSU-1 magic tag.
///
/// Returns `false` - never an error - for streams shorter than 4 bytes
/// or with a mismatched tag. Nothing past the magic is inspected.
pub fn is_valid_header(data: &[u8]) -> bool {
    data.len() >= MAGIC.len() && data[..MAGIC.len()] == MAGIC
}

/// Validate a file on disk by reading just its first 4 bytes.
///
/// I/O errors (unreadable file, permissions) propagate; a readable file
/// that is too short or mistagged yields `Ok(false)`.
pub fn validate_file<P: AsRef<Path>>(path: P) -> io::Result<bool> {
    let mut file = File::open(path)?;
    let mut tag = [0u8; 4];
    let mut filled = 0;
    while filled < tag.len() {
        let n = file.read(&mut tag[filled..])?;
        if n == 0 {
            return Ok(false); // shorter than the magic itself
        }
        filled += n;
    }
    Ok(tag == MAGIC)
}
