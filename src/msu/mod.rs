//! MSU-1 PCM container format
//!
//! MSU-1 audio files are about as simple as a format gets:
//!
//! ```text
//! Offset | Size | Contents
//! -------|------|------------------------------------------
//! 0      | 4    | Magic tag "MSU1" (4D 53 55 31)
//! 4      | 4    | Loop point (sample index, little-endian)
//! 8      | ...  | Signed 16-bit little-endian PCM samples
//! ```
//!
//! The loop point is opaque to this tool - volume editing never touches
//! it, it is copied through byte-for-byte along with the magic. A file
//! whose sample region does not divide evenly into 2-byte samples has a
//! truncated final sample; that trailing byte is treated as end-of-stream
//! rather than an error.
//!
//! - [`codec`]: single-sample decode/encode
//! - [`format`]: magic-tag validation and header constants

pub mod codec;
pub mod format;

pub use format::{is_valid_header, HEADER_LEN, MAGIC};
