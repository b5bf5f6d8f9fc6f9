//! msuvol - Batch volume editor for MSU-1 PCM files
//!
//! MSU-1 `.pcm` files (the streamed-audio format used by SNES MSU-1
//! hacks) carry raw signed 16-bit samples behind an 8-byte header. There
//! is no volume field, so changing how loud a track plays means rewriting
//! every sample. This crate does exactly that: scale every sample by a
//! percentage and swap the rewritten file atomically over the original.
//!
//! # File layout
//!
//! ```text
//! [4-byte magic "MSU1"][4-byte loop point][N × 16-bit LE signed samples]
//! ```
//!
//! The header is copied through untouched. Samples are scaled in floating
//! point, rounded half away from zero, and clamped to the 16-bit range so
//! a big boost limits instead of wrapping into noise.
//!
//! # Quick Start
//!
//! ```no_run
//! use msuvol::{EditOutcome, Editor, GainFactor};
//! use std::path::Path;
//!
//! let gain = GainFactor::from_percentage(50).unwrap();
//! let editor = Editor::new(gain);
//!
//! let result = editor.edit(Path::new("track-1.pcm"));
//! match result.outcome {
//!     EditOutcome::Edited => println!("rewrote {} samples", result.samples_scaled),
//!     EditOutcome::ValidationFailed => println!("not an MSU-1 file"),
//!     EditOutcome::Skipped => println!("skipped: {:?}", result.detail),
//! }
//! ```
//!
//! # Safety model
//!
//! Originals are never modified in place. Each file is rewritten into a
//! scratch file in the same directory and renamed over the original in
//! one atomic step - a crash at any point leaves either the old file or
//! the new one, never a half-written mix.
//!
//! # Modules
//!
//! - [`msu`]: container format - sample codec and magic-tag validation
//! - [`editor`]: gain math, stream rewriting, and the batch pipeline
//! - [`report`]: output formatters (JSON, CSV)

pub mod editor;
pub mod msu;
pub mod report;

pub use editor::gain::{scale, GainFactor};
pub use editor::{any_failed, EditOutcome, EditResult, Editor};
