//! Volume editing engine
//!
//! The [`Editor`] runs the whole per-file pipeline: validate the magic
//! tag, read the file, scale every sample, stage the result in a scratch
//! file, and atomically swap it over the original.
//!
//! # Atomicity
//!
//! The original file is never written in place. The rewritten bytes go to
//! a [`tempfile::NamedTempFile`] created in the *same directory* as the
//! target (so the final rename never crosses a filesystem), and
//! `persist()` renames it over the original in one atomic step. A crash
//! mid-write leaves the original fully intact; after the rename the new
//! content is fully visible. There is no window where a reader can see a
//! half-written file.
//!
//! # Failure semantics
//!
//! Every per-file problem is converted into an [`EditResult`] and the
//! batch moves on - one corrupt file in a folder of fifty should not
//! abort the other forty-nine. Only [`EditOutcome::ValidationFailed`]
//! counts toward the failing exit status; skips (I/O trouble, low disk
//! space) are reported but advisory.
//!
//! - [`gain`]: gain factor and the per-sample scale operation
//! - [`stream`]: header pass-through + whole-stream rewrite

pub mod gain;
pub mod stream;

use crate::msu;
use fs2::available_space;
use self::gain::GainFactor;
use serde::Serialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Per-file outcome of a volume edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EditOutcome {
    /// File was rewritten with the new volume.
    Edited,
    /// Magic tag check failed; file left untouched.
    ValidationFailed,
    /// File could not be processed (I/O error, low disk space);
    /// left untouched.
    Skipped,
}

impl fmt::Display for EditOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditOutcome::Edited => write!(f, "EDITED"),
            EditOutcome::ValidationFailed => write!(f, "INVALID"),
            EditOutcome::Skipped => write!(f, "SKIPPED"),
        }
    }
}

/// Everything we know about one file after attempting to edit it.
#[derive(Debug, Clone, Serialize)]
pub struct EditResult {
    pub file_path: String,
    pub file_name: String,
    pub outcome: EditOutcome,
    /// The percentage that was applied (or would have been).
    pub percentage: u32,
    pub bytes_in: u64,
    pub bytes_out: u64,
    /// Complete samples scaled; a truncated trailing byte is not counted.
    pub samples_scaled: usize,
    /// Human-readable explanation for non-Edited outcomes.
    pub detail: Option<String>,
}

impl EditResult {
    fn new(path: &Path, percentage: u32) -> Self {
        Self {
            file_path: path.display().to_string(),
            file_name: path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
            outcome: EditOutcome::Skipped,
            percentage,
            bytes_in: 0,
            bytes_out: 0,
            samples_scaled: 0,
            detail: None,
        }
    }

    fn fail(mut self, outcome: EditOutcome, detail: impl Into<String>) -> Self {
        self.outcome = outcome;
        self.detail = Some(detail.into());
        self
    }
}

/// Batch volume editor.
///
/// Stateless apart from its configuration; one instance can edit any
/// number of files, sequentially or from parallel workers.
pub struct Editor {
    gain: GainFactor,
    space_check: bool,
}

impl Editor {
    pub fn new(gain: GainFactor) -> Self {
        Self {
            gain,
            space_check: true,
        }
    }

    /// Disable the advisory free-space pre-check.
    pub fn with_space_check(mut self, enabled: bool) -> Self {
        self.space_check = enabled;
        self
    }

    pub fn gain(&self) -> GainFactor {
        self.gain
    }

    /// Edit a single file. Never panics and never returns an error -
    /// every failure mode becomes an [`EditResult`].
    pub fn edit(&self, path: &Path) -> EditResult {
        let mut result = EditResult::new(path, self.gain.percentage());

        let input = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) => return result.fail(EditOutcome::Skipped, format!("read failed: {}", e)),
        };
        result.bytes_in = input.len() as u64;

        if !msu::is_valid_header(&input) {
            return result.fail(EditOutcome::ValidationFailed, "missing MSU1 magic tag");
        }

        let parent = path.parent().filter(|p| !p.as_os_str().is_empty());
        let scratch_dir = parent.unwrap_or_else(|| Path::new("."));

        // Advisory only: the filesystem can fill up between this check
        // and the write. The atomic rename is what actually protects the
        // original; this just fails fast with a better message.
        if self.space_check {
            if let Ok(free) = available_space(scratch_dir) {
                if free < input.len() as u64 {
                    return result.fail(
                        EditOutcome::Skipped,
                        format!(
                            "insufficient space for scratch file ({} bytes needed, {} free)",
                            input.len(),
                            free
                        ),
                    );
                }
            }
        }

        let output = stream::process(&input, self.gain);
        result.bytes_out = output.len() as u64;
        result.samples_scaled = stream::sample_count(input.len());

        let scratch = match NamedTempFile::new_in(scratch_dir) {
            Ok(f) => f,
            Err(e) => {
                return result.fail(EditOutcome::Skipped, format!("scratch file failed: {}", e))
            }
        };
        if let Err(e) = fs::write(scratch.path(), &output) {
            return result.fail(EditOutcome::Skipped, format!("scratch write failed: {}", e));
        }
        if let Err(e) = scratch.persist(path) {
            return result.fail(EditOutcome::Skipped, format!("rename failed: {}", e));
        }

        result.outcome = EditOutcome::Edited;
        result
    }

    /// Edit a batch of files in order, collecting every outcome.
    ///
    /// Files are independent; `main` runs [`Editor::edit`] from rayon
    /// workers instead when parallelism is wanted. Observable per-file
    /// outcomes are identical either way.
    pub fn edit_all(&self, paths: &[PathBuf]) -> Vec<EditResult> {
        paths.iter().map(|p| self.edit(p)).collect()
    }
}

/// True if any result should fail the overall run.
///
/// Only validation failures count; skips are advisory (see module docs).
pub fn any_failed(results: &[EditResult]) -> bool {
    results
        .iter()
        .any(|r| r.outcome == EditOutcome::ValidationFailed)
}
