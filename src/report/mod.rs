//! Report generation for batch edit results
//!
//! Output formatters for per-file edit results:
//!
//! - **JSON**: Machine-readable format for programmatic consumption
//! - **CSV**: Spreadsheet-compatible format for bulk runs
//!
//! # Usage
//!
//! ```ignore
//! use msuvol::report;
//!
//! // Picks the format from the extension
//! report::generate("run.json", &results)?;  // JSON
//! report::generate("run.csv", &results)?;   // CSV
//! ```

pub mod csv;
pub mod json;

use crate::editor::{EditOutcome, EditResult};
use serde::Serialize;
use std::io;
use std::path::Path;

/// Generate a report in the appropriate format based on file extension
pub fn generate<P: AsRef<Path>>(path: P, results: &[EditResult]) -> io::Result<()> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    let mut file = std::fs::File::create(path)?;

    match ext.as_str() {
        "json" => json::write(&mut file, results),
        _ => csv::write(&mut file, results),
    }
}

/// Summary statistics for a batch of results
#[derive(Debug, Clone, Default, Serialize)]
pub struct Summary {
    pub total: usize,
    pub edited: usize,
    pub invalid: usize,
    pub skipped: usize,
}

impl Summary {
    pub fn from_results(results: &[EditResult]) -> Self {
        let mut summary = Self {
            total: results.len(),
            ..Self::default()
        };

        for r in results {
            match r.outcome {
                EditOutcome::Edited => summary.edited += 1,
                EditOutcome::ValidationFailed => summary.invalid += 1,
                EditOutcome::Skipped => summary.skipped += 1,
            }
        }

        summary
    }
}
