//! CSV report output
//!
//! One row per file, quoted where the content could contain commas.
//! Opens cleanly in any spreadsheet; the summary lives in the terminal
//! output and the JSON format, not here.

use crate::editor::EditResult;
use std::io::{self, Write};

pub fn write<W: Write>(writer: &mut W, results: &[EditResult]) -> io::Result<()> {
    writeln!(
        writer,
        "file,outcome,percentage,bytes_in,bytes_out,samples_scaled,detail"
    )?;

    for r in results {
        writeln!(
            writer,
            "{},{},{},{},{},{},{}",
            quote(&r.file_path),
            r.outcome,
            r.percentage,
            r.bytes_in,
            r.bytes_out,
            r.samples_scaled,
            quote(r.detail.as_deref().unwrap_or("")),
        )?;
    }

    Ok(())
}

/// Quote a field if it contains a comma, quote, or newline.
fn quote(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
