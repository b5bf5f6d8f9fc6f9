//! JSON report output

use crate::editor::EditResult;
use crate::report::Summary;
use serde::Serialize;
use std::io::{self, Write};

#[derive(Serialize)]
struct Report<'a> {
    summary: Summary,
    results: &'a [EditResult],
}

pub fn write<W: Write>(writer: &mut W, results: &[EditResult]) -> io::Result<()> {
    let report = Report {
        summary: Summary::from_results(results),
        results,
    };

    serde_json::to_writer_pretty(&mut *writer, &report)?;
    writeln!(writer)
}
