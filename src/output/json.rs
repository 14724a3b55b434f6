//! JSON output formatting

use std::io;

use crate::generate::GenerationReport;

/// Print a generation report as pretty-printed JSON to stdout.
pub fn print_report_json(report: &GenerationReport) -> io::Result<()> {
    let json = serde_json::to_string_pretty(report).map_err(io::Error::other)?;
    println!("{}", json);
    Ok(())
}
