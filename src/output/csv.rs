//! CSV export of the aggregate record set
//!
//! Column names mirror the record fields; empty cells are `None` fields.
//! Rows are written in the order records were aggregated, so the file keeps
//! the page-order invariant of the run.

use crate::scraper::Meeting;
use crate::Result;
use std::path::Path;

/// Exported column names, matching the serde renames on [`Meeting`]
const COLUMNS: [&str; 7] = [
    "Title",
    "Date",
    "Place",
    "Capacity",
    "Code of associated committee or delegation",
    "Meeting with",
    "page_number",
];

/// Writes the records to a CSV file at `path`
///
/// Overwrites any existing file. An empty record set still produces a file
/// with just the header row.
pub fn write_csv(path: &Path, meetings: &[Meeting]) -> Result<()> {
    // The header is written explicitly so an empty run still produces one
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;
    writer.write_record(COLUMNS)?;

    for meeting in meetings {
        writer.serialize(meeting)?;
    }

    writer.flush()?;
    tracing::info!("Wrote {} records to {}", meetings.len(), path.display());

    Ok(())
}
