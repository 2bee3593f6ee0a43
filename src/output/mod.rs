//! Output module
//!
//! Exports the aggregate record set as CSV and prints per-run summaries.
//! The scrape pipeline itself never persists anything; everything here
//! consumes the run's return value.

mod csv;
mod summary;

pub use self::csv::write_csv;
pub use summary::{print_summary, summarize, RunSummary};
