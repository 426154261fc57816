//! Report rendering for aggregated availability results.
//!
//! Each reporter is a pure function from the ordered result list to a
//! printable string.

mod csv;
mod json;
mod table;

use clap::ValueEnum;

use stockcheck_core::AggregatedResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum ReportFormat {
    /// Human readable tables grouped by country and product.
    Table,
    /// Pretty-printed JSON array.
    Json,
    /// Comma separated values with a header row.
    Csv,
}

/// Renders `results` in the requested format.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub(crate) fn render(
    format: ReportFormat,
    results: &[AggregatedResult],
) -> anyhow::Result<String> {
    match format {
        ReportFormat::Table => Ok(table::render(results)),
        ReportFormat::Json => json::render(results),
        ReportFormat::Csv => csv::render(results),
    }
}
