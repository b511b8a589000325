//! The `OutputWriter` trait implemented by backend writers.

use crate::{CustomerRow, ReportResult, SummaryRow};

/// Trait implemented by result writers.
pub trait OutputWriter {
    /// Write a batch of per-run summary rows.
    fn write_summaries(&mut self, rows: &[SummaryRow]) -> ReportResult<()>;

    /// Write one departed customer.
    fn write_customer(&mut self, row: &CustomerRow) -> ReportResult<()>;

    /// Flush all underlying file handles.
    ///
    /// Safe to call more than once; later writes are still accepted.
    fn finish(&mut self) -> ReportResult<()>;
}
