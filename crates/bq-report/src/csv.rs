//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `<prefix>_summaries.csv`
//! - `<prefix>_customers.csv`

use std::fs::File;
use std::path::{Path, PathBuf};

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{CustomerRow, ReportResult, SummaryRow};

/// Writes sweep results and customer logs to two CSV files.
pub struct CsvWriter {
    summaries:      Writer<File>,
    customers:      Writer<File>,
    summaries_path: PathBuf,
    customers_path: PathBuf,
}

impl CsvWriter {
    /// Create `dir` if needed, open (or truncate) both files, and write the
    /// header rows.
    pub fn new(dir: &Path, prefix: &str) -> ReportResult<Self> {
        std::fs::create_dir_all(dir)?;

        let summaries_path = dir.join(format!("{prefix}_summaries.csv"));
        let mut summaries = Writer::from_path(&summaries_path)?;
        summaries.write_record(SummaryRow::HEADER)?;

        let customers_path = dir.join(format!("{prefix}_customers.csv"));
        let mut customers = Writer::from_path(&customers_path)?;
        customers.write_record(CustomerRow::HEADER)?;

        Ok(Self { summaries, customers, summaries_path, customers_path })
    }

    pub fn summaries_path(&self) -> &Path {
        &self.summaries_path
    }

    pub fn customers_path(&self) -> &Path {
        &self.customers_path
    }
}

impl OutputWriter for CsvWriter {
    fn write_summaries(&mut self, rows: &[SummaryRow]) -> ReportResult<()> {
        for row in rows {
            self.summaries.write_record(row.cells())?;
        }
        Ok(())
    }

    fn write_customer(&mut self, row: &CustomerRow) -> ReportResult<()> {
        self.customers.write_record(row.cells())?;
        Ok(())
    }

    fn finish(&mut self) -> ReportResult<()> {
        self.summaries.flush()?;
        self.customers.flush()?;
        Ok(())
    }
}
