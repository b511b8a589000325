//! `CustomerLogObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use bq_core::CustomerId;
use bq_resource::ResourcePool;
use bq_sim::{CompletedCustomer, RunStatistics, SimObserver};

use crate::row::CustomerRow;
use crate::writer::OutputWriter;
use crate::{ReportError, ReportResult};

/// A [`SimObserver`] that writes every departure to an [`OutputWriter`].
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After the run returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct CustomerLogObserver<W: OutputWriter> {
    writer:     W,
    run:        String,
    written:    usize,
    last_error: Option<ReportError>,
}

impl<W: OutputWriter> CustomerLogObserver<W> {
    /// Log departures under the run label `run`.
    pub fn new(writer: W, run: impl Into<String>) -> Self {
        Self { writer, run: run.into(), written: 0, last_error: None }
    }

    /// Relabel for the next run sharing this writer.
    pub fn set_run(&mut self, run: impl Into<String>) {
        self.run = run.into();
    }

    /// Rows written so far.
    pub fn written(&self) -> usize {
        self.written
    }

    /// Take the stored write error (if any) after the run returns.
    pub fn take_error(&mut self) -> Option<ReportError> {
        self.last_error.take()
    }

    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Unwrap the inner writer (e.g. to write summaries after the runs).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: ReportResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for CustomerLogObserver<W> {
    fn on_departure(&mut self, customer: &CompletedCustomer, _pool: &ResourcePool<CustomerId>) {
        let row = CustomerRow::new(&self.run, customer);
        let result = self.writer.write_customer(&row);
        if result.is_ok() {
            self.written += 1;
        }
        self.store_err(result);
    }

    fn on_run_end(&mut self, _stats: &RunStatistics) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
