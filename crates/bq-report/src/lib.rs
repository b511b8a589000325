//! `bq-report`: experiment sweeps and result output for the rust_bq
//! simulator.
//!
//! The engine in `bq-sim` knows nothing about grids or files.  This crate
//! consumes its per-run [`RunStatistics`][bq_sim::RunStatistics]:
//!
//! | Module        | Contents                                                 |
//! |---------------|----------------------------------------------------------|
//! | [`grid`]      | `ParameterGrid`: cartesian parameter lists → `RunConfig`s |
//! | [`sweep`]     | run every grid point, sequential or on Rayon             |
//! | [`row`]       | `SummaryRow` (one per run), `CustomerRow` (one per customer) |
//! | [`writer`]    | the `OutputWriter` trait                                 |
//! | [`csv`]       | `CsvWriter` backend                                      |
//! | [`observer`]  | `CustomerLogObserver`: `SimObserver` → `OutputWriter`    |
//! | [`table`]     | fixed-width console table                                |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                  |
//! |------------|---------------------------------------------------------|
//! | `parallel` | Sweeps run points on Rayon's thread pool.               |
//!
//! # Usage
//!
//! ```rust,ignore
//! use bq_report::{sweep_grid, CsvWriter, OutputWriter, ParameterGrid};
//!
//! let rows = sweep_grid(&ParameterGrid::single_default())?;
//! println!("{}", bq_report::render_table(&rows));
//! let mut w = CsvWriter::new(Path::new("./output"), "single")?;
//! w.write_summaries(&rows)?;
//! w.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod grid;
pub mod observer;
pub mod row;
pub mod sweep;
pub mod table;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{ReportError, ReportResult};
pub use grid::{ExpressRegularGrid, GridKind, ParameterGrid, UniformGrid, UniformTopology};
pub use observer::CustomerLogObserver;
pub use row::{CustomerRow, SummaryRow};
pub use sweep::{run_point, sweep, sweep_grid};
pub use table::render_table;
pub use writer::OutputWriter;
