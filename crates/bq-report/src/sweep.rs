//! Running many configurations.
//!
//! Every point builds and owns its own simulation, so points are independent.
//! With the `parallel` Cargo feature they run on Rayon's thread pool; the
//! returned rows are in input order either way, and identical.

use bq_core::RunConfig;
use tracing::info;

use crate::{ParameterGrid, ReportResult, SummaryRow};

/// Run one configuration and tabulate it.
pub fn run_point(config: &RunConfig) -> ReportResult<SummaryRow> {
    let stats = bq_sim::run(config)?;
    Ok(SummaryRow::from_run(config, &stats))
}

/// Run every configuration; stops at the first failing point.
pub fn sweep(configs: &[RunConfig]) -> ReportResult<Vec<SummaryRow>> {
    #[cfg(not(feature = "parallel"))]
    {
        configs.iter().map(run_point).collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        configs.par_iter().map(run_point).collect()
    }
}

/// Expand `grid` and run every point.
pub fn sweep_grid(grid: &ParameterGrid) -> ReportResult<Vec<SummaryRow>> {
    let points = grid.points()?;
    info!(points = points.len(), horizon = grid.horizon, "sweep started");
    let rows = sweep(&points)?;
    info!(rows = rows.len(), "sweep finished");
    Ok(rows)
}
