//! bank: the three teller topologies over one 8-hour day.
//!
//! With no arguments, runs the reference scenarios (customer log included),
//! then the default parameter grid of each topology, prints the tables, and
//! writes everything under `output/bank/`.
//!
//! With one argument, reads a JSON `RunConfig` from that path and runs just
//! that configuration:
//!
//! ```json
//! { "policy": { "topology": "single", "servers": 3 },
//!   "rates": { "arrival_rate": 0.2, "service_rates": [0.25] },
//!   "horizon": 480.0, "seed": 42 }
//! ```

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::warn;

use bq_core::{theory, PolicyConfig, RateConfig, RunConfig};
use bq_report::{
    render_table, sweep_grid, CsvWriter, CustomerLogObserver, OutputWriter, ParameterGrid,
    SummaryRow,
};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:       u64 = 42;
const DAY:        f64 = 480.0; // minutes
const OUTPUT_DIR: &str = "output/bank";

// ── Scenarios ─────────────────────────────────────────────────────────────────

fn scenarios() -> Vec<(&'static str, RunConfig)> {
    vec![
        (
            "single",
            RunConfig::new(PolicyConfig::Single { servers: 3 }, RateConfig::uniform(0.2, 0.25), DAY, SEED),
        ),
        (
            "n_queues",
            RunConfig::new(
                PolicyConfig::ShortestQueue { queues: 2 },
                RateConfig::uniform(0.25, 0.33),
                DAY,
                SEED,
            ),
        ),
        (
            "express_regular",
            RunConfig::new(
                PolicyConfig::ExpressRegular {
                    express_servers: 1,
                    regular_servers: 2,
                    prob_express:    0.3,
                },
                RateConfig::express_regular(0.25, 0.5, 0.25),
                DAY,
                SEED,
            ),
        ),
    ]
}

fn run_single_config(path: &Path) -> Result<()> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let config: RunConfig = serde_json::from_str(&text)
        .with_context(|| format!("parsing run config {}", path.display()))?;

    let stats = bq_sim::run(&config)?;
    let row = SummaryRow::from_run(&config, &stats);
    println!("{}", render_table(std::slice::from_ref(&row)));
    println!("{}", serde_json::to_string_pretty(&row)?);
    Ok(())
}

/// Count, mean, min, max of the express efficiency column.
fn print_efficiency(rows: &[SummaryRow]) {
    let values: Vec<f64> = rows.iter().filter_map(|r| r.express_efficiency).collect();
    if values.is_empty() {
        println!("Express efficiency: undefined for every point");
        return;
    }
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    println!("Express efficiency (regular wait / express wait):");
    println!("  count {:>4}   mean {mean:.3}   min {min:.3}   max {max:.3}", values.len());
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    bq_sim::init_logging("warn");

    if let Some(path) = std::env::args().nth(1) {
        return run_single_config(Path::new(&path));
    }

    println!("=== bank: teller topologies over one {DAY}-minute day ===");
    println!();

    let writer = CsvWriter::new(Path::new(OUTPUT_DIR), "bank")?;
    let mut log = CustomerLogObserver::new(writer, "");

    // 1. Reference scenarios, one customer log each.
    let mut scenario_rows = Vec::new();
    for (name, config) in scenarios() {
        log.set_run(name);
        let stats = bq_sim::run_with_observer(&config, &mut log)?;
        if let Some(e) = log.take_error() {
            warn!(scenario = name, "customer log error: {e}");
        }
        scenario_rows.push(SummaryRow::from_run(&config, &stats));
    }
    println!("Reference scenarios");
    println!("{}", render_table(&scenario_rows));

    // M/M/3 check value for the shared-pool scenario.
    if let (Some(expected), Some(observed)) =
        (theory::mmc_mean_wait(3, 0.2, 0.25), scenario_rows[0].mean_wait)
    {
        println!("Single pool mean wait: observed {observed:.3}, M/M/3 steady state {expected:.3}");
        println!();
    }

    // 2. Default grids.
    let t0 = Instant::now();
    let mut all_rows = scenario_rows.clone();
    for (title, grid) in [
        ("Single shared line", ParameterGrid::single_default()),
        ("Shortest of N queues", ParameterGrid::n_queues_default()),
        ("Express / regular", ParameterGrid::express_regular_default()),
    ] {
        let rows = sweep_grid(&grid)?;
        println!("{title}: {} points", rows.len());
        println!("{}", render_table(&rows));
        if matches!(grid.kind, bq_report::GridKind::ExpressRegular(_)) {
            print_efficiency(&rows);
            println!();
        }
        all_rows.extend(rows);
    }
    println!("Sweeps complete in {:.3} s", t0.elapsed().as_secs_f64());

    // 3. Write results.
    let customers = log.written();
    let mut writer = log.into_writer();
    writer.write_summaries(&all_rows)?;
    writer.finish()?;

    let json_path = Path::new(OUTPUT_DIR).join("scenarios.json");
    std::fs::write(&json_path, serde_json::to_string_pretty(&scenario_rows)?)?;

    println!("  {} : {} rows", writer.summaries_path().display(), all_rows.len());
    println!("  {} : {} rows", writer.customers_path().display(), customers);
    println!("  {}", json_path.display());
    Ok(())
}
