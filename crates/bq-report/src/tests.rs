//! Unit and integration tests for bq-report.

use bq_core::{PolicyConfig, RateConfig, RunConfig};

use crate::{ParameterGrid, SummaryRow};

fn express_regular(prob_express: f64, horizon: f64) -> RunConfig {
    RunConfig::new(
        PolicyConfig::ExpressRegular { express_servers: 1, regular_servers: 2, prob_express },
        RateConfig::express_regular(0.25, 0.5, 0.25),
        horizon,
        42,
    )
}

fn single(horizon: f64) -> RunConfig {
    RunConfig::new(PolicyConfig::Single { servers: 3 }, RateConfig::uniform(0.2, 0.25), horizon, 42)
}

// ── Grids ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod grid_tests {
    use super::*;
    use crate::{GridKind, ReportError, UniformGrid, UniformTopology};

    #[test]
    fn default_grids_have_expected_sizes() {
        assert_eq!(ParameterGrid::single_default().len(), 27);
        assert_eq!(ParameterGrid::n_queues_default().len(), 27);
        assert_eq!(ParameterGrid::express_regular_default().len(), 64);
        assert_eq!(ParameterGrid::single_default().points().unwrap().len(), 27);
        assert_eq!(ParameterGrid::express_regular_default().points().unwrap().len(), 64);
    }

    #[test]
    fn points_expand_in_nested_loop_order() {
        let points = ParameterGrid::single_default().points().unwrap();
        assert_eq!(points[0].policy, PolicyConfig::Single { servers: 2 });
        assert_eq!(points[0].rates, RateConfig::uniform(0.2, 0.25));
        assert_eq!(points[1].rates, RateConfig::uniform(0.2, 1.0 / 3.0));
        assert_eq!(points[3].rates, RateConfig::uniform(0.25, 0.25));
        assert_eq!(points[9].policy, PolicyConfig::Single { servers: 3 });
        assert_eq!(points[26].policy, PolicyConfig::Single { servers: 4 });
    }

    #[test]
    fn n_queues_grid_builds_shortest_queue_points() {
        let points = ParameterGrid::n_queues_default().points().unwrap();
        assert!(points.iter().all(|p| matches!(p.policy, PolicyConfig::ShortestQueue { .. })));
    }

    #[test]
    fn express_grid_innermost_list_is_probability() {
        let points = ParameterGrid::express_regular_default().points().unwrap();
        assert_eq!(points[0].policy.prob_express(), Some(0.3));
        assert_eq!(points[1].policy.prob_express(), Some(0.5));
        assert_eq!(points[0].rates, RateConfig::express_regular(0.25, 0.5, 0.25));
    }

    #[test]
    fn seeds_are_distinct_and_offset_from_base() {
        let grid = ParameterGrid::single_default().with_base_seed(100).with_horizon(60.0);
        let points = grid.points().unwrap();
        for (i, p) in points.iter().enumerate() {
            assert_eq!(p.seed, 100 + i as u64);
            assert_eq!(p.horizon, 60.0);
        }
    }

    #[test]
    fn empty_list_is_an_error() {
        let grid = ParameterGrid::new(GridKind::Uniform(UniformGrid {
            topology:      UniformTopology::Single,
            servers:       vec![1],
            arrival_rates: vec![],
            service_rates: vec![1.0],
        }));
        assert!(grid.is_empty());
        assert!(matches!(grid.points(), Err(ReportError::EmptyGrid("arrival rates"))));
    }
}

// ── Sweeps and rows ───────────────────────────────────────────────────────────

#[cfg(test)]
mod sweep_tests {
    use super::*;
    use crate::{run_point, sweep, sweep_grid, ReportError};

    #[test]
    fn sweep_preserves_input_order() {
        let configs = vec![single(100.0), express_regular(0.3, 100.0), single(50.0)];
        let rows = sweep(&configs).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].topology, "single");
        assert_eq!(rows[1].topology, "express_regular");
        assert_eq!(rows[2], run_point(&configs[2]).unwrap());
    }

    #[test]
    fn sweep_is_deterministic() {
        let grid = ParameterGrid::n_queues_default().with_horizon(120.0);
        assert_eq!(sweep_grid(&grid).unwrap(), sweep_grid(&grid).unwrap());
    }

    #[test]
    fn invalid_point_fails_the_sweep() {
        let mut bad = single(100.0);
        bad.rates.arrival_rate = -1.0;
        assert!(matches!(sweep(&[single(10.0), bad]), Err(ReportError::Sim(_))));
    }

    #[test]
    fn express_row_has_class_columns() {
        let row = run_point(&express_regular(0.3, 5_000.0)).unwrap();
        assert_eq!(row.servers, 3);
        assert_eq!(row.express_servers, Some(1));
        assert_eq!(row.regular_servers, Some(2));
        assert_eq!(row.prob_express, Some(0.3));
        assert_eq!(row.service_rates, "0.5;0.25");
        let (e, r) = (row.express_wait.unwrap(), row.regular_wait.unwrap());
        assert!((row.express_efficiency.unwrap() - r / e).abs() < 1e-12);
        assert!((row.utilization - 0.25 / 1.0).abs() < 1e-12);
    }

    #[test]
    fn single_row_has_no_class_columns() {
        let row = run_point(&single(480.0)).unwrap();
        assert_eq!(row.express_wait, None);
        assert_eq!(row.regular_wait, None);
        assert_eq!(row.express_efficiency, None);
        assert!(row.mean_queue_len.is_some());
        assert!((row.utilization - 0.2 / 0.75).abs() < 1e-12);
    }

    #[test]
    fn undefined_statistics_become_empty_cells() {
        let row = run_point(&single(0.0)).unwrap();
        assert_eq!(row.mean_wait, None);
        assert_eq!(row.throughput, None);
        let cells = row.cells();
        assert_eq!(cells.len(), SummaryRow::HEADER.len());
        let idx = |name: &str| SummaryRow::HEADER.iter().position(|h| *h == name).unwrap();
        assert_eq!(cells[idx("mean_wait")], "");
        assert_eq!(cells[idx("throughput")], "");
        assert_eq!(cells[idx("completed")], "0");
        assert!(!cells.iter().any(|c| c.contains("NaN")));
    }
}

// ── CSV output ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use super::*;
    use crate::writer::OutputWriter;
    use crate::{run_point, CsvWriter, CustomerLogObserver, CustomerRow};

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn read(path: &std::path::Path) -> (Vec<String>, Vec<csv::StringRecord>) {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        let headers = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        let rows = rdr.records().map(|r| r.unwrap()).collect();
        (headers, rows)
    }

    #[test]
    fn csv_files_created_with_headers() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path(), "single").unwrap();
        w.finish().unwrap();

        let (headers, rows) = read(&dir.path().join("single_summaries.csv"));
        assert_eq!(headers, SummaryRow::HEADER);
        assert!(rows.is_empty());

        let (headers, _) = read(&dir.path().join("single_customers.csv"));
        assert_eq!(headers, CustomerRow::HEADER);
    }

    #[test]
    fn creates_missing_directory() {
        let dir = tmp();
        let nested = dir.path().join("output").join("bank");
        let w = CsvWriter::new(&nested, "grid").unwrap();
        assert!(w.summaries_path().exists());
        assert!(w.customers_path().exists());
    }

    #[test]
    fn summary_rows_written_in_order() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path(), "mixed").unwrap();
        let rows = vec![run_point(&single(100.0)).unwrap(), run_point(&express_regular(0.5, 100.0)).unwrap()];
        w.write_summaries(&rows).unwrap();
        w.finish().unwrap();

        let (_, read_rows) = read(w.summaries_path());
        assert_eq!(read_rows.len(), 2);
        assert_eq!(&read_rows[0][0], "single");
        assert_eq!(&read_rows[1][0], "express_regular");
        assert_eq!(&read_rows[1][6], "0.5"); // prob_express
        assert_eq!(&read_rows[0][6], "");
    }

    #[test]
    fn observer_logs_every_departure() {
        let dir = tmp();
        let writer = CsvWriter::new(dir.path(), "log").unwrap();
        let mut obs = CustomerLogObserver::new(writer, "single-480");
        let stats = bq_sim::run_with_observer(&single(480.0), &mut obs).unwrap();
        assert!(obs.take_error().is_none());
        assert_eq!(obs.written(), stats.completed());

        let path = dir.path().join("log_customers.csv");
        let (_, rows) = read(&path);
        assert_eq!(rows.len(), stats.completed());
        assert_eq!(&rows[0][0], "single-480");
        assert_eq!(&rows[0][2], "single");
        let waits: Vec<f64> = rows.iter().map(|r| r[5].parse().unwrap()).collect();
        let expected: Vec<f64> = stats.wait_times().collect();
        assert_eq!(waits, expected);
    }
}

// ── Console table ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod table_tests {
    use super::*;
    use crate::{render_table, run_point};

    #[test]
    fn table_has_header_rule_and_one_line_per_row() {
        let rows = vec![run_point(&single(100.0)).unwrap(), run_point(&single(200.0)).unwrap()];
        let table = render_table(&rows);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("topology"));
        assert!(lines[1].chars().all(|c| c == '-'));
        assert!(!lines[0].contains("w_expr"));
    }

    #[test]
    fn express_columns_appear_for_class_split_rows() {
        let rows = vec![run_point(&express_regular(0.3, 100.0)).unwrap()];
        let table = render_table(&rows);
        assert!(table.lines().next().unwrap().contains("w_expr"));
    }

    #[test]
    fn undefined_values_print_as_dash() {
        let rows = vec![run_point(&single(0.0)).unwrap()];
        let table = render_table(&rows);
        let data = table.lines().nth(2).unwrap();
        assert!(data.split_whitespace().any(|c| c == "-"));
    }
}
