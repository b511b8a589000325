//! Fixed-width console table of summary rows.
//!
//! Columns are picked from the rows: queue length only when some row has it,
//! and the express/regular block only when some row is a class-split run.
//! Undefined values print as `-`.

use std::fmt::Write;

use crate::SummaryRow;

const WIDTH: usize = 10;

struct Column {
    title: &'static str,
    cell:  fn(&SummaryRow) -> String,
}

fn num(v: f64) -> String {
    format!("{v:.3}")
}

fn opt_num(v: Option<f64>) -> String {
    v.map(num).unwrap_or_else(|| "-".to_owned())
}

fn columns(rows: &[SummaryRow]) -> Vec<Column> {
    let mut cols = vec![
        Column { title: "topology", cell: |r| r.topology.to_owned() },
        Column { title: "servers", cell: |r| r.servers.to_string() },
        Column { title: "lambda", cell: |r| num(r.arrival_rate) },
        Column { title: "mu", cell: |r| r.service_rates.clone() },
        Column { title: "wait", cell: |r| opt_num(r.mean_wait) },
        Column { title: "system", cell: |r| opt_num(r.mean_system_time) },
        Column { title: "thruput", cell: |r| opt_num(r.throughput) },
        Column { title: "util", cell: |r| num(r.utilization) },
    ];
    if rows.iter().any(|r| r.mean_queue_len.is_some()) {
        cols.push(Column { title: "queue", cell: |r| opt_num(r.mean_queue_len) });
    }
    if rows.iter().any(|r| r.prob_express.is_some()) {
        cols.extend([
            Column { title: "p_expr", cell: |r| opt_num(r.prob_express) },
            Column { title: "w_expr", cell: |r| opt_num(r.express_wait) },
            Column { title: "w_reg", cell: |r| opt_num(r.regular_wait) },
            Column { title: "effic", cell: |r| opt_num(r.express_efficiency) },
        ]);
    }
    cols.extend([
        Column { title: "done", cell: |r| r.completed.to_string() },
        Column { title: "dropped", cell: |r| r.dropped.to_string() },
    ]);
    cols
}

/// Render `rows` as a header, a rule, and one line per row.
pub fn render_table(rows: &[SummaryRow]) -> String {
    let cols = columns(rows);
    let mut out = String::new();

    let header: Vec<String> = cols.iter().map(|c| format!("{:<WIDTH$}", c.title)).collect();
    let header = header.join(" ");
    let _ = writeln!(out, "{}", header.trim_end());
    let _ = writeln!(out, "{}", "-".repeat(cols.len() * (WIDTH + 1) - 1));

    for row in rows {
        let line: Vec<String> = cols.iter().map(|c| format!("{:<WIDTH$}", (c.cell)(row))).collect();
        let _ = writeln!(out, "{}", line.join(" ").trim_end());
    }
    out
}
