//! Plain data row types written by output backends.

use bq_core::{PolicyConfig, RunConfig};
use bq_sim::{ClassLabel, CompletedCustomer, RunStatistics};
use serde::Serialize;

/// One run, tabulated.
///
/// `None` marks a statistic that is undefined for the run (no samples, or
/// not applicable to the topology).  Writers render it as an empty cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub topology:           &'static str,
    /// Total tellers across all pools.
    pub servers:            u32,
    pub express_servers:    Option<u32>,
    pub regular_servers:    Option<u32>,
    pub arrival_rate:       f64,
    /// Service rates as configured, `;`-separated.
    pub service_rates:      String,
    pub prob_express:       Option<f64>,
    pub seed:               u64,
    pub mean_wait:          Option<f64>,
    pub mean_system_time:   Option<f64>,
    pub throughput:         Option<f64>,
    pub mean_queue_len:     Option<f64>,
    pub utilization:        f64,
    pub express_wait:       Option<f64>,
    pub regular_wait:       Option<f64>,
    /// Regular mean wait over express mean wait.
    pub express_efficiency: Option<f64>,
    pub completed:          usize,
    pub dropped:            u64,
}

impl SummaryRow {
    pub const HEADER: [&'static str; 18] = [
        "topology",
        "servers",
        "express_servers",
        "regular_servers",
        "arrival_rate",
        "service_rates",
        "prob_express",
        "seed",
        "mean_wait",
        "mean_system_time",
        "throughput",
        "mean_queue_len",
        "utilization",
        "express_wait",
        "regular_wait",
        "express_efficiency",
        "completed",
        "dropped",
    ];

    /// Tabulate one finished run.
    pub fn from_run(config: &RunConfig, stats: &RunStatistics) -> Self {
        let (express_servers, regular_servers) = match config.policy {
            PolicyConfig::ExpressRegular { express_servers, regular_servers, .. } => {
                (Some(express_servers), Some(regular_servers))
            }
            _ => (None, None),
        };
        let is_split = express_servers.is_some();
        let express_wait = is_split.then(|| stats.mean_wait_for(ClassLabel::Express).ok()).flatten();
        let regular_wait = is_split.then(|| stats.mean_wait_for(ClassLabel::Regular).ok()).flatten();
        let express_efficiency = match (express_wait, regular_wait) {
            (Some(e), Some(r)) if e > 0.0 => Some(r / e),
            _ => None,
        };

        Self {
            topology: config.policy.topology(),
            servers: config.policy.total_servers(),
            express_servers,
            regular_servers,
            arrival_rate: config.rates.arrival_rate,
            service_rates: config
                .rates
                .service_rates
                .iter()
                .map(f64::to_string)
                .collect::<Vec<_>>()
                .join(";"),
            prob_express: config.policy.prob_express(),
            seed: config.seed,
            mean_wait: stats.mean_wait().ok(),
            mean_system_time: stats.mean_system_time().ok(),
            throughput: stats.throughput().ok(),
            mean_queue_len: stats.mean_queue_len_overall().ok(),
            utilization: stats.utilization(),
            express_wait,
            regular_wait,
            express_efficiency,
            completed: stats.completed(),
            dropped: stats.dropped(),
        }
    }

    /// The row as CSV cells, aligned with [`HEADER`](Self::HEADER).
    pub fn cells(&self) -> Vec<String> {
        vec![
            self.topology.to_owned(),
            self.servers.to_string(),
            opt(self.express_servers),
            opt(self.regular_servers),
            self.arrival_rate.to_string(),
            self.service_rates.clone(),
            opt(self.prob_express),
            self.seed.to_string(),
            opt(self.mean_wait),
            opt(self.mean_system_time),
            opt(self.throughput),
            opt(self.mean_queue_len),
            self.utilization.to_string(),
            opt(self.express_wait),
            opt(self.regular_wait),
            opt(self.express_efficiency),
            self.completed.to_string(),
            self.dropped.to_string(),
        ]
    }
}

/// One departed customer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerRow {
    /// Caller-chosen label of the run the customer belongs to.
    pub run:          String,
    pub customer_id:  u64,
    pub class:        String,
    pub pool:         u16,
    pub arrival_time: f64,
    pub wait_time:    f64,
    pub system_time:  f64,
}

impl CustomerRow {
    pub const HEADER: [&'static str; 7] =
        ["run", "customer_id", "class", "pool", "arrival_time", "wait_time", "system_time"];

    pub fn new(run: &str, customer: &CompletedCustomer) -> Self {
        Self {
            run:          run.to_owned(),
            customer_id:  customer.id.0,
            class:        customer.class.to_string(),
            pool:         customer.pool.0,
            arrival_time: customer.arrival_time.as_f64(),
            wait_time:    customer.wait_time,
            system_time:  customer.system_time,
        }
    }

    pub fn cells(&self) -> Vec<String> {
        vec![
            self.run.clone(),
            self.customer_id.to_string(),
            self.class.clone(),
            self.pool.to_string(),
            self.arrival_time.to_string(),
            self.wait_time.to_string(),
            self.system_time.to_string(),
        ]
    }
}

fn opt<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
