//! Closed-form M/M/c check values.
//!
//! The engine never uses these to produce results; they exist so tests and
//! reports can compare a simulated single-pool run against the Erlang-C
//! expectation.  All functions return `None` for an unstable or invalid
//! system (`λ ≥ c·μ`, non-positive rates, `c = 0`).

/// Offered load per server, `λ / (c·μ)`.
pub fn utilization(servers: u32, arrival_rate: f64, service_rate: f64) -> f64 {
    arrival_rate / (f64::from(servers) * service_rate)
}

/// Erlang-C probability that an arrival has to wait.
pub fn erlang_c(servers: u32, arrival_rate: f64, service_rate: f64) -> Option<f64> {
    if servers == 0 || !(arrival_rate > 0.0) || !(service_rate > 0.0) {
        return None;
    }
    let rho = utilization(servers, arrival_rate, service_rate);
    if !(rho < 1.0) {
        return None;
    }

    // term_k = a^k / k!, accumulated without factorial overflow.
    let a = arrival_rate / service_rate;
    let mut term = 1.0;
    let mut sum = 0.0;
    for k in 0..servers {
        sum += term;
        term *= a / f64::from(k + 1);
    }
    let tail = term / (1.0 - rho);
    Some(tail / (sum + tail))
}

/// Expected time spent waiting in line, `Wq`.
pub fn mmc_mean_wait(servers: u32, arrival_rate: f64, service_rate: f64) -> Option<f64> {
    let p_wait = erlang_c(servers, arrival_rate, service_rate)?;
    Some(p_wait / (f64::from(servers) * service_rate - arrival_rate))
}

/// Expected time in system, `W = Wq + 1/μ`.
pub fn mmc_mean_system_time(servers: u32, arrival_rate: f64, service_rate: f64) -> Option<f64> {
    Some(mmc_mean_wait(servers, arrival_rate, service_rate)? + 1.0 / service_rate)
}
