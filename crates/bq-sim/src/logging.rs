//! Subscriber setup for binaries and tests.
//!
//! The engine only emits `tracing` events:
//!
//! | Level   | Emitted for                                         |
//! |---------|-----------------------------------------------------|
//! | `INFO`  | run start and end, with the headline statistics     |
//! | `DEBUG` | pool construction, dropped-customer accounting      |
//! | `TRACE` | every arrival, service start, and departure         |
//!
//! Nothing in the library installs a subscriber.  A binary calls
//! [`init_logging`] once at startup.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a `fmt` subscriber filtered by `RUST_LOG`, falling back to
/// `default_level` (e.g. `"info"`, `"bq_sim=trace"`) when it is unset or
/// unparsable.
///
/// Returns `false` if a global subscriber was already installed; the call is
/// then a no-op, so tests may call it repeatedly.
pub fn init_logging(default_level: &str) -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_level(true))
        .with(filter)
        .try_init()
        .is_ok()
}
