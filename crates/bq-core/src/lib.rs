//! `bq-core`: foundational types for the `rust_bq` bank queueing simulator.
//!
//! This crate is a dependency of every other `bq-*` crate.  It has no `bq-*`
//! dependencies and only a handful of external ones (`rand`, `rand_distr`,
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`ids`]       | `CustomerId`, `PoolId`                                  |
//! | [`time`]      | `SimTime`, `SimClock`                                   |
//! | [`rng`]       | `SimRng`, `RunStreams` (per-concern seeded streams)     |
//! | [`dists`]     | `Exponential` inter-arrival / service sampler           |
//! | [`config`]    | `RunConfig`, `PolicyConfig`, `RateConfig`, `PoolSpec`   |
//! | [`theory`]    | Erlang-C / M/M/c check values                           |
//! | [`error`]     | `CoreError`, `CoreResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to config and time types.   |

pub mod config;
pub mod dists;
pub mod error;
pub mod ids;
pub mod rng;
pub mod theory;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{PolicyConfig, PoolSpec, RateConfig, RunConfig, EXPRESS_POOL, REGULAR_POOL};
pub use dists::Exponential;
pub use error::{CoreError, CoreResult};
pub use ids::{CustomerId, PoolId};
pub use rng::{RunStreams, SimRng};
pub use time::{SimClock, SimTime};
