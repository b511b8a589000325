//! `bq-resource`: fixed-capacity server pools with a FIFO waiting line.
//!
//! # Crate layout
//!
//! | Module     | Contents                                          |
//! |------------|---------------------------------------------------|
//! | [`pool`]   | `ResourcePool<R>`, `RequestOutcome`               |
//! | [`error`]  | `ResourceError`, `ResourceResult<T>`              |
//!
//! # Grant discipline
//!
//! ```text
//! request(r):  in_use < capacity → in_use += 1, Granted
//!              otherwise         → waiting.push_back(r), Queued
//! release():   in_use -= 1
//!              waiting non-empty → in_use += 1, hand back waiting.pop_front()
//! ```
//!
//! The pool never schedules anything itself.  The caller resumes whoever
//! `release` hands back, at the current simulated time.

pub mod error;
pub mod pool;


pub use error::{ResourceError, ResourceResult};
pub use pool::{RequestOutcome, ResourcePool};
