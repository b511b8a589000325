//! `bq-schedule`: simulated clock and time-ordered event queue.
//!
//! # Crate layout
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`event_queue`] | `EventQueue<P>`, `UntilOutcome`                       |
//! | [`error`]       | `ScheduleError`, `ScheduleResult<T>`                  |
//!
//! # Execution model (summary)
//!
//! ```text
//! schedule(delay, p)  → push (now + delay, seq++, p)
//! advance()           → pop min (time, seq); now = time; hand p back
//! run_until(h, f)     → while next.time ≤ h: f(queue, advance())
//!                       then drop everything left (never executed)
//! ```
//!
//! The queue owns the clock, so nothing else can move time.  Payloads are
//! plain data; the caller decides what "resuming" one means.

pub mod error;
pub mod event_queue;


pub use error::{ScheduleError, ScheduleResult};
pub use event_queue::{EventQueue, UntilOutcome};
