//! Liveness probing subsystem.
//!
//! # Data Flow
//! ```text
//! pinger.rs
//!     sleep (interruptible by shutdown)
//!     → probe.rs: GET target (bounded by timeout)
//!     → outcome.rs: classify status / transport error
//!     → state.rs: bump counters
//!     → one log line, periodic summary
//! ```
//!
//! # Design Decisions
//! - Strictly sequential: one request in flight at most
//! - Counters are plain fields owned by the loop, no atomics
//! - HTTP client sits behind the `Probe` trait so the loop is testable

pub mod outcome;
pub mod pinger;
pub mod probe;
pub mod state;

pub use outcome::{Outcome, ProbeError};
pub use pinger::{Phase, Pinger, RunReport};
pub use probe::{HttpProbe, Probe};
pub use state::Target;
