//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Validate config → Build probe → Pinger ready
//!
//! Signals (signals.rs):
//!     SIGINT (Ctrl+C) → Shutdown::trigger
//!
//! Shutdown (shutdown.rs):
//!     Signal buffered → Pinger leaves its loop at the next boundary → Exit 0
//! ```
//!
//! # Design Decisions
//! - Startup failures are fatal; per-attempt failures never are
//! - An in-flight request is never cancelled

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::Shutdown;
