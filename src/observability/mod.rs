//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! pinger, startup, signals
//!     → tracing macros
//!     → logging.rs subscriber
//!     → stdout (timestamped, coloured level tag)
//! ```
//!
//! # Design Decisions
//! - Human-readable text only, no JSON
//! - Nothing written to files

pub mod logging;
