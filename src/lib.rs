//! Keep-alive pinger library.
//!
//! Issues a GET against a fixed URL on a fixed interval so a sleeping
//! free-tier host stays awake, logging every outcome and a periodic
//! success rate.

pub mod config;
pub mod error;
pub mod health;
pub mod lifecycle;
pub mod observability;

pub use config::KeepAliveConfig;
pub use error::StartupError;
pub use health::{HttpProbe, Outcome, Pinger, RunReport, Target};
pub use lifecycle::Shutdown;
