//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! compiled-in defaults
//!     → schema.rs (KeepAliveConfig::default)
//!     → validation.rs (semantic checks)
//!     → lifecycle::startup (builds the pinger from it)
//! ```
//!
//! # Design Decisions
//! - No config file, flags or environment: the defaults are the config
//! - Config is immutable once validated
//! - Validation separates syntactic (serde) from semantic checks

pub mod schema;
pub mod validation;

pub use schema::KeepAliveConfig;
pub use schema::ObservabilityConfig;
pub use schema::ScheduleConfig;
pub use schema::TargetConfig;
pub use validation::{validate_config, ValidationError};
