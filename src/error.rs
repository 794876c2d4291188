//! Startup error taxonomy.
//!
//! Per-attempt failures are `health::Outcome` values and never surface here.

use crate::config::ValidationError;

/// Errors that abort the process before the loop starts.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("invalid configuration: {}", join(.0))]
    InvalidConfig(Vec<ValidationError>),

    #[error("invalid target URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("failed to start runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
