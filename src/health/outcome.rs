//! Attempt outcome classification.
//!
//! Only HTTP 200 counts as success. Any other status, including other 2xx
//! and redirects, is reported as unexpected.

use std::fmt;
use std::time::Duration;

/// Why a probe did not produce a status code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProbeError {
    #[error("request timed out")]
    Timeout,

    #[error("connection failed: {0}")]
    Connect(String),

    #[error("{0}")]
    Other(String),
}

/// The classified result of one attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success { status: u16, latency: Duration },
    UnexpectedStatus { status: u16, latency: Duration },
    Timeout,
    ConnectionError { message: String },
    OtherError { message: String },
}

impl Outcome {
    /// Classify a raw probe result measured over `latency`.
    pub fn classify(result: Result<u16, ProbeError>, latency: Duration) -> Self {
        match result {
            Ok(200) => Outcome::Success { status: 200, latency },
            Ok(status) => Outcome::UnexpectedStatus { status, latency },
            Err(ProbeError::Timeout) => Outcome::Timeout,
            Err(ProbeError::Connect(message)) => Outcome::ConnectionError { message },
            Err(ProbeError::Other(message)) => Outcome::OtherError { message },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }

    /// Latency for outcomes that received a response.
    pub fn latency(&self) -> Option<Duration> {
        match self {
            Outcome::Success { latency, .. } | Outcome::UnexpectedStatus { latency, .. } => {
                Some(*latency)
            }
            _ => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Success { status, latency } => {
                write!(f, "Site is up! Status: {} | Time: {}ms", status, latency.as_millis())
            }
            Outcome::UnexpectedStatus { status, latency } => {
                write!(f, "Unexpected response: {} | Time: {}ms", status, latency.as_millis())
            }
            Outcome::Timeout => write!(f, "Timeout - site took too long to respond"),
            Outcome::ConnectionError { message } => {
                write!(f, "Connection error - check your internet connection ({})", message)
            }
            Outcome::OtherError { message } => write!(f, "Error: {}", message),
        }
    }
}
