//! Configuration schema definitions.
//!
//! The pinger takes no arguments and reads no files, so `Default` is the
//! configuration. Every constant still lives here under a name, and tests
//! build shortened variants from it.

use serde::{Deserialize, Serialize};

/// Root configuration for the keep-alive pinger.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct KeepAliveConfig {
    /// The URL being kept alive and how to reach it.
    pub target: TargetConfig,

    /// Interval and summary cadence.
    pub schedule: ScheduleConfig,

    /// Logging settings.
    pub observability: ObservabilityConfig,
}

/// Target endpoint configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TargetConfig {
    /// URL probed with a GET on every cycle.
    pub url: String,

    /// Total request timeout in seconds (connect + response headers).
    pub timeout_secs: u64,

    /// Value sent in the `User-Agent` header.
    pub user_agent: String,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            url: "https://amigao.onrender.com/".to_string(),
            timeout_secs: 10,
            user_agent: "Amigao-Keep-Alive/1.0".to_string(),
        }
    }
}

/// Scheduling configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ScheduleConfig {
    /// Sleep between attempts in seconds.
    pub interval_secs: u64,

    /// Emit a success-rate summary every N attempts.
    pub summary_every: u64,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            interval_secs: 600,
            summary_every: 6,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Filter directive handed to the subscriber (e.g. `keep_alive=info`).
    pub log_level: String,

    /// Colour level tags on the terminal.
    pub ansi: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "keep_alive=info".to_string(),
            ansi: true,
        }
    }
}
