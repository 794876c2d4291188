//! Console logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber
//! - Human-readable lines on stdout with a local timestamp
//! - Colour the level tag when writing to a terminal
//!
//! # Design Decisions
//! - Filter comes from `ObservabilityConfig`, not the environment
//! - `try_init` so repeated initialisation (tests) is a no-op

use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::ObservabilityConfig;

/// Timestamp layout, e.g. `16/10/2026 14:05:09`.
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

const FALLBACK_FILTER: &str = "keep_alive=info";

/// Install the global subscriber. Returns false if one was already set.
pub fn init(config: &ObservabilityConfig) -> bool {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|e| {
        eprintln!(
            "Invalid log filter `{}` ({}), using `{}`",
            config.log_level, e, FALLBACK_FILTER
        );
        EnvFilter::new(FALLBACK_FILTER)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(config.ansi)
                .with_timer(ChronoLocal::new(TIMESTAMP_FORMAT.to_string())),
        )
        .try_init()
        .is_ok()
}
