//! Startup orchestration.
//!
//! # Responsibilities
//! - Validate configuration
//! - Build the HTTP probe and the target
//! - Hand back a ready-to-run pinger
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal (exit code 1)
//! - Nothing touches the network before `Pinger::run`

use std::time::Duration;
use url::Url;

use crate::config::{validate_config, KeepAliveConfig};
use crate::error::StartupError;
use crate::health::{HttpProbe, Pinger, Target};

/// Usage tips printed before the pinger starts.
pub fn log_tips() {
    tracing::info!("");
    tracing::info!("Tip: keep this window open for as long as the site should stay awake");
    tracing::info!("     You can minimise the window");
    tracing::info!("     Press CTRL+C to stop");
    tracing::info!("");
}

/// Build the production pinger from a configuration.
pub fn prepare(config: &KeepAliveConfig) -> Result<Pinger<HttpProbe>, StartupError> {
    validate_config(config).map_err(StartupError::InvalidConfig)?;

    tracing::debug!(
        config = %serde_json::to_string(config).unwrap_or_default(),
        "Configuration loaded"
    );

    let url = Url::parse(&config.target.url)?;
    let timeout = Duration::from_secs(config.target.timeout_secs);
    let probe = HttpProbe::new(&config.target.user_agent, timeout).map_err(StartupError::Client)?;

    Ok(Pinger::new(Target::new(url, timeout), probe, &config.schedule))
}
