//! Keep-alive pinger.
//!
//! # Architecture Overview
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────┐
//!   │                        KEEP-ALIVE                         │
//!   │                                                           │
//!   │  ┌─────────┐    ┌──────────┐    ┌────────┐    ┌────────┐ │      GET /
//!   │  │ startup │───▶│  pinger  │───▶│ probe  │───▶│reqwest │─┼──────────────▶ Target
//!   │  └─────────┘    │  loop    │◀───│        │◀───│ client │◀┼────────────── (status)
//!   │                 └────┬─────┘    └────────┘    └────────┘ │
//!   │                      │ outcome                            │
//!   │                      ▼                                    │
//!   │                 ┌──────────┐         ┌──────────────┐     │
//!   │                 │ counters │         │   signals    │     │
//!   │                 │ + logs   │         │ Ctrl+C → stop│     │
//!   │                 └──────────┘         └──────────────┘     │
//!   └──────────────────────────────────────────────────────────┘
//! ```
//!
//! No arguments. Exit code 0 after Ctrl+C, 1 if startup fails.

use std::process::ExitCode;

use keep_alive::config::KeepAliveConfig;
use keep_alive::error::StartupError;
use keep_alive::health::RunReport;
use keep_alive::lifecycle::{signals, startup, Shutdown};
use keep_alive::observability::logging;

fn main() -> ExitCode {
    let config = KeepAliveConfig::default();
    logging::init(&config.observability);

    ExitCode::from(exit_code(run(&config)))
}

/// 0 after a graceful stop, 1 after a fatal startup error.
fn exit_code(result: Result<RunReport, StartupError>) -> u8 {
    match result {
        Ok(report) => {
            tracing::debug!(
                requests = report.requests,
                successes = report.successes,
                "Shutdown complete"
            );
            0
        }
        Err(e) => {
            tracing::error!("Fatal error: {}", e);
            1
        }
    }
}

fn run(config: &KeepAliveConfig) -> Result<RunReport, StartupError> {
    // One thread: the loop is sequential and the signal listener only waits.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(StartupError::Runtime)?;

    runtime.block_on(async {
        startup::log_tips();
        let pinger = startup::prepare(config)?;

        let shutdown = Shutdown::new();
        let rx = shutdown.subscribe();
        tokio::spawn(signals::listen_for_interrupt(shutdown.sender()));

        Ok::<_, StartupError>(pinger.run(rx).await)
    })
}
