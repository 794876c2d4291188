//! OS signal handling.
//!
//! # Responsibilities
//! - Wait for Ctrl+C (SIGINT)
//! - Translate it into the shutdown broadcast
//!
//! # Design Decisions
//! - Uses Tokio's signal handling (async-safe)
//! - If the handler cannot be installed the pinger keeps running; the
//!   process can still be killed from outside

use tokio::sync::broadcast;

/// Wait for Ctrl+C and broadcast shutdown.
pub async fn listen_for_interrupt(tx: broadcast::Sender<()>) {
    match tokio::signal::ctrl_c().await {
        Ok(()) => {
            tracing::info!("Shutdown signal received");
            let _ = tx.send(());
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        }
    }
}
