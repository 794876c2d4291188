//! The keep-alive loop.
//!
//! # Responsibilities
//! - Probe the target once immediately, then once per interval
//! - Classify, log and count every attempt
//! - Emit a success-rate summary every `summary_every` attempts
//! - Stop cleanly when the shutdown signal fires
//!
//! # Cancellation
//! The shutdown receiver is only polled at cycle boundaries and while
//! sleeping. A request already in flight always completes (bounded by its
//! timeout) and is counted; a signal sent meanwhile stays buffered in the
//! channel and ends the loop at the next boundary.

use std::time::{Duration, Instant};

use tokio::sync::broadcast::{self, error::RecvError, error::TryRecvError};
use tokio::time;

use crate::config::ScheduleConfig;
use crate::health::outcome::Outcome;
use crate::health::probe::Probe;
use crate::health::state::{format_summary, Target};

/// Where the pinger is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Before the first attempt has completed.
    Priming,
    /// Steady-state sleep/attempt cycle.
    Looping,
}

/// Counters at the moment the loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    pub requests: u64,
    pub successes: u64,
}

pub struct Pinger<P> {
    target: Target,
    probe: P,
    interval: Duration,
    summary_every: u64,
    phase: Phase,
}

impl<P: Probe> Pinger<P> {
    pub fn new(target: Target, probe: P, schedule: &ScheduleConfig) -> Self {
        Self {
            target,
            probe,
            interval: Duration::from_secs(schedule.interval_secs),
            summary_every: schedule.summary_every.max(1),
            phase: Phase::Priming,
        }
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Perform one GET, log exactly one line and update the counters.
    ///
    /// Every failure is absorbed into the returned `Outcome`.
    pub async fn attempt(&mut self) -> Outcome {
        let start = Instant::now();
        let result = self.probe.get(self.target.url()).await;
        let outcome = Outcome::classify(result, start.elapsed());

        self.target.record(&outcome);

        match &outcome {
            Outcome::Success { .. } => tracing::info!("{}", outcome),
            Outcome::UnexpectedStatus { .. } => tracing::warn!("{}", outcome),
            Outcome::Timeout
            | Outcome::ConnectionError { .. }
            | Outcome::OtherError { .. } => tracing::error!("{}", outcome),
        }

        outcome
    }

    /// Run until shutdown. Returns the final counters.
    pub async fn run(mut self, mut shutdown: broadcast::Receiver<()>) -> RunReport {
        tracing::info!("Keep-alive started");
        tracing::info!("URL: {}", self.target.url());
        tracing::info!("Interval: {}", describe_interval(self.interval));
        tracing::info!("Press CTRL+C to stop");
        tracing::info!("{}", "─".repeat(60));

        tracing::info!("Sending first request...");
        self.attempt_and_summarise().await;
        self.phase = Phase::Looping;

        loop {
            if shutdown_pending(&mut shutdown) {
                break;
            }

            tokio::select! {
                _ = time::sleep(self.interval) => {}
                _ = wait_for_shutdown(&mut shutdown) => break,
            }

            tracing::info!("Sending request #{}...", self.target.request_count() + 1);
            self.attempt_and_summarise().await;
        }

        tracing::info!("Keep-alive stopped by user");

        RunReport {
            requests: self.target.request_count(),
            successes: self.target.success_count(),
        }
    }

    async fn attempt_and_summarise(&mut self) {
        self.attempt().await;

        let requests = self.target.request_count();
        if requests % self.summary_every == 0 {
            tracing::info!("{}", format_summary(&self.target));
        }
    }
}

/// Non-blocking check for a signal sent while an attempt was in flight.
fn shutdown_pending(rx: &mut broadcast::Receiver<()>) -> bool {
    match rx.try_recv() {
        Ok(()) | Err(TryRecvError::Lagged(_)) => true,
        Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => false,
    }
}

/// Resolves on shutdown. A closed channel can never fire, so it pends forever.
async fn wait_for_shutdown(rx: &mut broadcast::Receiver<()>) {
    match rx.recv().await {
        Ok(()) | Err(RecvError::Lagged(_)) => {}
        Err(RecvError::Closed) => std::future::pending::<()>().await,
    }
}

fn describe_interval(interval: Duration) -> String {
    let secs = interval.as_secs();
    match secs {
        60 => "every minute".to_string(),
        s if s > 0 && s % 60 == 0 => format!("every {} minutes", s / 60),
        1 => "every second".to_string(),
        s => format!("every {} seconds", s),
    }
}
