//! Target state and running counters.
//!
//! # Invariants
//! - `request_count` grows by exactly one per recorded outcome
//! - `success_count` grows only on `Outcome::Success`
//! - `success_count <= request_count`, both monotonic for the process lifetime

use std::time::Duration;
use url::Url;

use crate::health::outcome::Outcome;

/// The URL being kept alive together with its counters.
#[derive(Debug, Clone)]
pub struct Target {
    url: Url,
    timeout: Duration,
    request_count: u64,
    success_count: u64,
}

impl Target {
    pub fn new(url: Url, timeout: Duration) -> Self {
        Self {
            url,
            timeout,
            request_count: 0,
            success_count: 0,
        }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn request_count(&self) -> u64 {
        self.request_count
    }

    pub fn success_count(&self) -> u64 {
        self.success_count
    }

    /// Count one attempt.
    pub fn record(&mut self, outcome: &Outcome) {
        self.request_count += 1;
        if outcome.is_success() {
            self.success_count += 1;
        }
    }

    /// Cumulative success rate in percent, 0.0 before any request.
    pub fn success_rate(&self) -> f64 {
        if self.request_count == 0 {
            return 0.0;
        }
        self.success_count as f64 / self.request_count as f64 * 100.0
    }
}

/// The periodic summary line, e.g. `Statistics: 5/6 successful (83.3%)`.
pub fn format_summary(target: &Target) -> String {
    format!(
        "Statistics: {}/{} successful ({:.1}%)",
        target.success_count(),
        target.request_count(),
        target.success_rate()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target() -> Target {
        Target::new(Url::parse("http://127.0.0.1/").unwrap(), Duration::from_secs(10))
    }

    fn success() -> Outcome {
        Outcome::Success { status: 200, latency: Duration::from_millis(5) }
    }

    #[test]
    fn test_counts_every_outcome_once() {
        let mut t = target();
        t.record(&success());
        t.record(&Outcome::UnexpectedStatus { status: 503, latency: Duration::ZERO });
        t.record(&Outcome::Timeout);
        t.record(&Outcome::ConnectionError { message: "refused".into() });
        t.record(&Outcome::OtherError { message: "boom".into() });

        assert_eq!(t.request_count(), 5);
        assert_eq!(t.success_count(), 1);
    }

    #[test]
    fn test_five_of_six_is_83_3_percent() {
        let mut t = target();
        for _ in 0..5 {
            t.record(&success());
        }
        t.record(&Outcome::Timeout);

        assert!((t.success_rate() - 83.333).abs() < 0.01);
        assert_eq!(format_summary(&t), "Statistics: 5/6 successful (83.3%)");
    }

    #[test]
    fn test_rate_is_zero_without_requests() {
        let mut t = target();
        assert_eq!(t.success_rate(), 0.0);
        assert_eq!(format_summary(&t), "Statistics: 0/0 successful (0.0%)");

        for _ in 0..6 {
            t.record(&Outcome::ConnectionError { message: "refused".into() });
        }
        assert_eq!(format_summary(&t), "Statistics: 0/6 successful (0.0%)");
    }
}
