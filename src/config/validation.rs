//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts and intervals > 0)
//! - Check the target URL and user agent are usable on the wire
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: KeepAliveConfig → Result<(), Vec<ValidationError>>

use reqwest::header::HeaderValue;
use url::Url;

use crate::config::schema::KeepAliveConfig;

/// A single semantic problem with the configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("target.url `{url}` is not a valid URL: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("target.url scheme `{0}` is not http or https")]
    UnsupportedScheme(String),

    #[error("target.user_agent is not a valid header value")]
    InvalidUserAgent,

    #[error("{field} must be greater than zero")]
    Zero { field: &'static str },
}

/// Check a configuration before anything is built from it.
pub fn validate_config(config: &KeepAliveConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match Url::parse(&config.target.url) {
        Ok(url) => {
            if url.scheme() != "http" && url.scheme() != "https" {
                errors.push(ValidationError::UnsupportedScheme(url.scheme().to_string()));
            }
        }
        Err(e) => errors.push(ValidationError::InvalidUrl {
            url: config.target.url.clone(),
            reason: e.to_string(),
        }),
    }

    if config.target.user_agent.is_empty()
        || HeaderValue::from_str(&config.target.user_agent).is_err()
    {
        errors.push(ValidationError::InvalidUserAgent);
    }

    if config.target.timeout_secs == 0 {
        errors.push(ValidationError::Zero { field: "target.timeout_secs" });
    }
    if config.schedule.interval_secs == 0 {
        errors.push(ValidationError::Zero { field: "schedule.interval_secs" });
    }
    if config.schedule.summary_every == 0 {
        errors.push(ValidationError::Zero { field: "schedule.summary_every" });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
