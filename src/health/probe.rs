//! HTTP probe.
//!
//! # Responsibilities
//! - Issue one GET against the target with the keep-alive user agent
//! - Bound the request by the configured timeout
//! - Reduce transport failures to `ProbeError`
//!
//! The response body is never read; the status line is all the pinger needs.

use std::future::Future;
use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::health::outcome::ProbeError;

/// One GET against a URL, yielding the status code.
pub trait Probe {
    fn get(&self, url: &Url) -> impl Future<Output = Result<u16, ProbeError>> + Send;
}

/// reqwest-backed probe used in production.
#[derive(Debug, Clone)]
pub struct HttpProbe {
    client: Client,
}

impl HttpProbe {
    /// Build the client once; it is reused for every attempt.
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }
}

impl Probe for HttpProbe {
    fn get(&self, url: &Url) -> impl Future<Output = Result<u16, ProbeError>> + Send {
        let request = self.client.get(url.clone());
        async move {
            match request.send().await {
                Ok(response) => Ok(response.status().as_u16()),
                Err(e) => Err(classify_error(&e)),
            }
        }
    }
}

fn classify_error(e: &reqwest::Error) -> ProbeError {
    if e.is_timeout() {
        ProbeError::Timeout
    } else if e.is_connect() {
        ProbeError::Connect(error_chain(e))
    } else {
        ProbeError::Other(error_chain(e))
    }
}

/// Render an error with its sources, e.g. `error sending request: connection refused`.
fn error_chain(e: &dyn std::error::Error) -> String {
    let mut message = e.to_string();
    let mut source = e.source();
    while let Some(inner) = source {
        let text = inner.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = inner.source();
    }
    message
}
