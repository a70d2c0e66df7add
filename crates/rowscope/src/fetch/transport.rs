//! HTTP transport and backoff seams for the retriever.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::error::{Result, RowscopeError};

/// Request timeout for the production transport.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// A raw HTTP response: status plus body text.
///
/// The retriever owns all status interpretation, so the transport hands back
/// non-success responses instead of failing on them.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    /// Create a response from parts.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// True for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Issues a single HTTP GET. Implementations return `Err` only for
/// network-level failures; HTTP error statuses come back as responses.
pub trait Transport: Send + Sync {
    fn get(&self, url: &str) -> Result<HttpResponse>;
}

/// Production transport backed by a blocking reqwest client.
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Create a transport with the default request timeout.
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| RowscopeError::Config(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str) -> Result<HttpResponse> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| RowscopeError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|e| RowscopeError::Network(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}

/// Waits between retry attempts. A seam so tests can observe backoff delays
/// instead of sleeping through them.
pub trait Sleeper: Send + Sync {
    fn sleep(&self, duration: Duration);
}

/// Production sleeper: blocks the calling thread.
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}
