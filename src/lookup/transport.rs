//! Transport layer for the ZIP-code service.
//!
//! The [`ZipCodeTransport`] trait isolates the single outbound request the
//! lookup client makes, so the JSON reduction, caching and fan-out logic can
//! run against either the real HTTP service or a canned in-memory one.
//!
//! The trait is synchronous. [`LookupClient::lookup_async`] moves the call
//! onto tokio's blocking pool, so implementations may block freely.
//!
//! [`LookupClient::lookup_async`]: crate::lookup::LookupClient::lookup_async

use super::LookupConfig;
use crate::error::TransportError;
use log::{debug, info};
use reqwest::header::ACCEPT;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Fetches the raw response body for a 5-digit ZIP code.
pub trait ZipCodeTransport: Send + Sync + 'static {
    /// Perform one request for `zip5`.
    ///
    /// # Returns
    /// The body of a 2xx response, or the reason there is none.
    fn fetch(&self, zip5: &str) -> Result<String, TransportError>;
}

/// HTTP transport backed by a blocking `reqwest` client.
///
/// Create it outside of an async context; its requests must likewise run
/// on a thread that is allowed to block.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::blocking::Client,
    config: LookupConfig,
}

impl HttpTransport {
    pub fn new(config: LookupConfig) -> Result<Self, TransportError> {
        config.validate()?;

        let client = reqwest::blocking::Client::builder()
            .connect_timeout(config.timeout())
            .timeout(config.timeout())
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| TransportError::configuration(e.to_string()))?;

        info!(
            "ZIP lookup transport ready: base_url={}, timeout={}ms",
            config.base_url, config.timeout_ms
        );

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &LookupConfig {
        &self.config
    }
}

impl ZipCodeTransport for HttpTransport {
    fn fetch(&self, zip5: &str) -> Result<String, TransportError> {
        let url = self.config.zip_url(zip5);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
            });
        }

        Ok(response.text()?)
    }
}

/// Canned reply of an [`InMemoryTransport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StubResponse {
    /// A 2xx response with this body
    Body(String),
    /// A response with this non-2xx status
    Status(u16),
    /// A connection-level failure
    NetworkError(String),
}

/// Transport answering from a fixed table, for tests and offline use.
///
/// ZIP codes without an entry answer with HTTP 404, as the real service does.
/// Every call is counted, so callers can assert that a cached lookup did not
/// reach the transport.
///
/// ```rust
/// use applicant_core::lookup::{InMemoryTransport, LookupClient};
///
/// let transport = InMemoryTransport::new()
///     .with_place("78701", "Austin", "TX");
/// let client = LookupClient::with_transport(transport);
///
/// assert_eq!(client.lookup("78701").get_value().city(), "Austin");
/// assert!(client.lookup("00000").is_failure());
/// ```
#[derive(Debug, Default)]
pub struct InMemoryTransport {
    responses: HashMap<String, StubResponse>,
    latency: HashMap<String, Duration>,
    requests: AtomicUsize,
}

impl InMemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(mut self, zip5: impl Into<String>, response: StubResponse) -> Self {
        self.responses.insert(zip5.into(), response);
        self
    }

    /// Answer `zip5` with a raw body.
    pub fn with_body(self, zip5: impl Into<String>, body: impl Into<String>) -> Self {
        self.with_response(zip5, StubResponse::Body(body.into()))
    }

    /// Answer `zip5` with a well-formed single-place body.
    pub fn with_place(self, zip5: impl Into<String>, city: &str, state: &str) -> Self {
        let body = serde_json::json!({
            "places": [{ "place name": city, "state abbreviation": state }]
        });
        self.with_body(zip5, body.to_string())
    }

    /// Delay the reply for `zip5`.
    pub fn with_latency(mut self, zip5: impl Into<String>, latency: Duration) -> Self {
        self.latency.insert(zip5.into(), latency);
        self
    }

    /// Number of `fetch` calls made so far.
    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

impl ZipCodeTransport for InMemoryTransport {
    fn fetch(&self, zip5: &str) -> Result<String, TransportError> {
        self.requests.fetch_add(1, Ordering::SeqCst);

        if let Some(latency) = self.latency.get(zip5) {
            std::thread::sleep(*latency);
        }

        match self.responses.get(zip5) {
            Some(StubResponse::Body(body)) => Ok(body.clone()),
            Some(StubResponse::Status(status)) => Err(TransportError::Status { status: *status }),
            Some(StubResponse::NetworkError(message)) => Err(TransportError::network(message.clone())),
            None => Err(TransportError::Status { status: 404 }),
        }
    }
}
