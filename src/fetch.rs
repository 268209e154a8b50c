//! HTTP fetching for source documents.
//!
//! One GET per source, no retries. The shared client presents a realistic
//! browser identity because several sources reject default library clients,
//! and applies a fixed timeout so a stalled source fails instead of hanging
//! the run.

use crate::models::FetchError;
use crate::sources::SourceSpec;
use once_cell::sync::Lazy;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, CONNECTION, HeaderMap, HeaderName, HeaderValue, USER_AGENT};
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Timeout applied to every fetch.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Browser-like headers sent with every request. Per-source headers from
/// the [`SourceSpec`] are layered on top and win on conflict.
static DEFAULT_HEADERS: Lazy<HeaderMap> = Lazy::new(|| {
    let mut headers = HeaderMap::new();
    headers.insert(
        USER_AGENT,
        HeaderValue::from_static(
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
             (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
        ),
    );
    headers.insert(
        ACCEPT,
        HeaderValue::from_static("text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8"),
    );
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.5"));
    headers.insert(CONNECTION, HeaderValue::from_static("keep-alive"));
    headers.insert(
        HeaderName::from_static("upgrade-insecure-requests"),
        HeaderValue::from_static("1"),
    );
    headers
});

/// Issues one GET per source with the configured header set and timeout.
pub struct Fetcher {
    client: reqwest::Client,
}

impl Fetcher {
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Build a fetcher with a custom timeout.
    pub fn with_timeout(timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .default_headers(DEFAULT_HEADERS.clone())
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");
        Self { client }
    }

    /// Fetch the raw document for `spec`. Single attempt, network I/O only.
    ///
    /// # Errors
    ///
    /// - [`FetchError::Timeout`] when the request exceeds the fetch timeout
    /// - [`FetchError::Blocked`] on HTTP 403
    /// - [`FetchError::Status`] on any other non-2xx status
    /// - [`FetchError::Network`] on connection-level failures
    #[instrument(level = "info", skip_all, fields(source = %spec.id, url = %spec.url))]
    pub async fn fetch(&self, spec: &SourceSpec) -> Result<String, FetchError> {
        let mut request = self.client.get(spec.url.as_str());
        for (name, value) in &spec.headers {
            request = request.header(name.as_str(), value.as_str());
        }

        let response = request.send().await.map_err(classify)?;
        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "Source returned non-success status");
            return Err(status_error(status.as_u16()));
        }

        let body = response.text().await.map_err(classify)?;
        debug!(bytes = body.len(), "Fetched document");
        Ok(body)
    }
}

impl Default for Fetcher {
    fn default() -> Self {
        Self::new()
    }
}

fn classify(error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout
    } else {
        FetchError::Network(error)
    }
}

fn status_error(code: u16) -> FetchError {
    if code == 403 { FetchError::Blocked } else { FetchError::Status(code) }
}
