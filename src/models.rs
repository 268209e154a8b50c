//! Data models for scraped headlines, per-source outcomes, and error types.
//!
//! This module defines the core data structures used throughout the application:
//! - [`Headline`]: a single extracted text item tagged with its source
//! - [`SourceOutcome`]: the result of one extraction attempt against a source
//! - [`AggregateCollection`]: the run-lifetime, append-only headline sequence
//! - [`FetchError`] / [`ScrapeError`]: the failure taxonomy for one scrape

use thiserror::Error;

/// A single headline as extracted from a news source.
///
/// # Fields
///
/// * `source` - The display name of the source, e.g. `"BBC News"`
/// * `text` - The headline text, trimmed and non-empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Headline {
    /// The display name of the source the headline came from.
    pub source: String,
    /// The trimmed headline text.
    pub text: String,
}

/// Errors raised while fetching a source document.
///
/// HTTP 403 gets its own [`FetchError::Blocked`] variant so callers can tell
/// the user the source is rejecting automated clients rather than showing a
/// generic status error.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request exceeded the fetch timeout.
    #[error("request timed out")]
    Timeout,
    /// The source answered 403 Forbidden.
    #[error("source is blocking automated access (HTTP 403); try another source")]
    Blocked,
    /// Any other non-2xx HTTP status.
    #[error("unexpected HTTP status {0}")]
    Status(u16),
    /// Connection-level failure (DNS, TLS, refused connection, ...).
    #[error("network error: {0}")]
    Network(reqwest::Error),
}

/// Errors raised by one scrape attempt.
///
/// Every variant is caught at the `scrape_one` boundary, logged, and turned
/// into a [`SourceOutcome::Failure`]; none of them aborts a batch or the
/// process.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    /// The fetched body could not be parsed as the source's document kind.
    #[error("failed to parse document: {0}")]
    Parse(#[from] serde_json::Error),
    /// The requested id is not in the source registry.
    #[error("unknown source id `{0}`")]
    UnknownSource(String),
}

/// Outcome of one extraction attempt against a single source.
#[derive(Debug)]
pub enum SourceOutcome {
    /// Headlines in document order, deduplicated and capped at 15.
    Success(Vec<Headline>),
    Failure(ScrapeError),
}

/// The run-lifetime, ordered sequence of successfully scraped headlines.
///
/// The collection is append-only within a run: scraping the same source a
/// second time appends a second batch rather than replacing the first, so
/// identical text can appear more than once across calls. [`Self::clear`]
/// is the only way to drop accumulated entries.
#[derive(Debug, Default)]
pub struct AggregateCollection {
    entries: Vec<Headline>,
}

impl AggregateCollection {
    /// Append a batch of headlines, preserving their order.
    pub fn append(&mut self, headlines: Vec<Headline>) {
        self.entries.extend(headlines);
    }

    /// All entries in insertion order.
    pub fn entries(&self) -> &[Headline] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every accumulated entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
