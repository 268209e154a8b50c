//! # Headline Scraper
//!
//! Aggregates top headlines from several independently-structured news
//! sites into one deduplicated, grouped plain-text report.
//!
//! Each source carries a declarative [`sources::SourceSpec`] (endpoint,
//! request headers, ordered extraction rules, merge policy), so coping with
//! a site's markup drift means editing data, not control flow. Scrapes run
//! through one pipeline (fetch → parse → rule chain → normalize) with every
//! per-source failure isolated at the [`pipeline::NewsScraper::scrape_one`]
//! boundary.

pub mod cli;
pub mod extract;
pub mod fetch;
pub mod models;
pub mod pipeline;
pub mod report;
pub mod sources;

pub use fetch::Fetcher;
pub use models::{AggregateCollection, FetchError, Headline, ScrapeError, SourceOutcome};
pub use pipeline::NewsScraper;
pub use sources::SourceSpec;
