//! Scrape orchestration: the per-source pipeline and the aggregate
//! controller.
//!
//! Every scrape runs the same fetch, parse, rule chain, normalize
//! pipeline, and any failure along the way is caught at the
//! [`NewsScraper::scrape_one`] boundary, logged, and isolated to that
//! source. The controller owns the run's only [`AggregateCollection`].

use crate::extract::{self, Document};
use crate::fetch::Fetcher;
use crate::models::{AggregateCollection, Headline, ScrapeError, SourceOutcome};
use crate::report;
use crate::sources::SourceSpec;
use futures::stream::{self, StreamExt};
use std::path::PathBuf;
use tracing::{info, instrument, warn};

/// How many sources fetch concurrently during [`NewsScraper::scrape_all`].
/// Results are still appended in registration order.
const SCRAPE_CONCURRENCY: usize = 4;

/// Run the fetch → extract → normalize pipeline for one source.
async fn scrape_source(fetcher: &Fetcher, spec: &SourceSpec) -> Result<Vec<Headline>, ScrapeError> {
    let body = fetcher.fetch(spec).await?;
    let document = Document::parse(spec.kind, &body)?;
    let candidates = extract::run_chain(&document, &spec.rules, spec.merge);
    let headlines = extract::normalize(candidates)
        .into_iter()
        .map(|text| Headline {
            source: spec.name.clone(),
            text,
        })
        .collect();
    Ok(headlines)
}

/// Controller owning the run-lifetime aggregate collection.
///
/// The collection is append-only: scraping the same source twice appends a
/// second batch (duplicate text across calls included) rather than
/// replacing the first. [`NewsScraper::reset`] starts the run over.
pub struct NewsScraper {
    fetcher: Fetcher,
    sources: Vec<SourceSpec>,
    collection: AggregateCollection,
}

impl NewsScraper {
    pub fn new(sources: Vec<SourceSpec>) -> Self {
        Self::with_fetcher(Fetcher::new(), sources)
    }

    /// Build a controller around a preconfigured fetcher.
    pub fn with_fetcher(fetcher: Fetcher, sources: Vec<SourceSpec>) -> Self {
        Self {
            fetcher,
            sources,
            collection: AggregateCollection::default(),
        }
    }

    /// Scrape a single source by id, appending its headlines on success.
    ///
    /// Any failure is logged and returned as [`SourceOutcome::Failure`];
    /// the collection is untouched in that case.
    #[instrument(level = "info", skip(self))]
    pub async fn scrape_one(&mut self, id: &str) -> SourceOutcome {
        let Some(spec) = self.sources.iter().find(|spec| spec.id == id).cloned() else {
            let error = ScrapeError::UnknownSource(id.to_string());
            warn!(%error, "Skipping unknown source");
            return SourceOutcome::Failure(error);
        };

        match scrape_source(&self.fetcher, &spec).await {
            Ok(headlines) => {
                info!(source = %spec.name, count = headlines.len(), "Scraped headlines");
                self.collection.append(headlines.clone());
                SourceOutcome::Success(headlines)
            }
            Err(error) => {
                warn!(source = %spec.name, error = %error, "Scrape failed");
                SourceOutcome::Failure(error)
            }
        }
    }

    /// Scrape every registered source in registration order.
    ///
    /// Fetches run concurrently (bounded), but results are appended in
    /// registration order so the rendered report groups deterministically.
    /// A failing source is logged and never prevents the remaining sources
    /// from being attempted; this call always completes.
    pub async fn scrape_all(&mut self) {
        let fetcher = &self.fetcher;
        let mut results = stream::iter(self.sources.iter())
            .map(|spec| async move { (spec, scrape_source(fetcher, spec).await) })
            .buffered(SCRAPE_CONCURRENCY);

        while let Some((spec, result)) = results.next().await {
            match result {
                Ok(headlines) => {
                    info!(source = %spec.name, count = headlines.len(), "Scraped headlines");
                    self.collection.append(headlines);
                }
                Err(error) => {
                    warn!(source = %spec.name, error = %error, "Scrape failed; continuing with remaining sources");
                }
            }
        }
    }

    /// Console rendering of the current collection.
    pub fn display(&self) -> String {
        report::display_text(&self.collection)
    }

    /// Save the rendered report under `name`, appending `.txt` when the
    /// name has no extension. Returns the path actually written.
    pub async fn save(&self, name: &str) -> std::io::Result<PathBuf> {
        let path = report::with_default_extension(name);
        report::save(&path, &self.collection).await?;
        Ok(path)
    }

    /// Drop every accumulated headline and start the run over.
    pub fn reset(&mut self) {
        self.collection.clear();
    }

    pub fn collection(&self) -> &AggregateCollection {
        &self.collection
    }
}
