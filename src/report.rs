//! Grouped plain-text report generation.
//!
//! Rendering scans the aggregate collection left to right and starts a new
//! `SOURCE:` section every time the source changes from the immediately
//! preceding entry. Non-adjacent runs of the same source stay separate:
//! the report reflects scrape order, it never sorts or merges.

use crate::models::AggregateCollection;
use chrono::NaiveDateTime;
use itertools::Itertools;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

const RULE: &str = "======================================================================";
const DASH: &str = "----------------------------------------------------------------------";

/// Render the collection as the report document.
///
/// Pure and deterministic: a fixed collection and timestamp always produce
/// byte-identical output.
pub fn render(collection: &AggregateCollection, scraped_at: NaiveDateTime) -> String {
    let mut out = String::new();
    out.push_str(RULE);
    out.push('\n');
    out.push_str("NEWS HEADLINES SCRAPER\n");
    out.push_str(&format!("Scraped on: {}\n", scraped_at.format("%Y-%m-%d %H:%M:%S")));
    out.push_str(RULE);
    out.push_str("\n\n");

    let groups = collection.entries().iter().chunk_by(|headline| headline.source.clone());
    for (source, group) in &groups {
        out.push_str(&format!("\n{RULE}\nSOURCE: {source}\n{RULE}\n\n"));
        for headline in group {
            out.push_str(&format!("• {}\n", headline.text));
        }
    }

    out.push_str(&format!("\n{RULE}\nTotal Headlines: {}\n{RULE}\n", collection.len()));
    out
}

/// Render the collection for the console, with the same contiguous-run
/// grouping as [`render`]. Returns a placeholder message when nothing has
/// been scraped yet.
pub fn display_text(collection: &AggregateCollection) -> String {
    if collection.is_empty() {
        return "No headlines scraped yet.".to_string();
    }

    let mut out = String::new();
    out.push_str(&format!("{RULE}\nSCRAPED HEADLINES\n{RULE}\n"));

    let groups = collection.entries().iter().chunk_by(|headline| headline.source.clone());
    for (source, group) in &groups {
        out.push_str(&format!("\n{source}:\n{DASH}\n"));
        for headline in group {
            out.push_str(&format!("  • {}\n", headline.text));
        }
    }

    out.push_str(&format!("\n{RULE}\nTotal: {} headlines\n{RULE}\n", collection.len()));
    out
}

/// Write the rendered report to `path` as UTF-8, creating or overwriting
/// the file. The in-memory collection is untouched either way.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn save(path: &Path, collection: &AggregateCollection) -> std::io::Result<()> {
    let text = render(collection, chrono::Local::now().naive_local());
    tokio::fs::write(path, text).await?;
    info!(count = collection.len(), "Wrote headline report");
    Ok(())
}

/// Append `.txt` when the chosen filename carries no extension.
pub fn with_default_extension(name: &str) -> PathBuf {
    let path = PathBuf::from(name);
    if path.extension().is_some() {
        path
    } else {
        path.with_extension("txt")
    }
}
