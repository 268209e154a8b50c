//! Binary entry point: parse the CLI, scrape, display, optionally save.
//!
//! ## Usage
//!
//! ```sh
//! # Scrape every registered source and print the grouped report
//! headline_scraper
//!
//! # Scrape selected sources and save the report
//! headline_scraper bbc hackernews -o headlines.txt
//! ```
//!
//! Per-source failures are logged and never abort the run; the report
//! reflects whatever was scraped successfully, in scrape order.

use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

use headline_scraper::cli::Cli;
use headline_scraper::{NewsScraper, sources};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    let registry = sources::registry();
    if args.list_sources {
        for spec in &registry {
            println!("{:<12} {}", spec.id, spec.name);
        }
        return Ok(());
    }

    let mut scraper = NewsScraper::new(registry);

    if args.sources.is_empty() {
        info!("Scraping all registered sources");
        scraper.scrape_all().await;
    } else {
        for id in &args.sources {
            scraper.scrape_one(id).await;
        }
    }

    println!("{}", scraper.display());

    if let Some(name) = args.output {
        match scraper.save(&name).await {
            Ok(path) => {
                info!(path = %path.display(), count = scraper.collection().len(), "Saved headline report");
                println!("Headlines saved to: {}", path.display());
            }
            Err(e) => {
                // A failed write leaves the in-memory collection intact.
                error!(error = %e, "Failed to write report");
            }
        }
    }

    let elapsed = start_time.elapsed();
    info!(?elapsed, "Execution complete");

    Ok(())
}
