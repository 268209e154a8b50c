//! Command-line interface definitions.
//!
//! This module defines the CLI arguments and options using the `clap` crate.

use clap::Parser;

/// Command-line arguments for the headline scraper.
///
/// With no source ids the scraper attempts every registered source. Pass
/// one or more ids (see `--list-sources`) to scrape a subset in the given
/// order; repeating an id scrapes it again and appends the results.
///
/// # Examples
///
/// ```sh
/// # Scrape everything and print the grouped report
/// headline_scraper
///
/// # Scrape two sources and save under the default filename
/// headline_scraper bbc guardian -o
///
/// # Scrape all sources and save to a chosen file (.txt appended)
/// headline_scraper --output tonight
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Source ids to scrape, in order (default: all registered sources)
    pub sources: Vec<String>,

    /// Write the report to a file after scraping; a bare flag uses the
    /// default filename, and a name without an extension gets `.txt`
    #[arg(short, long, num_args = 0..=1, default_missing_value = "headlines.txt")]
    pub output: Option<String>,

    /// List the registered source ids and exit
    #[arg(long)]
    pub list_sources: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_all_sources_no_save() {
        let cli = Cli::parse_from(["headline_scraper"]);
        assert!(cli.sources.is_empty());
        assert_eq!(cli.output, None);
        assert!(!cli.list_sources);
    }

    #[test]
    fn test_source_ids_keep_their_order() {
        let cli = Cli::parse_from(["headline_scraper", "guardian", "bbc", "bbc"]);
        assert_eq!(cli.sources, vec!["guardian", "bbc", "bbc"]);
    }

    #[test]
    fn test_bare_output_flag_uses_default_filename() {
        let cli = Cli::parse_from(["headline_scraper", "bbc", "-o"]);
        assert_eq!(cli.output.as_deref(), Some("headlines.txt"));
    }

    #[test]
    fn test_output_flag_accepts_a_filename() {
        let cli = Cli::parse_from(["headline_scraper", "--output", "tonight.txt", "bbc"]);
        assert_eq!(cli.output.as_deref(), Some("tonight.txt"));
        assert_eq!(cli.sources, vec!["bbc"]);
    }

    #[test]
    fn test_list_sources_flag() {
        let cli = Cli::parse_from(["headline_scraper", "--list-sources"]);
        assert!(cli.list_sources);
    }
}
