//! Rule-driven headline extraction.
//!
//! Each source declares an ordered list of extraction rules over its fetched
//! document plus a merge policy; running the chain yields an ordered,
//! source-scoped candidate list. The rules are plain data (a structural
//! query and a minimum text length), so tolerating a site's markup drift
//! means editing the source's rule list, not its control flow.
//!
//! The [`normalize`] step is pure and turns the raw candidate list into the
//! final capped headline texts.

use crate::models::ScrapeError;
use itertools::Itertools;
use scraper::{Html, Selector};
use tracing::{debug, warn};

/// Cap applied to each source's final headline list.
pub const MAX_HEADLINES: usize = 15;

/// How a source's fetched body is structured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Html,
    Json,
}

/// A structural query over a parsed document.
#[derive(Debug, Clone)]
pub enum Query {
    /// CSS selector; the text content of each match is one candidate.
    Css(String),
    /// JSON pointers: `items` addresses an array, `text` addresses the
    /// candidate string inside each element.
    Json { items: String, text: String },
}

/// One extraction rule: a query plus a minimum character count that weeds
/// out navigation fragments and short labels that are not headline text.
#[derive(Debug, Clone)]
pub struct Rule {
    pub query: Query,
    pub min_chars: usize,
}

/// How a source's rules combine into one candidate list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergePolicy {
    /// Run every rule; concatenate matches in rule order, document order
    /// within a rule.
    MergeAll,
    /// Run rules in order, skipping the remaining rules once the candidate
    /// count reaches the threshold.
    PrimaryThenFallback(usize),
}

/// A parsed source document ready for querying.
pub enum Document {
    Html(Html),
    Json(serde_json::Value),
}

impl Document {
    /// Parse a fetched body according to the source's document kind.
    ///
    /// HTML parsing never fails (the parser recovers from any input);
    /// malformed JSON yields [`ScrapeError::Parse`].
    pub fn parse(kind: DocumentKind, body: &str) -> Result<Self, ScrapeError> {
        match kind {
            DocumentKind::Html => Ok(Document::Html(Html::parse_document(body))),
            DocumentKind::Json => Ok(Document::Json(serde_json::from_str(body)?)),
        }
    }

    /// All matches for `query`, in document order.
    fn select(&self, query: &Query) -> Vec<String> {
        match (self, query) {
            (Document::Html(html), Query::Css(css)) => {
                let selector = Selector::parse(css).unwrap();
                html.select(&selector)
                    .map(|element| collapse_whitespace(&element.text().collect::<Vec<_>>().join(" ")))
                    .collect()
            }
            (Document::Json(value), Query::Json { items, text }) => value
                .pointer(items)
                .and_then(|node| node.as_array())
                .map(|array| {
                    array
                        .iter()
                        .filter_map(|item| item.pointer(text).and_then(|title| title.as_str()))
                        .map(collapse_whitespace)
                        .collect()
                })
                .unwrap_or_default(),
            _ => {
                warn!(?query, "Query does not match document kind; no matches");
                Vec::new()
            }
        }
    }
}

/// Run a source's rule chain over `document`.
///
/// Candidates appear in rule order, document order within a rule; text
/// already captured by an earlier rule is dropped at merge time. Under
/// [`MergePolicy::PrimaryThenFallback`] each subsequent rule only runs
/// while the candidate count is below the threshold. The output is not
/// yet capped.
pub fn run_chain(document: &Document, rules: &[Rule], policy: MergePolicy) -> Vec<String> {
    let mut candidates: Vec<String> = Vec::new();
    for (index, rule) in rules.iter().enumerate() {
        if let MergePolicy::PrimaryThenFallback(threshold) = policy {
            if candidates.len() >= threshold {
                break;
            }
        }
        let matches = document.select(&rule.query);
        debug!(rule = index, matched = matches.len(), "Ran extraction rule");
        for text in matches {
            if text.chars().count() >= rule.min_chars && !candidates.contains(&text) {
                candidates.push(text);
            }
        }
    }
    candidates
}

/// Normalize a raw candidate list into the final headline texts.
///
/// Steps, in order: trim whitespace, drop empty strings, drop exact
/// duplicates (first occurrence wins), truncate to [`MAX_HEADLINES`].
/// Pure and order-preserving.
pub fn normalize(candidates: Vec<String>) -> Vec<String> {
    candidates
        .into_iter()
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
        .unique()
        .take(MAX_HEADLINES)
        .collect()
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn css_rule(css: &str, min_chars: usize) -> Rule {
        Rule {
            query: Query::Css(css.to_string()),
            min_chars,
        }
    }

    #[test]
    fn test_merge_all_runs_every_rule_in_order() {
        let html = r#"
            <h2>Major story breaks overnight</h2>
            <h3>Second story from the fallback rule</h3>
            <h2>Another major story</h2>
        "#;
        let document = Document::parse(DocumentKind::Html, html).unwrap();
        let candidates = run_chain(
            &document,
            &[css_rule("h2", 1), css_rule("h3", 1)],
            MergePolicy::MergeAll,
        );

        assert_eq!(
            candidates,
            vec![
                "Major story breaks overnight",
                "Another major story",
                "Second story from the fallback rule",
            ]
        );
    }

    #[test]
    fn test_merge_drops_text_already_captured_by_earlier_rule() {
        let html = r#"
            <h2>Shared headline text here</h2>
            <h3>Shared headline text here</h3>
            <h3>Unique fallback headline</h3>
        "#;
        let document = Document::parse(DocumentKind::Html, html).unwrap();
        let candidates = run_chain(
            &document,
            &[css_rule("h2", 1), css_rule("h3", 1)],
            MergePolicy::MergeAll,
        );

        assert_eq!(candidates, vec!["Shared headline text here", "Unique fallback headline"]);
    }

    #[test]
    fn test_fallback_skipped_once_threshold_met() {
        let html = r#"
            <h2>First primary headline</h2>
            <h2>Second primary headline</h2>
            <h3>Fallback that must not appear</h3>
        "#;
        let document = Document::parse(DocumentKind::Html, html).unwrap();
        let candidates = run_chain(
            &document,
            &[css_rule("h2", 1), css_rule("h3", 1)],
            MergePolicy::PrimaryThenFallback(2),
        );

        assert_eq!(candidates, vec!["First primary headline", "Second primary headline"]);
    }

    #[test]
    fn test_fallback_appends_when_primary_comes_up_short() {
        let html = r#"
            <h2>Lone primary headline</h2>
            <h3>Fallback headline one</h3>
            <h3>Fallback headline two</h3>
        "#;
        let document = Document::parse(DocumentKind::Html, html).unwrap();
        let candidates = run_chain(
            &document,
            &[css_rule("h2", 1), css_rule("h3", 1)],
            MergePolicy::PrimaryThenFallback(3),
        );

        assert_eq!(
            candidates,
            vec!["Lone primary headline", "Fallback headline one", "Fallback headline two"]
        );
    }

    #[test]
    fn test_length_filter_keeps_document_order() {
        // Three items meet the rule minimum, two fall below it.
        let html = r#"
            <h3>The first genuine headline of the day</h3>
            <h3>Menu</h3>
            <h3>Another long enough headline survives</h3>
            <h3>Sports</h3>
            <h3>A third qualifying headline appears</h3>
        "#;
        let document = Document::parse(DocumentKind::Html, html).unwrap();
        let candidates = run_chain(&document, &[css_rule("h3", 20)], MergePolicy::MergeAll);

        assert_eq!(
            candidates,
            vec![
                "The first genuine headline of the day",
                "Another long enough headline survives",
                "A third qualifying headline appears",
            ]
        );
    }

    #[test]
    fn test_nested_markup_text_is_collapsed() {
        let html = "<h2>Split   across\n  <span>nested</span> tags</h2>";
        let document = Document::parse(DocumentKind::Html, html).unwrap();
        let candidates = run_chain(&document, &[css_rule("h2", 1)], MergePolicy::MergeAll);

        assert_eq!(candidates, vec!["Split across nested tags"]);
    }

    #[test]
    fn test_json_query_walks_pointer_paths() {
        let body = r#"{
            "data": {
                "children": [
                    {"data": {"title": "Breaking story from the feed"}},
                    {"data": {"title": "short"}},
                    {"data": {"title": "Second qualifying feed story"}},
                    {"data": {"score": 42}}
                ]
            }
        }"#;
        let document = Document::parse(DocumentKind::Json, body).unwrap();
        let rule = Rule {
            query: Query::Json {
                items: "/data/children".to_string(),
                text: "/data/title".to_string(),
            },
            min_chars: 10,
        };
        let candidates = run_chain(&document, &[rule], MergePolicy::MergeAll);

        assert_eq!(candidates, vec!["Breaking story from the feed", "Second qualifying feed story"]);
    }

    #[test]
    fn test_malformed_json_is_a_parse_error() {
        let result = Document::parse(DocumentKind::Json, "{\"data\": [");
        assert!(matches!(result, Err(ScrapeError::Parse(_))));
    }

    #[test]
    fn test_mismatched_query_kind_yields_nothing() {
        let document = Document::parse(DocumentKind::Html, "<h2>A headline</h2>").unwrap();
        let rule = Rule {
            query: Query::Json {
                items: "/data".to_string(),
                text: "/title".to_string(),
            },
            min_chars: 1,
        };
        assert!(run_chain(&document, &[rule], MergePolicy::MergeAll).is_empty());
    }

    #[test]
    fn test_normalize_trims_and_drops_empties() {
        let candidates = vec![
            "  padded headline  ".to_string(),
            "   ".to_string(),
            "plain headline".to_string(),
            String::new(),
        ];
        assert_eq!(normalize(candidates), vec!["padded headline", "plain headline"]);
    }

    #[test]
    fn test_normalize_dedups_after_trimming() {
        let candidates = vec![
            "same headline".to_string(),
            "  same headline ".to_string(),
            "different headline".to_string(),
        ];
        assert_eq!(normalize(candidates), vec!["same headline", "different headline"]);
    }

    #[test]
    fn test_normalize_caps_at_fifteen_preserving_order() {
        let candidates: Vec<String> = (0..40).map(|i| format!("headline number {i}")).collect();
        let normalized = normalize(candidates);

        assert_eq!(normalized.len(), MAX_HEADLINES);
        assert_eq!(normalized[0], "headline number 0");
        assert_eq!(normalized[14], "headline number 14");
    }
}
