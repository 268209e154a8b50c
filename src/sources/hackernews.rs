//! Hacker News front page.
//!
//! The front page has kept the same `titleline` markup for years, so a
//! single rule suffices. The direct-child selector picks the story link
//! and skips the domain annotation nested alongside it.

use super::SourceSpec;
use crate::extract::{DocumentKind, MergePolicy, Query, Rule};

pub fn spec() -> SourceSpec {
    SourceSpec {
        id: "hackernews".to_string(),
        name: "Hacker News".to_string(),
        url: "https://news.ycombinator.com/".to_string(),
        headers: Vec::new(),
        kind: DocumentKind::Html,
        rules: vec![Rule {
            query: Query::Css("span.titleline > a".to_string()),
            min_chars: 1,
        }],
        merge: MergePolicy::MergeAll,
    }
}
