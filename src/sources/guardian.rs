//! The Guardian international front page.
//!
//! The primary rule reads the headline span inside the card links. When a
//! redesign leaves it matching fewer than ten items, a plain `h3` fallback
//! tops the list up; both rules share the length filter that drops section
//! labels.

use super::SourceSpec;
use crate::extract::{DocumentKind, MergePolicy, Query, Rule};

pub fn spec() -> SourceSpec {
    SourceSpec {
        id: "guardian".to_string(),
        name: "The Guardian".to_string(),
        url: "https://www.theguardian.com/international".to_string(),
        headers: Vec::new(),
        kind: DocumentKind::Html,
        rules: vec![
            Rule {
                query: Query::Css("a.dcr-lv2v9o span".to_string()),
                min_chars: 15,
            },
            Rule {
                query: Query::Css("h3".to_string()),
                min_chars: 15,
            },
        ],
        merge: MergePolicy::PrimaryThenFallback(10),
    }
}
