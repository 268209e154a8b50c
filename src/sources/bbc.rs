//! BBC News front page.
//!
//! BBC markup shifts between layouts, so three rules run together: the
//! stable `data-testid` headline cards, plus the `h3` headings and promo
//! links older layouts use. The length filter keeps section labels and
//! navigation text out of the card fallbacks.

use super::SourceSpec;
use crate::extract::{DocumentKind, MergePolicy, Query, Rule};

pub fn spec() -> SourceSpec {
    SourceSpec {
        id: "bbc".to_string(),
        name: "BBC News".to_string(),
        url: "https://www.bbc.com/news".to_string(),
        headers: Vec::new(),
        kind: DocumentKind::Html,
        rules: vec![
            Rule {
                query: Query::Css(r#"h2[data-testid="card-headline"]"#.to_string()),
                min_chars: 1,
            },
            Rule {
                query: Query::Css("h3".to_string()),
                min_chars: 20,
            },
            Rule {
                query: Query::Css("a.sc-2e6baa30-0".to_string()),
                min_chars: 20,
            },
        ],
        merge: MergePolicy::MergeAll,
    }
}
