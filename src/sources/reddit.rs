//! Reddit r/news via the public listing API.
//!
//! The `.json` listing endpoint is friendlier to scrapers than the HTML
//! site, but Reddit still rejects anonymous browser user agents with 403,
//! so this source identifies itself with an explicit bot string. A 403
//! surfaces as the distinct blocked error rather than a generic status
//! failure.

use super::SourceSpec;
use crate::extract::{DocumentKind, MergePolicy, Query, Rule};

pub fn spec() -> SourceSpec {
    SourceSpec {
        id: "reddit".to_string(),
        name: "Reddit r/news".to_string(),
        url: "https://www.reddit.com/r/news.json".to_string(),
        headers: vec![(
            "User-Agent".to_string(),
            "rust:headline_scraper:v0.1.0 (by /u/newsbot)".to_string(),
        )],
        kind: DocumentKind::Json,
        rules: vec![Rule {
            query: Query::Json {
                items: "/data/children".to_string(),
                text: "/data/title".to_string(),
            },
            min_chars: 10,
        }],
        merge: MergePolicy::MergeAll,
    }
}
