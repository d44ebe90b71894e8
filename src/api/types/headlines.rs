//! Headline request/response types

use serde::{Deserialize, Serialize};

use crate::domain::{Article, HeadlinePage};

/// Query parameters accepted by the base route (`/`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TopHeadlinesParams {
    pub country: Option<String>,
    pub category: Option<String>,
    #[serde(rename = "nextPage")]
    pub next_page: Option<String>,
}

/// Query parameters accepted by the country route (`/{country}`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CountryParams {
    pub category: Option<String>,
    #[serde(rename = "nextPage")]
    pub next_page: Option<String>,
}

/// Query parameters carrying only a pagination cursor
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageParams {
    #[serde(rename = "nextPage")]
    pub next_page: Option<String>,
}

/// Success body: `{"results": [...], "nextCursor": <string|null>}`
///
/// `nextCursor` is always serialized, `null` when upstream supplies no
/// continuation cursor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeadlinesResponse {
    pub results: Vec<Article>,
    #[serde(rename = "nextCursor")]
    pub next_cursor: Option<String>,
}

impl From<HeadlinePage> for HeadlinesResponse {
    fn from(page: HeadlinePage) -> Self {
        Self {
            results: page.results,
            next_cursor: page.next_cursor,
        }
    }
}
