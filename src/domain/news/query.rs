//! Canonical query model
//!
//! Every inbound route shape reduces to a [`HeadlineQuery`]. Exactly one of
//! the two modes is active per request; the modes use disjoint cache-key
//! namespaces so a search term can never alias a country/category pair.

use crate::domain::cache::{headlines_key, search_key};

/// Defaults applied when the base route omits country or category
#[derive(Debug, Clone)]
pub struct QueryDefaults {
    pub country: String,
    pub category: String,
}

impl Default for QueryDefaults {
    fn default() -> Self {
        Self {
            country: "in".to_string(),
            category: "business".to_string(),
        }
    }
}

/// A canonical, route-independent news query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadlineQuery {
    /// Country/category mode (route shapes `/`, `/{country}`,
    /// `/{country}/{category}`)
    TopHeadlines {
        country: String,
        category: String,
        page: Option<String>,
    },
    /// Free-text mode (route shape `/search/{term}`)
    Search { term: String, page: Option<String> },
}

impl HeadlineQuery {
    pub fn top_headlines(
        country: impl Into<String>,
        category: impl Into<String>,
        page: Option<String>,
    ) -> Self {
        Self::TopHeadlines {
            country: country.into(),
            category: category.into(),
            page,
        }
    }

    pub fn search(term: impl Into<String>, page: Option<String>) -> Self {
        Self::Search {
            term: term.into(),
            page,
        }
    }

    /// The pagination cursor, if the client requested a continuation page
    pub fn page(&self) -> Option<&str> {
        match self {
            Self::TopHeadlines { page, .. } | Self::Search { page, .. } => page.as_deref(),
        }
    }

    /// First-page queries (no cursor) are the only cacheable ones
    pub fn is_first_page(&self) -> bool {
        self.page().is_none()
    }

    /// Derives the cache key from the query's identity fields. The cursor
    /// never participates, so the cached entry always holds the first page.
    pub fn cache_key(&self) -> String {
        match self {
            Self::TopHeadlines {
                country, category, ..
            } => headlines_key(country, category),
            Self::Search { term, .. } => search_key(term),
        }
    }

    /// Builds the parameter set forwarded to the upstream provider. The
    /// provider API key is attached by the upstream client, never here.
    pub fn to_upstream_request(&self) -> UpstreamRequest {
        match self {
            Self::TopHeadlines {
                country,
                category,
                page,
            } => UpstreamRequest {
                country: Some(country.clone()),
                category: Some(category.clone()),
                q_in_title: None,
                page: page.clone(),
            },
            Self::Search { term, page } => UpstreamRequest {
                country: None,
                category: None,
                q_in_title: Some(term.clone()),
                page: page.clone(),
            },
        }
    }
}

/// Parameters for a single upstream provider call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpstreamRequest {
    pub country: Option<String>,
    pub category: Option<String>,
    pub q_in_title: Option<String>,
    pub page: Option<String>,
}
