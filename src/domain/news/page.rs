//! Result page model

use serde::{Deserialize, Serialize};

/// An upstream-provided article record. Passed through unmodified; the
/// gateway does not validate or project its fields.
pub type Article = serde_json::Value;

/// One page of results as returned by the upstream provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadlinePage {
    pub results: Vec<Article>,
    pub next_cursor: Option<String>,
}

impl HeadlinePage {
    pub fn new(results: Vec<Article>, next_cursor: Option<String>) -> Self {
        Self {
            results,
            next_cursor,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
