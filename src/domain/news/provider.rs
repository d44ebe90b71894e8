//! Upstream provider trait

use std::fmt::Debug;

use async_trait::async_trait;

use super::page::HeadlinePage;
use super::query::UpstreamRequest;
use crate::domain::DomainError;

/// Trait for the upstream news provider
///
/// Implementations perform one HTTP round trip per call. An empty upstream
/// result set is returned as an empty page, not an error; the caller decides
/// what an empty page means.
#[async_trait]
pub trait NewsProvider: Send + Sync + Debug {
    /// Fetches one page of articles for the given parameters
    async fn fetch_headlines(
        &self,
        request: &UpstreamRequest,
    ) -> Result<HeadlinePage, DomainError>;

    /// Provider name for logging
    fn provider_name(&self) -> &'static str;
}
