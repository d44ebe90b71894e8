//! Cache-backed headline fetching service

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::cache::{Cache, CacheExt};
use crate::domain::{DomainError, HeadlinePage, HeadlineQuery, NewsProvider};

/// Configuration for headline caching
#[derive(Debug, Clone)]
pub struct HeadlineCacheConfig {
    /// TTL for cached first-page results
    pub ttl: Duration,
    /// Whether caching is enabled
    pub enabled: bool,
}

impl Default for HeadlineCacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(3600), // 1 hour
            enabled: true,
        }
    }
}

impl HeadlineCacheConfig {
    /// Sets the TTL
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Disables caching
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}

/// A cached first-page result
///
/// Never mutated in place; a refresh overwrites the entry wholesale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CachedPage {
    pub results: Vec<crate::domain::Article>,
    pub next_cursor: Option<String>,
    pub cached_at: DateTime<Utc>,
}

impl CachedPage {
    fn new(page: &HeadlinePage) -> Self {
        Self {
            results: page.results.clone(),
            next_cursor: page.next_cursor.clone(),
            cached_at: Utc::now(),
        }
    }

    fn into_page(self) -> HeadlinePage {
        HeadlinePage::new(self.results, self.next_cursor)
    }
}

/// Service fronting the upstream provider with a TTL cache
///
/// First-page queries are served from the cache when a live entry exists;
/// everything else goes upstream. Pagination continuations never touch the
/// cache in either direction. Cache failures degrade to the upstream path
/// rather than failing the request.
#[derive(Debug)]
pub struct HeadlineService {
    cache: Arc<dyn Cache>,
    provider: Arc<dyn NewsProvider>,
    config: HeadlineCacheConfig,
}

impl HeadlineService {
    /// Creates a new service with default cache configuration
    pub fn new(cache: Arc<dyn Cache>, provider: Arc<dyn NewsProvider>) -> Self {
        Self::with_config(cache, provider, HeadlineCacheConfig::default())
    }

    /// Creates a new service with custom cache configuration
    pub fn with_config(
        cache: Arc<dyn Cache>,
        provider: Arc<dyn NewsProvider>,
        config: HeadlineCacheConfig,
    ) -> Self {
        Self {
            cache,
            provider,
            config,
        }
    }

    /// Fetches one page of results for the query
    ///
    /// At most one upstream call and at most two cache operations (read +
    /// optional write) per invocation.
    pub async fn fetch(&self, query: &HeadlineQuery) -> Result<HeadlinePage, DomainError> {
        let key = query.cache_key();
        let cacheable = self.config.enabled && query.is_first_page();

        if cacheable {
            match self.cache.get::<CachedPage>(&key).await {
                Ok(Some(entry)) => {
                    debug!(key = %key, "Cache hit");
                    return Ok(entry.into_page());
                }
                Ok(None) => {
                    debug!(key = %key, "Cache miss");
                }
                Err(e) => {
                    warn!(key = %key, error = %e, "Cache read failed, falling through to upstream");
                }
            }
        }

        let request = query.to_upstream_request();
        let page = self.provider.fetch_headlines(&request).await.map_err(|e| {
            tracing::error!(
                provider = self.provider.provider_name(),
                error = %e,
                "Upstream fetch failed"
            );
            e
        })?;

        // Zero results is an expected outcome, not a transport error
        if page.is_empty() {
            return Err(DomainError::not_found("No news articles found."));
        }

        if cacheable {
            let entry = CachedPage::new(&page);

            if let Err(e) = self.cache.set(&key, &entry, self.config.ttl).await {
                warn!(key = %key, error = %e, "Cache write failed, serving uncached response");
            }
        }

        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cache::MockCache;
    use crate::domain::news::MockNewsProvider;
    use serde_json::json;

    fn sample_page() -> HeadlinePage {
        HeadlinePage::new(vec![json!({"title": "A"}), json!({"title": "B"})], Some("p2".to_string()))
    }

    fn service(
        cache: Arc<MockCache>,
        provider: Arc<MockNewsProvider>,
    ) -> HeadlineService {
        HeadlineService::new(cache, provider)
    }

    #[tokio::test]
    async fn test_first_page_miss_fetches_and_caches() {
        let cache = Arc::new(MockCache::new());
        let provider = Arc::new(MockNewsProvider::new().with_page(sample_page()));
        let service = service(cache.clone(), provider.clone());

        let query = HeadlineQuery::top_headlines("in", "business", None);
        let page = service.fetch(&query).await.unwrap();

        assert_eq!(page, sample_page());
        assert_eq!(provider.call_count(), 1);
        assert_eq!(cache.len(), 1);
    }

    #[tokio::test]
    async fn test_second_identical_query_hits_cache() {
        let cache = Arc::new(MockCache::new());
        let provider = Arc::new(MockNewsProvider::new().with_page(sample_page()));
        let service = service(cache.clone(), provider.clone());

        let query = HeadlineQuery::top_headlines("in", "business", None);
        let first = service.fetch(&query).await.unwrap();
        let second = service.fetch(&query).await.unwrap();

        // Second call must not reach upstream and must return identical data
        assert_eq!(provider.call_count(), 1);
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_search_queries_are_cached_too() {
        let cache = Arc::new(MockCache::new());
        let provider = Arc::new(MockNewsProvider::new().with_page(sample_page()));
        let service = service(cache.clone(), provider.clone());

        let query = HeadlineQuery::search("election", None);
        service.fetch(&query).await.unwrap();
        service.fetch(&query).await.unwrap();

        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn test_cursor_bypasses_cache_entirely() {
        let cache = Arc::new(MockCache::new());
        let provider = Arc::new(MockNewsProvider::new().with_page(sample_page()));
        let service = service(cache.clone(), provider.clone());

        let query = HeadlineQuery::top_headlines("in", "business", Some("p2".to_string()));
        service.fetch(&query).await.unwrap();
        service.fetch(&query).await.unwrap();

        // Continuations never read or write the cache
        assert_eq!(provider.call_count(), 2);
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn test_cursor_ignores_existing_entry() {
        let first_page = HeadlineQuery::top_headlines("in", "business", None);
        let cache = Arc::new(MockCache::new().with_entry(
            &first_page.cache_key(),
            &CachedPage::new(&sample_page()),
            None,
        ));
        let provider = Arc::new(MockNewsProvider::new().with_page(sample_page()));
        let service = service(cache.clone(), provider.clone());

        let continuation = HeadlineQuery::top_headlines("in", "business", Some("p2".to_string()));
        service.fetch(&continuation).await.unwrap();

        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn test_empty_results_is_not_found() {
        let cache = Arc::new(MockCache::new());
        let provider = Arc::new(MockNewsProvider::new().with_page(HeadlinePage::new(vec![], None)));
        let service = service(cache.clone(), provider.clone());

        let query = HeadlineQuery::top_headlines("in", "business", None);
        let result = service.fetch(&query).await;

        match result {
            Err(DomainError::NotFound { message }) => {
                assert_eq!(message, "No news articles found.");
            }
            other => panic!("expected NotFound, got {:?}", other),
        }

        // Empty pages are never cached
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn test_upstream_error_propagates() {
        let cache = Arc::new(MockCache::new());
        let provider = Arc::new(MockNewsProvider::new().with_error("connection reset"));
        let service = service(cache.clone(), provider.clone());

        let query = HeadlineQuery::search("election", None);
        let result = service.fetch(&query).await;

        assert!(matches!(result, Err(DomainError::Upstream { .. })));
    }

    #[tokio::test]
    async fn test_cache_failure_degrades_to_upstream() {
        let cache = Arc::new(MockCache::new().with_error("redis unreachable"));
        let provider = Arc::new(MockNewsProvider::new().with_page(sample_page()));
        let service = service(cache.clone(), provider.clone());

        let query = HeadlineQuery::top_headlines("in", "business", None);
        let page = service.fetch(&query).await.unwrap();

        // Both the read and write failed, yet the request still succeeds
        assert_eq!(page, sample_page());
        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn test_disabled_cache_always_goes_upstream() {
        let cache = Arc::new(MockCache::new());
        let provider = Arc::new(MockNewsProvider::new().with_page(sample_page()));
        let service = HeadlineService::with_config(
            cache.clone(),
            provider.clone(),
            HeadlineCacheConfig::default().disabled(),
        );

        let query = HeadlineQuery::top_headlines("in", "business", None);
        service.fetch(&query).await.unwrap();
        service.fetch(&query).await.unwrap();

        assert_eq!(provider.call_count(), 2);
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn test_expired_entry_refetches_from_upstream() {
        use crate::infrastructure::cache::InMemoryCache;

        let cache = Arc::new(InMemoryCache::new());
        let provider = Arc::new(MockNewsProvider::new().with_page(sample_page()));
        let service = HeadlineService::with_config(
            cache,
            provider.clone(),
            HeadlineCacheConfig::default().with_ttl(Duration::from_millis(50)),
        );

        let query = HeadlineQuery::top_headlines("in", "business", None);
        service.fetch(&query).await.unwrap();

        tokio::time::sleep(Duration::from_millis(100)).await;
        service.fetch(&query).await.unwrap();

        assert_eq!(provider.call_count(), 2);
    }

    #[tokio::test]
    async fn test_refresh_overwrites_entry_wholesale() {
        let cache = Arc::new(MockCache::new());
        let provider = Arc::new(MockNewsProvider::new().with_page(sample_page()));
        let service = service(cache.clone(), provider.clone());

        let query = HeadlineQuery::top_headlines("in", "business", None);
        service.fetch(&query).await.unwrap();

        // Simulate expiry by dropping the entry, then fetch again
        cache.delete(&query.cache_key()).await.unwrap();
        service.fetch(&query).await.unwrap();

        assert_eq!(provider.call_count(), 2);
        assert_eq!(cache.len(), 1);
    }

    #[tokio::test]
    async fn test_upstream_request_carries_search_term_and_cursor() {
        let cache = Arc::new(MockCache::new());
        let provider = Arc::new(MockNewsProvider::new().with_page(sample_page()));
        let service = service(cache.clone(), provider.clone());

        let query = HeadlineQuery::search("election", Some("3".to_string()));
        service.fetch(&query).await.unwrap();

        let requests = provider.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].q_in_title.as_deref(), Some("election"));
        assert_eq!(requests[0].page.as_deref(), Some("3"));
        assert!(requests[0].country.is_none());
    }
}
