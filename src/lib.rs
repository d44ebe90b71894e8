//! News Gateway API
//!
//! A caching reverse proxy for a news headlines provider:
//! - Four inbound route shapes reduced to one canonical query type
//! - First-page results cached with a fixed TTL (in-memory or Redis)
//! - Pagination continuations passed straight through to upstream

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;
use std::time::Duration;

use api::state::AppState;
use domain::QueryDefaults;
use infrastructure::cache::{CacheConfig, CacheFactory};
use infrastructure::news::{HttpClient, NewsDataProvider};
use infrastructure::services::{HeadlineCacheConfig, HeadlineService};
use tracing::info;

/// Create the application state with all services initialized
pub async fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let api_key = std::env::var("NEWS_API_KEY")
        .map_err(|_| anyhow::anyhow!("NEWS_API_KEY environment variable is required"))?;

    let cache_config = CacheConfig::from_env()?;
    info!("Cache backend: {}", cache_config.cache_type);

    let cache = CacheFactory::new().create(&cache_config).await?;

    let http_client = HttpClient::with_timeout(Duration::from_secs(config.upstream.timeout_secs))?;
    let provider = Arc::new(NewsDataProvider::with_base_url(
        http_client,
        api_key,
        config.upstream.base_url.clone(),
    ));

    let headline_service = Arc::new(HeadlineService::with_config(
        cache,
        provider,
        HeadlineCacheConfig::default().with_ttl(cache_config.default_ttl),
    ));

    let defaults = QueryDefaults {
        country: config.upstream.default_country.clone(),
        category: config.upstream.default_category.clone(),
    };

    Ok(AppState::new(headline_service, defaults))
}
