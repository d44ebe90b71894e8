//! Application state for shared services

use std::sync::Arc;

use crate::domain::{DomainError, HeadlinePage, HeadlineQuery, QueryDefaults};
use crate::infrastructure::services::HeadlineService;

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub headline_service: Arc<dyn HeadlineServiceTrait>,
    pub defaults: QueryDefaults,
}

impl AppState {
    pub fn new(headline_service: Arc<dyn HeadlineServiceTrait>, defaults: QueryDefaults) -> Self {
        Self {
            headline_service,
            defaults,
        }
    }
}

/// Trait for headline fetching operations
#[async_trait::async_trait]
pub trait HeadlineServiceTrait: Send + Sync {
    async fn fetch(&self, query: &HeadlineQuery) -> Result<HeadlinePage, DomainError>;
}

#[async_trait::async_trait]
impl HeadlineServiceTrait for HeadlineService {
    async fn fetch(&self, query: &HeadlineQuery) -> Result<HeadlinePage, DomainError> {
        HeadlineService::fetch(self, query).await
    }
}
