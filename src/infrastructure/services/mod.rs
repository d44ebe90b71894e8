//! Service layer - cache-backed fetching

mod headline_service;

pub use headline_service::{CachedPage, HeadlineCacheConfig, HeadlineService};
