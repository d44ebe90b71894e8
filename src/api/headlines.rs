//! Headline endpoint handlers
//!
//! Each handler classifies its route shape into a canonical
//! [`HeadlineQuery`] and delegates to the cache-backed service. No value
//! validation happens here; invalid countries or categories are forwarded
//! upstream and whatever upstream answers is surfaced per the error policy.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{
    ApiError, CountryParams, HeadlinesResponse, PageParams, TopHeadlinesParams,
};
use crate::domain::{DomainError, HeadlineQuery};

/// Fixed 500 messages, one per route shape
const ERR_TOP_HEADLINES: &str = "Error fetching top headlines.";
const ERR_SEARCH: &str = "Error searching news.";
const ERR_COUNTRY: &str = "Error fetching country headlines.";
const ERR_COUNTRY_CATEGORY: &str = "Error fetching category headlines.";

/// GET /
pub async fn top_headlines(
    State(state): State<AppState>,
    Query(params): Query<TopHeadlinesParams>,
) -> Result<Json<HeadlinesResponse>, ApiError> {
    let country = params
        .country
        .unwrap_or_else(|| state.defaults.country.clone());
    let category = params
        .category
        .unwrap_or_else(|| state.defaults.category.clone());

    debug!(country = %country, category = %category, "Top headlines request");

    let query = HeadlineQuery::top_headlines(country, category, params.next_page);

    fetch(&state, &query, ERR_TOP_HEADLINES).await
}

/// GET /search/{term}
pub async fn search_news(
    State(state): State<AppState>,
    Path(term): Path<String>,
    Query(params): Query<PageParams>,
) -> Result<Json<HeadlinesResponse>, ApiError> {
    debug!(term = %term, "Search request");

    let query = HeadlineQuery::search(term, params.next_page);

    fetch(&state, &query, ERR_SEARCH).await
}

/// GET /{country}
pub async fn country_headlines(
    State(state): State<AppState>,
    Path(country): Path<String>,
    Query(params): Query<CountryParams>,
) -> Result<Json<HeadlinesResponse>, ApiError> {
    let category = params
        .category
        .unwrap_or_else(|| state.defaults.category.clone());

    debug!(country = %country, category = %category, "Country headlines request");

    let query = HeadlineQuery::top_headlines(country, category, params.next_page);

    fetch(&state, &query, ERR_COUNTRY).await
}

/// GET /{country}/{category}
pub async fn country_category_headlines(
    State(state): State<AppState>,
    Path((country, category)): Path<(String, String)>,
    Query(params): Query<PageParams>,
) -> Result<Json<HeadlinesResponse>, ApiError> {
    debug!(country = %country, category = %category, "Country/category headlines request");

    let query = HeadlineQuery::top_headlines(country, category, params.next_page);

    fetch(&state, &query, ERR_COUNTRY_CATEGORY).await
}

async fn fetch(
    state: &AppState,
    query: &HeadlineQuery,
    upstream_message: &str,
) -> Result<Json<HeadlinesResponse>, ApiError> {
    let page = state
        .headline_service
        .fetch(query)
        .await
        .map_err(|e| match e {
            DomainError::Upstream { .. } => ApiError::internal(upstream_message),
            other => ApiError::from(other),
        })?;

    Ok(Json(page.into()))
}
