use axum::{Router, http::HeaderValue, http::Method, http::header, routing::get};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::headlines;
use super::health;
use super::state::AppState;

/// Create the full router with application state
///
/// Static routes (`/health`, `/live`, `/search/...`) take precedence over
/// the `/{country}` parameter routes.
pub fn create_router_with_state(state: AppState, cors_origins: &[String]) -> Router {
    Router::new()
        // Health endpoints (no state needed)
        .route("/health", get(health::health_check))
        .route("/live", get(health::live_check))
        // Headline routes, one per shape
        .route("/", get(headlines::top_headlines))
        .route("/search/{term}", get(headlines::search_news))
        .route("/{country}", get(headlines::country_headlines))
        .route(
            "/{country}/{category}",
            get(headlines::country_category_headlines),
        )
        // Add state and middleware
        .with_state(state)
        .layer(build_cors_layer(cors_origins))
        .layer(TraceLayer::new_for_http())
}

/// Builds the CORS layer from configured origins; an empty list allows any
/// origin.
fn build_cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    if origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    layer.allow_origin(AllowOrigin::list(origins))
}
