//! Web API router construction and shared response utilities.

use axum::{
    Router,
    http::HeaderValue,
    response::{IntoResponse, Json, Response},
    routing::get,
};
use std::time::Duration;

use crate::state::AppState;
use crate::web::middleware::request_id::RequestIdLayer;
use crate::web::{shows, status};
use tower_http::{compression::CompressionLayer, timeout::TimeoutLayer};

/// Cache-Control presets for public endpoints.
pub mod cache {
    /// Show lookups — the service already memoizes for an hour, so edge and
    /// client caches may hold results for a fraction of that.
    pub const SHOWS: &str = "public, max-age=300, s-maxage=3600, stale-while-revalidate=300";
}

/// Wraps a JSON response with a `Cache-Control` header.
pub fn with_cache_control<T: serde::Serialize>(value: T, header: &'static str) -> Response {
    let mut response = Json(value).into_response();
    response.headers_mut().insert(
        axum::http::header::CACHE_CONTROL,
        HeaderValue::from_static(header),
    );
    response
}

/// Creates the web server router
pub fn create_router(app_state: AppState) -> Router {
    let router = Router::new()
        .route("/health", get(status::health))
        .route("/shows/{actor_name}", get(shows::get_shows))
        .with_state(app_state);

    router.layer((
        // Outermost: per-request ID span + severity-proportional response logging.
        RequestIdLayer,
        // Compress JSON responses (gzip/brotli/zstd).
        CompressionLayer::new()
            .zstd(true)
            .br(true)
            .gzip(true)
            .quality(tower_http::CompressionLevel::Fastest),
        TimeoutLayer::new(Duration::from_secs(30)),
    ))
}
