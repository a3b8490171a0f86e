//! Health handler.

use axum::response::Json;
use serde_json::{Value, json};
use tracing::trace;

/// Health check endpoint for container orchestration. Deliberately does not
/// touch the lookup pipeline or TVMaze.
pub(super) async fn health() -> Json<Value> {
    trace!("health check requested");
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}
