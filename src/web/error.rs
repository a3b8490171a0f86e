//! API error responses.

use crate::lookup::LookupError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;
use serde_json::json;
use tracing::error;

/// Machine-readable error codes surfaced in response bodies.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiErrorCode {
    InvalidActorName,
    ActorNotFound,
    UpstreamFailed,
}

impl ApiErrorCode {
    fn status(self) -> StatusCode {
        match self {
            ApiErrorCode::InvalidActorName => StatusCode::BAD_REQUEST,
            ApiErrorCode::ActorNotFound => StatusCode::NOT_FOUND,
            ApiErrorCode::UpstreamFailed => StatusCode::BAD_GATEWAY,
        }
    }
}

#[derive(Debug)]
pub struct ApiError {
    code: ApiErrorCode,
    message: String,
}

impl ApiError {
    pub fn new(code: ApiErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn invalid_actor_name() -> Self {
        Self::new(
            ApiErrorCode::InvalidActorName,
            "Invalid actor name. Must be 1-100 characters, alphanumeric with \
             spaces, hyphens, apostrophes, and periods only.",
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.code.status();
        let body = Json(json!({
            "error": self.message,
            "code": self.code,
        }));
        (status, body).into_response()
    }
}

impl From<LookupError> for ApiError {
    fn from(err: LookupError) -> Self {
        match err {
            LookupError::NotFound(name) => ApiError::new(
                ApiErrorCode::ActorNotFound,
                format!("No actor found matching '{name}'"),
            ),
            LookupError::Upstream(source) => {
                error!(error = ?source, "TVMaze lookup failed");
                ApiError::new(ApiErrorCode::UpstreamFailed, "TVMaze is unavailable")
            }
        }
    }
}
