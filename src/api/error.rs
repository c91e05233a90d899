//! HTTP mapping of catalog failures
//!
//! Each endpoint keeps the error body shape its clients already parse, so the
//! variants are per endpoint rather than per cause.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::domain::UpstreamError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Metadata lookup for the detail view failed
    #[error("Metadata fetch failed: {0}")]
    Metadata(#[source] UpstreamError),
    /// Upstream search behind `/api/search` failed
    #[error("Search upstream unavailable: {0}")]
    Search(#[source] UpstreamError),
    /// Upstream search behind `/api/popular` failed
    #[error("Search failed: {0}")]
    Popular(#[source] UpstreamError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "Upstream request failed");

        let body = match &self {
            ApiError::Metadata(_) => json!({ "error": "Metadata fetch failed" }),
            ApiError::Search(_) => json!({
                "total": 0,
                "docs": [],
                "error": "upstream_unavailable"
            }),
            ApiError::Popular(_) => json!({ "error": "Search failed" }),
        };

        (StatusCode::BAD_GATEWAY, Json(body)).into_response()
    }
}

/// Body for a panic anywhere in the request path; never carries detail
pub fn internal_error(_panic: Box<dyn std::any::Any + Send + 'static>) -> Response {
    tracing::error!("Request handler panicked");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "internal_error" })),
    )
        .into_response()
}

/// Cache-Control value for a response fresh for `seconds`
pub fn cache_for(seconds: u32) -> String {
    format!("public, max-age={}", seconds)
}
