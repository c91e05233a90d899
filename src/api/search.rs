use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;

use super::error::{cache_for, ApiError};
use crate::infrastructure::AppState;
use crate::services::catalog_service::{DEFAULT_LIMIT, DEFAULT_PAGE};

pub const SEARCH_MAX_AGE: u32 = 60;

/// Raw query string. Numbers are parsed by hand so that junk values fall
/// back to defaults instead of rejecting the request.
#[derive(Debug, Default, Deserialize, Clone)]
pub struct SearchParams {
    pub q: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
    /// The web front-end sends `rows`
    pub rows: Option<String>,
}

impl SearchParams {
    pub fn page(&self) -> i64 {
        parse_number(self.page.as_deref()).unwrap_or(DEFAULT_PAGE)
    }

    pub fn limit(&self) -> i64 {
        parse_number(self.limit.as_deref())
            .or_else(|| parse_number(self.rows.as_deref()))
            .unwrap_or(DEFAULT_LIMIT)
    }
}

fn parse_number(raw: Option<&str>) -> Option<i64> {
    let value: f64 = raw?.trim().parse().ok()?;
    if value.is_finite() {
        Some(value.trunc() as i64)
    } else {
        None
    }
}

#[utoipa::path(
    get,
    path = "/api/search",
    params(
        ("q" = Option<String>, Query, description = "Search query; blank returns no results"),
        ("page" = Option<i64>, Query, description = "1-based page, default 1"),
        ("limit" = Option<i64>, Query, description = "Rows per page, clamped to 1..=50, default 10"),
        ("rows" = Option<i64>, Query, description = "Alias of `limit`, used when `limit` is absent")
    ),
    responses(
        (status = 200, description = "Matching books with download formats"),
        (status = 502, description = "Archive search unavailable"),
        (status = 500, description = "Internal error")
    )
)]
pub async fn search_books(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<impl IntoResponse, ApiError> {
    let query = params.q.clone().unwrap_or_default();
    let page = state
        .catalog
        .search(&query, params.page(), params.limit())
        .await
        .map_err(ApiError::Search)?;

    Ok((
        [(header::CACHE_CONTROL, cache_for(SEARCH_MAX_AGE))],
        Json(page),
    ))
}

/// Panic body for the search route, shaped like an empty page
pub fn internal_error(_panic: Box<dyn std::any::Any + Send + 'static>) -> Response {
    tracing::error!("Search handler panicked");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "total": 0, "docs": [], "error": "internal_error" })),
    )
        .into_response()
}
