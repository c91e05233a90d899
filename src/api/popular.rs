use axum::{extract::State, http::header, response::IntoResponse, Json};
use serde_json::json;

use super::error::{cache_for, ApiError};
use crate::infrastructure::AppState;

pub const POPULAR_MAX_AGE: u32 = 3_600;

#[utoipa::path(
    get,
    path = "/api/popular",
    responses(
        (status = 200, description = "Most downloaded openly licensed Islamic texts"),
        (status = 502, description = "Archive search failed")
    )
)]
pub async fn list_popular(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let docs = state.catalog.popular().await.map_err(ApiError::Popular)?;

    Ok((
        [(header::CACHE_CONTROL, cache_for(POPULAR_MAX_AGE))],
        Json(json!({ "docs": docs })),
    ))
}
