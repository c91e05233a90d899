use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
    Json,
};

use super::error::{cache_for, ApiError};
use crate::infrastructure::AppState;

/// Item metadata barely changes; a day is fine
pub const BOOK_MAX_AGE: u32 = 86_400;

#[utoipa::path(
    get,
    path = "/api/book/{id}",
    params(("id" = String, Path, description = "Archive identifier")),
    responses(
        (status = 200, description = "Book detail with ranked download formats"),
        (status = 502, description = "Metadata fetch failed")
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let detail = state.catalog.book(&id).await.map_err(ApiError::Metadata)?;

    Ok((
        [(header::CACHE_CONTROL, cache_for(BOOK_MAX_AGE))],
        Json(detail),
    ))
}
