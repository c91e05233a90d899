pub mod book;
pub mod error;
pub mod health;
pub mod popular;
pub mod search;

use axum::{routing::get, Router};
use tower_http::catch_panic::CatchPanicLayer;

use crate::infrastructure::AppState;

pub fn api_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Catalog
        .route("/book/:id", get(book::get_book))
        .route(
            "/search",
            get(search::search_books).layer(CatchPanicLayer::custom(search::internal_error)),
        )
        .route("/popular", get(popular::list_popular))
        .with_state(state)
}
