use crate::api;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::health::health_check,
        api::book::get_book,
        api::search::search_books,
        api::popular::list_popular,
    ),
    tags(
        (name = "open-islamic-library", description = "Open Islamic Library API")
    )
)]
pub struct ApiDoc;
