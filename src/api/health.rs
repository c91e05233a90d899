use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::infrastructure::AppState;

#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service is up; reports the archive it proxies")
    )
)]
pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "archive": state.catalog.endpoints().base(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}
