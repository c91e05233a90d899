#![allow(dead_code)]

use axum::{
    body::Body,
    http::{HeaderMap, Request, StatusCode},
    Router,
};
use open_islamic_library::infrastructure::{server, AppState, Config};
use serde_json::Value;
use tower::util::ServiceExt; // for `oneshot`
use wiremock::MockServer;

// Helper to build the full app against a mock archive
pub fn app_for(mock_server: &MockServer, timeout_secs: u64) -> Router {
    let base = mock_server.uri();
    let config = Config::from_lookup(move |key| match key {
        "ARCHIVE_BASE_URL" => Some(base.clone()),
        "UPSTREAM_TIMEOUT_SECS" => Some(timeout_secs.to_string()),
        _ => None,
    });
    let state = AppState::from_config(&config).expect("Failed to build state");
    server::build_router(state, &config)
}

pub async fn get_json(app: Router, uri: &str) -> (StatusCode, HeaderMap, Value) {
    let req = Request::builder()
        .uri(uri)
        .method("GET")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(req).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, headers, body)
}

pub fn labels(formats: &Value) -> Vec<String> {
    formats
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["label"].as_str().unwrap().to_string())
        .collect()
}
