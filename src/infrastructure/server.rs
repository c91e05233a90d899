// Server module - Router assembly and the HTTP listener

use axum::http::HeaderValue;
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api;
use crate::api_docs::ApiDoc;
use crate::infrastructure::config::Config;
use crate::infrastructure::AppState;

/// Build the full application router
pub fn build_router(state: AppState, config: &Config) -> Router {
    let api_router = api::api_router(state);

    let mut app = Router::new()
        .merge(SwaggerUi::new("/api/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/api", api_router);

    if let Some(dir) = &config.static_dir {
        tracing::info!("Serving static files from {:?}", dir);
        app = app.fallback_service(ServeDir::new(dir));
    }

    app.layer(cors_layer(&config.cors_allowed_origins))
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(api::error::internal_error))
}

// No configured origins means any origin.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.is_empty() {
        return cors.allow_origin(Any);
    }

    let mut allowed = Vec::new();
    for origin in origins {
        match origin.parse::<HeaderValue>() {
            Ok(v) => allowed.push(v),
            Err(e) => tracing::error!("Failed to parse CORS origin '{}': {}", origin, e),
        }
    }
    cors.allow_origin(allowed)
}

/// Bind and serve until Ctrl-C
pub async fn start_server(config: Config) -> Result<(), String> {
    let state = AppState::from_config(&config)
        .map_err(|e| format!("Failed to build archive client: {}", e))?;
    let app = build_router(state, &config);

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port))
        .await
        .map_err(|e| format!("Failed to bind to {}:{}: {}", config.host, config.port, e))?;
    let addr = listener
        .local_addr()
        .map_err(|e| format!("Failed to read bound address: {}", e))?;

    tracing::info!(
        archive = %config.archive_base_url,
        "Open Islamic Library listening on {}",
        addr
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| format!("HTTP server error: {}", e))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
