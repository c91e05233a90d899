use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use open_islamic_library::{config, server};

#[tokio::main]
async fn main() {
    // Load .env before the filter reads RUST_LOG
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "open_islamic_library=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = config::Config::from_env();

    if let Err(e) = server::start_server(config).await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}
