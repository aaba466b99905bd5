// API Server Binary Entry Point
//
// Purpose: Start the Axum fit advisor API
// Usage: cargo run --bin api_server

use bike_fit_advisor::{create_router, AppState, ServerConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    // Default log level: info for our crate, warn for others
                    "bike_fit_advisor=info,tower_http=debug,axum=debug,warn".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting API server...");

    let config = ServerConfig::from_env()?;
    let addr = config.socket_addr();

    tracing::info!("Configuration:");
    tracing::info!("  BIND: {}", addr);
    tracing::info!("  CORS_ORIGINS: {}", config.cors_origins.join(", "));

    let app = create_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .await?;

    Ok(())
}
