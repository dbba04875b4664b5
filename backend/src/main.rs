//! SkyHarvest farming dashboard - backend server
//!
//! Serves the mock forecast and action endpoints consumed by the dashboard.

use std::net::SocketAddr;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use skyharvest_backend::{config::Config, create_app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "skyharvest_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    tracing::info!("Starting SkyHarvest server");
    tracing::info!("Environment: {}", config.environment);

    let port = config.server.port;
    let state = AppState::from_config(config);

    // Build application
    let app = create_app(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
