//! SkyHarvest farming dashboard - backend library
//!
//! Mock server for the farming-assistance dashboard: a forecast provider and
//! three action endpoints (booking, feedback, farm setup) that log their
//! input, wait an artificial latency, and echo a canned success payload.

use std::{sync::Arc, time::Duration};

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod services;

pub use config::Config;

use services::{ActionGateway, ForecastService, MockActionGateway};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub gateway: Arc<dyn ActionGateway>,
    pub forecast: ForecastService,
}

impl AppState {
    /// Build state from configuration, wiring the stock mock gateway
    pub fn from_config(config: Config) -> Self {
        let gateway = MockActionGateway::new(Duration::from_millis(config.gateway.action_delay_ms));
        let forecast = ForecastService::new(Duration::from_millis(config.gateway.forecast_delay_ms));
        Self {
            config: Arc::new(config),
            gateway: Arc::new(gateway),
            forecast,
        }
    }
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .merge(routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "SkyHarvest Farming Dashboard API v1.0"
}
