//! Route definitions for the SkyHarvest backend

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
///
/// No authentication is enforced at this mock layer; session handling belongs
/// to the external identity provider in front of the dashboard.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Forecast provider
        .route("/forecast", get(handlers::get_forecast))
        // Mock action endpoints
        .route("/book-agent", post(handlers::book_agent))
        .route("/farm-setup", post(handlers::complete_farm_setup))
        .route("/feedback", post(handlers::submit_feedback))
}
