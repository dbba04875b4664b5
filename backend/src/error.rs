//! Error handling for the SkyHarvest backend
//!
//! Every endpoint error is converted at the boundary into the uniform
//! `{ success: false, message }` shape the dashboard expects.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Request body could not be parsed as a JSON object. Carries the fixed
    /// per-endpoint diagnostic returned to the caller.
    #[error("Malformed request payload: {message}")]
    MalformedPayload { message: &'static str },

    /// A real forecast or storage collaborator failed. Unreachable from the
    /// mock paths, but kept distinct so a production replacement does not
    /// collapse it into a generic failure.
    #[error("Upstream service unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::MalformedPayload { message } => {
                (StatusCode::INTERNAL_SERVER_ERROR, message.to_string())
            }
            AppError::UpstreamUnavailable(_) => (
                StatusCode::BAD_GATEWAY,
                "Upstream service is temporarily unavailable".to_string(),
            ),
            AppError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "An internal server error occurred".to_string(),
            ),
        };

        // Log the error for debugging
        tracing::error!("Error: {:?}", self);

        (
            status,
            Json(ErrorResponse {
                success: false,
                message,
            }),
        )
            .into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
