//! HTTP handler for agent booking

use axum::{extract::State, Json};

use shared::models::BookingConfirmation;

use crate::error::AppResult;
use crate::services::BookingService;
use crate::AppState;

/// Book a consultation with an advisory agent.
///
/// The raw body is taken as a string so a malformed payload maps to the
/// endpoint's fixed 500 diagnostic instead of an extractor rejection.
pub async fn book_agent(
    State(state): State<AppState>,
    body: String,
) -> AppResult<Json<BookingConfirmation>> {
    let service = BookingService::new(state.gateway.clone());
    let confirmation = service.book(&body).await?;
    Ok(Json(confirmation))
}
