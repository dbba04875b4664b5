//! HTTP handler for forecast feedback

use axum::{extract::State, Json};

use shared::models::FeedbackAck;

use crate::error::AppResult;
use crate::services::FeedbackService;
use crate::AppState;

/// Submit feedback on a past forecast
pub async fn submit_feedback(
    State(state): State<AppState>,
    body: String,
) -> AppResult<Json<FeedbackAck>> {
    let service = FeedbackService::new(state.gateway.clone());
    let ack = service.submit(&body).await?;
    Ok(Json(ack))
}
