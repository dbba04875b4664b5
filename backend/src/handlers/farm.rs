//! HTTP handler for farm setup

use axum::{extract::State, Json};

use shared::models::FarmSetupConfirmation;

use crate::error::AppResult;
use crate::services::FarmService;
use crate::AppState;

/// Complete the farm profile setup
pub async fn complete_farm_setup(
    State(state): State<AppState>,
    body: String,
) -> AppResult<Json<FarmSetupConfirmation>> {
    let service = FarmService::new(state.gateway.clone());
    let confirmation = service.setup(&body).await?;
    Ok(Json(confirmation))
}
