//! HTTP handler for the forecast endpoint

use axum::{extract::State, Json};

use shared::models::ForecastRecord;

use crate::AppState;

/// Return the weekly weather/irrigation outlook.
///
/// Never fails at this mock level. A production provider must define timeout
/// and upstream-failure behavior behind the same contract.
pub async fn get_forecast(State(state): State<AppState>) -> Json<ForecastRecord> {
    Json(state.forecast.weekly_outlook().await)
}
