//! Business logic services for the SkyHarvest backend

pub mod booking;
pub mod farm;
pub mod feedback;
pub mod forecast;
pub mod gateway;

pub use booking::BookingService;
pub use farm::FarmService;
pub use feedback::FeedbackService;
pub use forecast::ForecastService;
pub use gateway::{ActionGateway, MockActionGateway};

use crate::error::{AppError, AppResult};

/// Parse a request body as a JSON object.
///
/// The mock endpoints perform no field-level validation: any JSON object is
/// accepted. Anything else maps to the endpoint's fixed diagnostic.
pub(crate) fn parse_object(body: &str, diagnostic: &'static str) -> AppResult<serde_json::Value> {
    let payload: serde_json::Value = serde_json::from_str(body).map_err(|_| {
        AppError::MalformedPayload {
            message: diagnostic,
        }
    })?;
    if !payload.is_object() {
        return Err(AppError::MalformedPayload {
            message: diagnostic,
        });
    }
    Ok(payload)
}
