//! Agent booking service

use std::sync::Arc;

use shared::models::BookingConfirmation;

use crate::error::AppResult;
use crate::services::gateway::ActionGateway;
use crate::services::parse_object;

const SUCCESS_MESSAGE: &str = "Agent booked successfully";
const FAILURE_MESSAGE: &str = "Failed to book agent";
const REFERENCE_PREFIX: &str = "BOOK";

/// Accepts booking submissions and echoes a confirmation
pub struct BookingService {
    gateway: Arc<dyn ActionGateway>,
}

impl BookingService {
    pub fn new(gateway: Arc<dyn ActionGateway>) -> Self {
        Self { gateway }
    }

    /// Record a booking submission and synthesize a confirmation.
    ///
    /// The payload is logged only; nothing is stored.
    pub async fn book(&self, body: &str) -> AppResult<BookingConfirmation> {
        let payload = parse_object(body, FAILURE_MESSAGE)?;
        tracing::info!(payload = %payload, "received booking");

        self.gateway.simulate_latency().await;

        Ok(BookingConfirmation {
            success: true,
            message: SUCCESS_MESSAGE.to_string(),
            booking_id: Some(self.gateway.next_reference(REFERENCE_PREFIX)),
        })
    }
}
