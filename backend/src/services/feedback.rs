//! Forecast feedback service

use std::sync::Arc;

use shared::models::FeedbackAck;

use crate::error::AppResult;
use crate::services::gateway::ActionGateway;
use crate::services::parse_object;

const SUCCESS_MESSAGE: &str = "Feedback submitted successfully";
const FAILURE_MESSAGE: &str = "Failed to submit feedback";

/// Accepts feedback submissions and echoes an acknowledgment
pub struct FeedbackService {
    gateway: Arc<dyn ActionGateway>,
}

impl FeedbackService {
    pub fn new(gateway: Arc<dyn ActionGateway>) -> Self {
        Self { gateway }
    }

    /// Record a feedback submission.
    ///
    /// The payload is logged only; nothing is stored and no identifier is
    /// issued.
    pub async fn submit(&self, body: &str) -> AppResult<FeedbackAck> {
        let payload = parse_object(body, FAILURE_MESSAGE)?;
        tracing::info!(payload = %payload, "received feedback");

        self.gateway.simulate_latency().await;

        Ok(FeedbackAck {
            success: true,
            message: SUCCESS_MESSAGE.to_string(),
        })
    }
}
