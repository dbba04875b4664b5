//! Farm setup service

use std::sync::Arc;

use shared::models::FarmSetupConfirmation;

use crate::error::AppResult;
use crate::services::gateway::ActionGateway;
use crate::services::parse_object;

const SUCCESS_MESSAGE: &str = "Farm setup completed successfully";
const FAILURE_MESSAGE: &str = "Failed to complete farm setup";
const REFERENCE_PREFIX: &str = "FARM";

/// Accepts farm profile submissions and echoes a confirmation
pub struct FarmService {
    gateway: Arc<dyn ActionGateway>,
}

impl FarmService {
    pub fn new(gateway: Arc<dyn ActionGateway>) -> Self {
        Self { gateway }
    }

    /// Record a farm setup submission and synthesize a confirmation.
    ///
    /// The payload is logged only; nothing is stored.
    pub async fn setup(&self, body: &str) -> AppResult<FarmSetupConfirmation> {
        let payload = parse_object(body, FAILURE_MESSAGE)?;
        tracing::info!(payload = %payload, "received farm setup");

        self.gateway.simulate_latency().await;

        Ok(FarmSetupConfirmation {
            success: true,
            message: SUCCESS_MESSAGE.to_string(),
            farm_id: Some(self.gateway.next_reference(REFERENCE_PREFIX)),
        })
    }
}
