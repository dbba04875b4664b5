//! Dashboard forecast consumer
//!
//! Fetches the forecast once per mount and tracks the loading lifecycle. A
//! fetch error lands in an explicit `Failed` state with a retry affordance
//! instead of stalling on the loading indicator.

use shared::models::ForecastRecord;

use crate::api::FarmApi;

/// Lifecycle of the dashboard's forecast reference
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardState {
    /// Fetch in flight; render the loading indicator
    Loading,
    /// Forecast arrived; render the prediction card and tables
    Loaded(ForecastRecord),
    /// Fetch failed; render the message and the retry affordance
    Failed { message: String },
}

/// The dashboard consumer state machine
#[derive(Debug)]
pub struct Dashboard {
    state: DashboardState,
}

impl Dashboard {
    /// A fresh mount: loading, no forecast reference yet
    pub fn new() -> Self {
        Self {
            state: DashboardState::Loading,
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    /// The loaded forecast, if any
    pub fn forecast(&self) -> Option<&ForecastRecord> {
        match &self.state {
            DashboardState::Loaded(record) => Some(record),
            _ => None,
        }
    }

    /// Fetch the forecast. Runs once on mount; never re-fetches on a timer.
    pub async fn load(&mut self, api: &dyn FarmApi) {
        self.state = DashboardState::Loading;
        match api.fetch_forecast().await {
            Ok(record) => {
                self.state = DashboardState::Loaded(record);
            }
            Err(error) => {
                tracing::error!("Error fetching forecast data: {}", error);
                self.state = DashboardState::Failed {
                    message: error.to_string(),
                };
            }
        }
    }

    /// User-driven retry from the `Failed` state
    pub async fn retry(&mut self, api: &dyn FarmApi) {
        self.load(api).await;
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}
