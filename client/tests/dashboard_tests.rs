//! Dashboard consumer integration tests
//!
//! Covers the loading lifecycle: loading before the fetch resolves, loaded
//! tables after, and the explicit failed state with its retry affordance.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use shared::models::{
    BookingConfirmation, BookingRequest, FarmSetupConfirmation, FarmSetupRequest, FeedbackAck,
    FeedbackSubmission, ForecastRecord, IrrigationSlot, RainDay,
};
use skyharvest_client::{ClientError, Dashboard, DashboardState, FarmApi};

fn sample_forecast() -> ForecastRecord {
    ForecastRecord {
        best_seeding_time: "April 15, 2024".to_string(),
        confidence_percent: 85,
        rain_forecast: vec![
            RainDay::new("Apr 12", 85, 12),
            RainDay::new("Apr 13", 60, 8),
        ],
        irrigation_schedule: vec![IrrigationSlot::new("Monday", "45 min", 8)],
    }
}

/// Forecast provider stub that fails the first `fail_times` fetches
struct FlakyForecastApi {
    fail_times: AtomicUsize,
}

impl FlakyForecastApi {
    fn new(fail_times: usize) -> Self {
        Self {
            fail_times: AtomicUsize::new(fail_times),
        }
    }
}

#[async_trait]
impl FarmApi for FlakyForecastApi {
    async fn fetch_forecast(&self) -> Result<ForecastRecord, ClientError> {
        let remaining = self.fail_times.load(Ordering::SeqCst);
        if remaining > 0 {
            self.fail_times.store(remaining - 1, Ordering::SeqCst);
            return Err(ClientError::Rejected {
                message: "forecast request failed with status 500".to_string(),
            });
        }
        Ok(sample_forecast())
    }

    async fn book_agent(
        &self,
        _request: &BookingRequest,
    ) -> Result<BookingConfirmation, ClientError> {
        unimplemented!("dashboard never books")
    }

    async fn submit_feedback(
        &self,
        _submission: &FeedbackSubmission,
    ) -> Result<FeedbackAck, ClientError> {
        unimplemented!("dashboard never submits feedback")
    }

    async fn complete_farm_setup(
        &self,
        _request: &FarmSetupRequest,
    ) -> Result<FarmSetupConfirmation, ClientError> {
        unimplemented!("dashboard never completes setup")
    }
}

#[test]
fn fresh_mount_shows_loading_indicator() {
    let dashboard = Dashboard::new();
    assert_eq!(*dashboard.state(), DashboardState::Loading);
    assert!(dashboard.forecast().is_none());
}

#[tokio::test]
async fn successful_fetch_populates_tables() {
    let api = FlakyForecastApi::new(0);
    let mut dashboard = Dashboard::new();

    dashboard.load(&api).await;

    let record = dashboard.forecast().expect("forecast should be loaded");
    assert_eq!(record.best_seeding_time, "April 15, 2024");
    assert_eq!(record.confidence_percent, 85);
    // Chronological order survives the fetch
    assert_eq!(record.rain_forecast[0].date, "Apr 12");
    assert_eq!(record.rain_forecast[1].date, "Apr 13");
}

#[tokio::test]
async fn failed_fetch_lands_in_failed_state() {
    let api = FlakyForecastApi::new(usize::MAX);
    let mut dashboard = Dashboard::new();

    dashboard.load(&api).await;

    match dashboard.state() {
        DashboardState::Failed { message } => {
            assert!(message.contains("status 500"));
        }
        other => panic!("expected failed state, got {:?}", other),
    }
    assert!(dashboard.forecast().is_none());
}

#[tokio::test]
async fn retry_recovers_from_transient_failure() {
    let api = FlakyForecastApi::new(1);
    let mut dashboard = Dashboard::new();

    dashboard.load(&api).await;
    assert!(matches!(dashboard.state(), DashboardState::Failed { .. }));

    dashboard.retry(&api).await;
    assert!(matches!(dashboard.state(), DashboardState::Loaded(_)));
}
