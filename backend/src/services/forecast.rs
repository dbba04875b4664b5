//! Forecast provider returning the weekly weather/irrigation outlook
//!
//! The outlook is a fixed record. A real implementation may plug in a weather
//! API or model without changing the consumer contract: no input, always
//! succeeds.

use std::time::Duration;

use shared::models::{ForecastRecord, IrrigationSlot, RainDay};

/// Produces the weekly forecast record
#[derive(Clone)]
pub struct ForecastService {
    delay: Duration,
}

impl ForecastService {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// A provider with no latency, for tests
    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }

    /// Produce the weekly outlook after the simulated processing latency
    pub async fn weekly_outlook(&self) -> ForecastRecord {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        ForecastRecord {
            best_seeding_time: "April 15, 2024".to_string(),
            confidence_percent: 85,
            rain_forecast: vec![
                RainDay::new("Apr 12", 85, 12),
                RainDay::new("Apr 13", 60, 8),
                RainDay::new("Apr 14", 30, 3),
                RainDay::new("Apr 15", 10, 0),
                RainDay::new("Apr 16", 5, 0),
                RainDay::new("Apr 17", 40, 5),
                RainDay::new("Apr 18", 70, 10),
            ],
            irrigation_schedule: vec![
                IrrigationSlot::new("Monday", "45 min", 8),
                IrrigationSlot::new("Wednesday", "30 min", 5),
                IrrigationSlot::new("Friday", "60 min", 10),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::validation::validate_forecast;

    #[tokio::test]
    async fn outlook_satisfies_invariants() {
        let record = ForecastService::instant().weekly_outlook().await;
        assert!(validate_forecast(&record).is_ok());
        assert_eq!(record.rain_forecast.len(), 7);
        assert_eq!(record.irrigation_schedule.len(), 3);
    }

    #[tokio::test]
    async fn outlook_is_stable_across_fetches() {
        let service = ForecastService::instant();
        assert_eq!(service.weekly_outlook().await, service.weekly_outlook().await);
    }
}
