//! Weather and irrigation forecast models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A weather/irrigation outlook for one farm
///
/// Regenerated fresh on every fetch and never mutated after creation. Both
/// sequences are ordered: `rain_forecast` chronologically, and
/// `irrigation_schedule` in weekly-schedule order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ForecastRecord {
    /// Human-readable date label, e.g. "April 15, 2024"
    pub best_seeding_time: String,
    /// Prediction confidence, 0-100
    pub confidence_percent: i32,
    pub rain_forecast: Vec<RainDay>,
    pub irrigation_schedule: Vec<IrrigationSlot>,
}

/// Rain outlook for a single day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RainDay {
    /// Short date label, e.g. "Apr 12"
    pub date: String,
    /// Chance of rain, 0-100
    pub chance_percent: i32,
    /// Expected rainfall in millimeters
    pub amount_millimeters: Decimal,
}

/// One slot of the weekly irrigation schedule
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IrrigationSlot {
    /// Day-of-week label, e.g. "Monday"
    pub day: String,
    /// Human-readable duration, e.g. "45 min"
    pub duration_label: String,
    /// Water amount in millimeters
    pub amount_millimeters: Decimal,
}

impl RainDay {
    pub fn new(date: &str, chance_percent: i32, amount_millimeters: u32) -> Self {
        Self {
            date: date.to_string(),
            chance_percent,
            amount_millimeters: Decimal::from(amount_millimeters),
        }
    }
}

impl IrrigationSlot {
    pub fn new(day: &str, duration_label: &str, amount_millimeters: u32) -> Self {
        Self {
            day: day.to_string(),
            duration_label: duration_label.to_string(),
            amount_millimeters: Decimal::from(amount_millimeters),
        }
    }
}
