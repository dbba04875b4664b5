//! WebAssembly module for the SkyHarvest farming dashboard
//!
//! Provides client-side form checks for the browser:
//! - Booking calendar date-window validation
//! - Forecast payload validation
//! - Farm setup field validation

use chrono::NaiveDate;
use rust_decimal::Decimal;
use wasm_bindgen::prelude::*;

use shared::models::ForecastRecord;
use shared::validation::{
    booking_window, is_selectable_booking_date, validate_forecast, validate_latitude,
    validate_longitude, validate_percent, validate_water_requirement,
};

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    // Set up panic hook for better error messages in browser console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Whether a consultation date can be picked in the booking calendar.
/// Dates are `YYYY-MM-DD`; unparseable input is never selectable.
#[wasm_bindgen]
pub fn is_booking_date_selectable(date: &str, today: &str) -> bool {
    match (parse_date(date), parse_date(today)) {
        (Some(date), Some(today)) => is_selectable_booking_date(date, today),
        _ => false,
    }
}

/// Last selectable day of the booking window, as `YYYY-MM-DD`
#[wasm_bindgen]
pub fn booking_window_end(today: &str) -> Result<String, JsValue> {
    let today = parse_date(today).ok_or_else(|| JsValue::from_str("Invalid date"))?;
    let (_, end) = booking_window(today);
    Ok(end.format("%Y-%m-%d").to_string())
}

/// Validate a percentage field (0-100)
#[wasm_bindgen]
pub fn is_valid_percent(value: i32) -> bool {
    validate_percent(value).is_ok()
}

/// Validate a forecast payload before rendering it
#[wasm_bindgen]
pub fn validate_forecast_json(record_json: &str) -> Result<(), JsValue> {
    let record: ForecastRecord = serde_json::from_str(record_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid forecast JSON: {}", e)))?;
    validate_forecast(&record).map_err(JsValue::from_str)
}

/// Validate the farm coordinates fields
#[wasm_bindgen]
pub fn are_valid_coordinates(latitude: f64, longitude: f64) -> bool {
    let (Ok(latitude), Ok(longitude)) = (Decimal::try_from(latitude), Decimal::try_from(longitude))
    else {
        return false;
    };
    validate_latitude(latitude).is_ok() && validate_longitude(longitude).is_ok()
}

/// Validate the weekly water requirement field
#[wasm_bindgen]
pub fn is_valid_water_requirement(mm: f64) -> bool {
    match Decimal::try_from(mm) {
        Ok(mm) => validate_water_requirement(mm).is_ok(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_booking_date_window() {
        assert!(is_booking_date_selectable("2024-04-10", "2024-04-10"));
        assert!(is_booking_date_selectable("2024-05-10", "2024-04-10"));
        assert!(!is_booking_date_selectable("2024-05-11", "2024-04-10"));
        assert!(!is_booking_date_selectable("2024-04-09", "2024-04-10"));
        assert!(!is_booking_date_selectable("garbage", "2024-04-10"));
    }

    #[test]
    fn test_booking_window_end() {
        assert_eq!(booking_window_end("2024-04-10").unwrap(), "2024-05-10");
        assert!(booking_window_end("not a date").is_err());
    }

    #[test]
    fn test_percent_validation() {
        assert!(is_valid_percent(0));
        assert!(is_valid_percent(100));
        assert!(!is_valid_percent(-1));
        assert!(!is_valid_percent(101));
    }

    #[test]
    fn test_forecast_json_validation() {
        let valid = r#"{
            "bestSeedingTime": "April 15, 2024",
            "confidencePercent": 85,
            "rainForecast": [{"date": "Apr 12", "chancePercent": 85, "amountMillimeters": 12}],
            "irrigationSchedule": [{"day": "Monday", "durationLabel": "45 min", "amountMillimeters": 8}]
        }"#;
        assert!(validate_forecast_json(valid).is_ok());

        let out_of_range = valid.replace("\"confidencePercent\": 85", "\"confidencePercent\": 130");
        assert!(validate_forecast_json(&out_of_range).is_err());

        assert!(validate_forecast_json("not json").is_err());
    }

    #[test]
    fn test_coordinate_validation() {
        assert!(are_valid_coordinates(40.7128, -74.0060));
        assert!(!are_valid_coordinates(95.0, 0.0));
        assert!(!are_valid_coordinates(0.0, 190.0));
    }

    #[test]
    fn test_water_requirement_validation() {
        assert!(is_valid_water_requirement(25.0));
        assert!(is_valid_water_requirement(0.0));
        assert!(!is_valid_water_requirement(-1.0));
    }
}
