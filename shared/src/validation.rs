//! Validation utilities for the SkyHarvest farming dashboard
//!
//! Client-side form checks and forecast invariants. The mock endpoints accept
//! any JSON object, so everything here runs before a request leaves the form.

use chrono::{Months, NaiveDate};
use rust_decimal::Decimal;

use crate::models::ForecastRecord;

// ============================================================================
// Forecast Invariants
// ============================================================================

/// Validate a percentage value (0-100)
pub fn validate_percent(value: i32) -> Result<(), &'static str> {
    if !(0..=100).contains(&value) {
        return Err("Percentage must be between 0 and 100");
    }
    Ok(())
}

/// Validate a millimeter amount (non-negative)
pub fn validate_amount_mm(amount: Decimal) -> Result<(), &'static str> {
    if amount < Decimal::ZERO {
        return Err("Millimeter amount cannot be negative");
    }
    Ok(())
}

/// Validate every bounded field of a forecast record
pub fn validate_forecast(record: &ForecastRecord) -> Result<(), &'static str> {
    validate_percent(record.confidence_percent)?;
    for day in &record.rain_forecast {
        validate_percent(day.chance_percent)?;
        validate_amount_mm(day.amount_millimeters)?;
    }
    for slot in &record.irrigation_schedule {
        validate_amount_mm(slot.amount_millimeters)?;
    }
    Ok(())
}

// ============================================================================
// Booking Window
// ============================================================================

/// The selectable consultation window: today through one calendar month
/// ahead, both ends inclusive.
pub fn booking_window(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let end = today
        .checked_add_months(Months::new(1))
        .unwrap_or(NaiveDate::MAX);
    (today, end)
}

/// Whether a consultation date can be selected in the booking calendar
pub fn is_selectable_booking_date(date: NaiveDate, today: NaiveDate) -> bool {
    let (start, end) = booking_window(today);
    date >= start && date <= end
}

// ============================================================================
// Farm Setup
// ============================================================================

/// Validate the weekly water requirement field
pub fn validate_water_requirement(mm: Decimal) -> Result<(), &'static str> {
    if mm < Decimal::ZERO {
        return Err("Water requirement cannot be negative");
    }
    Ok(())
}

/// Validate a latitude value
pub fn validate_latitude(latitude: Decimal) -> Result<(), &'static str> {
    if latitude < Decimal::from(-90) || latitude > Decimal::from(90) {
        return Err("Latitude must be between -90 and 90");
    }
    Ok(())
}

/// Validate a longitude value
pub fn validate_longitude(longitude: Decimal) -> Result<(), &'static str> {
    if longitude < Decimal::from(-180) || longitude > Decimal::from(180) {
        return Err("Longitude must be between -180 and 180");
    }
    Ok(())
}
