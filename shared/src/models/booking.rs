//! Advisory agent booking models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Request to book a consultation with an advisory agent
///
/// Ephemeral: exists only for the duration of one submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub agent_id: String,
    pub agent_name: String,
    /// Requested consultation date, ISO-8601 on the wire
    pub date: DateTime<Utc>,
    pub region: String,
}

/// Server acknowledgment for a booking submission
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingConfirmation {
    pub success: bool,
    pub message: String,
    /// Mock reference of the form `BOOK-<n>`; no uniqueness guarantee
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_id: Option<String>,
}

/// An advisory agent available for consultations
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentProfile {
    pub id: String,
    pub name: String,
    pub region: String,
    /// Weekday availability label, e.g. "Mon-Fri"
    pub availability: String,
    pub specialties: Vec<String>,
    pub rating: Decimal,
}

impl AgentProfile {
    fn new(id: &str, name: &str, region: &str, availability: &str, specialties: &[&str], rating: Decimal) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            region: region.to_string(),
            availability: availability.to_string(),
            specialties: specialties.iter().map(|s| s.to_string()).collect(),
            rating,
        }
    }

    /// The advisory agents currently offered for booking
    pub fn roster() -> Vec<AgentProfile> {
        vec![
            AgentProfile::new(
                "john",
                "John Smith",
                "Northern Region",
                "Mon-Fri",
                &["Cloud Seeding", "Weather Monitoring"],
                Decimal::new(48, 1),
            ),
            AgentProfile::new(
                "sarah",
                "Sarah Johnson",
                "Southern Region",
                "Wed-Sun",
                &["Irrigation Systems", "Soil Analysis"],
                Decimal::new(49, 1),
            ),
            AgentProfile::new(
                "mike",
                "Mike Wilson",
                "Eastern Region",
                "Tue-Sat",
                &["Crop Management", "Pest Control"],
                Decimal::new(47, 1),
            ),
        ]
    }
}
