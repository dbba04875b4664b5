//! Forecast feedback models

use serde::{Deserialize, Serialize};

/// Yes/no answer to a feedback question
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum YesNo {
    Yes,
    No,
}

/// Feedback on a past forecast and irrigation plan
///
/// Ephemeral: discarded after acknowledgment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackSubmission {
    /// Did it rain as predicted?
    pub did_rain: YesNo,
    /// Was the irrigation plan followed?
    pub followed_plan: YesNo,
    /// Free-text observations, may be empty
    pub notes: String,
}

/// Server acknowledgment for a feedback submission
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackAck {
    pub success: bool,
    pub message: String,
}
