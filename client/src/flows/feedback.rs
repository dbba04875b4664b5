//! Forecast feedback flow
//!
//! Two required radio answers plus optional notes. Success shows a thank-you
//! for the display delay, then navigates back to the dashboard.

use std::time::Duration;

use shared::models::{FeedbackSubmission, YesNo};

use crate::api::FarmApi;
use crate::flows::{FlowState, Notice, SubmitResult};
use crate::session::Route;

const FAILURE_NOTICE: &str = "Failed to submit feedback. Please try again.";
const DISPLAY_DELAY: Duration = Duration::from_secs(2);

/// The feedback form
#[derive(Debug)]
pub struct FeedbackFlow {
    display_delay: Duration,
    state: FlowState,
    did_rain: Option<YesNo>,
    followed_plan: Option<YesNo>,
    notes: String,
}

impl FeedbackFlow {
    pub fn new() -> Self {
        Self {
            display_delay: DISPLAY_DELAY,
            state: FlowState::Editing,
            did_rain: None,
            followed_plan: None,
            notes: String::new(),
        }
    }

    /// Override the success-display delay (tests)
    pub fn with_display_delay(mut self, delay: Duration) -> Self {
        self.display_delay = delay;
        self
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    pub fn set_did_rain(&mut self, answer: YesNo) {
        self.did_rain = Some(answer);
    }

    pub fn set_followed_plan(&mut self, answer: YesNo) {
        self.followed_plan = Some(answer);
    }

    pub fn set_notes(&mut self, notes: &str) {
        self.notes = notes.to_string();
    }

    /// Submit is enabled once both radio questions are answered
    pub fn can_submit(&self) -> bool {
        self.state == FlowState::Editing && self.did_rain.is_some() && self.followed_plan.is_some()
    }

    /// Submit the feedback. On success the thank-you is displayed for the
    /// display delay, then the flow navigates to the dashboard.
    pub async fn submit(&mut self, api: &dyn FarmApi) -> SubmitResult {
        if !self.can_submit() {
            return SubmitResult::NotReady;
        }
        let (did_rain, followed_plan) = match (self.did_rain, self.followed_plan) {
            (Some(did_rain), Some(followed_plan)) => (did_rain, followed_plan),
            _ => return SubmitResult::NotReady,
        };

        self.state = FlowState::Submitting;
        let submission = FeedbackSubmission {
            did_rain,
            followed_plan,
            notes: self.notes.clone(),
        };

        match api.submit_feedback(&submission).await {
            Ok(_) => {
                self.state = FlowState::SuccessDisplay;
                tokio::time::sleep(self.display_delay).await;
                SubmitResult::Confirmed {
                    navigate_to: Some(Route::Dashboard),
                }
            }
            Err(error) => {
                tracing::error!("Error submitting feedback: {}", error);
                self.state = FlowState::Editing;
                SubmitResult::Rejected(Notice::error(FAILURE_NOTICE))
            }
        }
    }
}

impl Default for FeedbackFlow {
    fn default() -> Self {
        Self::new()
    }
}
