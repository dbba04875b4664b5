//! Form flows collecting input and invoking the mock endpoints
//!
//! All three flows share one shape: edit locally, submit once, show the
//! outcome, then reset or navigate after a fixed display delay. Each flow
//! owns its fields exclusively; nothing is shared across flows.

mod booking;
mod feedback;
mod setup;

pub use booking::BookingFlow;
pub use feedback::FeedbackFlow;
pub use setup::SetupFlow;

use crate::session::Route;

/// Lifecycle shared by the booking, feedback, and setup forms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    /// Fields held in local state; submit enabled once required fields are set
    Editing,
    /// Endpoint invoked; further submission disabled
    Submitting,
    /// Confirmation (and identifier, if any) on screen for the display delay
    SuccessDisplay,
}

/// Transient notification surfaced when a submission fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
}

impl Notice {
    fn error(description: &str) -> Self {
        Self {
            title: "Error".to_string(),
            description: description.to_string(),
        }
    }
}

/// Outcome of driving a flow's submit action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitResult {
    /// Required fields are unset or a submission is already in flight;
    /// the endpoint was not called
    NotReady,
    /// Endpoint confirmed; `navigate_to` is where the flow hands control next
    Confirmed { navigate_to: Option<Route> },
    /// Endpoint or network failure; the flow is editable again
    Rejected(Notice),
}
