//! Agent booking flow
//!
//! Pick an agent from the roster, pick a date inside the bounded window,
//! confirm. Success shows the booking reference, then the dialog resets to a
//! blank form; there is no navigation away.

use std::time::Duration;

use chrono::{DateTime, NaiveDate, Utc};

use shared::models::{AgentProfile, BookingRequest};
use shared::validation::is_selectable_booking_date;

use crate::api::FarmApi;
use crate::flows::{FlowState, Notice, SubmitResult};

const FAILURE_NOTICE: &str = "Failed to book agent. Please try again.";
const DISPLAY_DELAY: Duration = Duration::from_secs(3);

/// The consultation booking form
#[derive(Debug)]
pub struct BookingFlow {
    roster: Vec<AgentProfile>,
    today: NaiveDate,
    display_delay: Duration,
    state: FlowState,
    selected_agent: Option<String>,
    date: Option<DateTime<Utc>>,
    booking_id: Option<String>,
}

impl BookingFlow {
    /// Open the booking page. `today` anchors the selectable date window.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            roster: AgentProfile::roster(),
            today,
            display_delay: DISPLAY_DELAY,
            state: FlowState::Editing,
            selected_agent: None,
            date: None,
            booking_id: None,
        }
    }

    /// Override the success-display delay (tests)
    pub fn with_display_delay(mut self, delay: Duration) -> Self {
        self.display_delay = delay;
        self
    }

    pub fn roster(&self) -> &[AgentProfile] {
        &self.roster
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    /// The reference shown during the success display
    pub fn booking_id(&self) -> Option<&str> {
        self.booking_id.as_deref()
    }

    pub fn selected_agent(&self) -> Option<&AgentProfile> {
        let id = self.selected_agent.as_deref()?;
        self.roster.iter().find(|agent| agent.id == id)
    }

    pub fn selected_date(&self) -> Option<DateTime<Utc>> {
        self.date
    }

    /// Select an agent from the roster. Unknown ids are ignored.
    pub fn select_agent(&mut self, id: &str) -> bool {
        if self.roster.iter().any(|agent| agent.id == id) {
            self.selected_agent = Some(id.to_string());
            true
        } else {
            false
        }
    }

    /// Select a consultation date. Dates outside the window from today
    /// through one month ahead are not selectable.
    pub fn select_date(&mut self, date: DateTime<Utc>) -> bool {
        if is_selectable_booking_date(date.date_naive(), self.today) {
            self.date = Some(date);
            true
        } else {
            false
        }
    }

    /// Submit is enabled once an agent and a date are chosen
    pub fn can_submit(&self) -> bool {
        self.state == FlowState::Editing && self.selected_agent.is_some() && self.date.is_some()
    }

    /// Confirm the booking. On success the confirmation is displayed for the
    /// display delay, then the form resets to a blank editing state.
    pub async fn submit(&mut self, api: &dyn FarmApi) -> SubmitResult {
        if !self.can_submit() {
            return SubmitResult::NotReady;
        }
        let (agent, date) = match (self.selected_agent(), self.date) {
            (Some(agent), Some(date)) => (agent.clone(), date),
            _ => return SubmitResult::NotReady,
        };

        self.state = FlowState::Submitting;
        let request = BookingRequest {
            agent_id: agent.id,
            agent_name: agent.name,
            date,
            region: agent.region,
        };

        match api.book_agent(&request).await {
            Ok(confirmation) => {
                self.booking_id = confirmation.booking_id;
                self.state = FlowState::SuccessDisplay;
                tokio::time::sleep(self.display_delay).await;
                self.reset();
                SubmitResult::Confirmed { navigate_to: None }
            }
            Err(error) => {
                tracing::error!("Error booking agent: {}", error);
                self.state = FlowState::Editing;
                SubmitResult::Rejected(Notice::error(FAILURE_NOTICE))
            }
        }
    }

    fn reset(&mut self) {
        self.state = FlowState::Editing;
        self.selected_agent = None;
        self.date = None;
        self.booking_id = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 4, 10).unwrap()
    }

    fn at_noon(date: NaiveDate) -> DateTime<Utc> {
        Utc.from_utc_datetime(&date.and_hms_opt(12, 0, 0).unwrap())
    }

    #[test]
    fn roster_has_three_agents() {
        let flow = BookingFlow::new(today());
        assert_eq!(flow.roster().len(), 3);
        assert!(flow.roster().iter().any(|a| a.name == "John Smith"));
    }

    #[test]
    fn unknown_agent_is_rejected() {
        let mut flow = BookingFlow::new(today());
        assert!(!flow.select_agent("nobody"));
        assert!(flow.select_agent("sarah"));
    }

    #[test]
    fn date_window_is_enforced() {
        let mut flow = BookingFlow::new(today());

        assert!(!flow.select_date(at_noon(today().pred_opt().unwrap())));
        assert!(flow.select_date(at_noon(today())));

        let one_month_out = NaiveDate::from_ymd_opt(2024, 5, 10).unwrap();
        assert!(flow.select_date(at_noon(one_month_out)));
        assert!(!flow.select_date(at_noon(one_month_out.succ_opt().unwrap())));
    }

    #[test]
    fn submit_disabled_until_fields_set() {
        let mut flow = BookingFlow::new(today());
        assert!(!flow.can_submit());
        flow.select_agent("john");
        assert!(!flow.can_submit());
        flow.select_date(at_noon(today()));
        assert!(flow.can_submit());
    }
}
