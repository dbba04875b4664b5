//! SkyHarvest farming dashboard - client flow logic
//!
//! The frontend's state machines, kept free of any rendering concern: the
//! dashboard consumer, the three form flows, the session context with its
//! route guard, and the HTTP gateway they all talk through.

pub mod api;
pub mod dashboard;
pub mod flows;
pub mod guard;
pub mod session;

pub use api::{ClientError, FarmApi, HttpFarmApi};
pub use dashboard::{Dashboard, DashboardState};
pub use flows::{BookingFlow, FeedbackFlow, FlowState, Notice, SetupFlow, SubmitResult};
pub use guard::{protect, resolve, GuardDecision, Protected};
pub use session::{Route, SessionContext};
