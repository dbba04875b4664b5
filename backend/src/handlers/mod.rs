//! HTTP handlers for the SkyHarvest backend

mod booking;
mod farm;
mod feedback;
mod forecast;
mod health;

pub use booking::book_agent;
pub use farm::complete_farm_setup;
pub use feedback::submit_feedback;
pub use forecast::get_forecast;
pub use health::health_check;
