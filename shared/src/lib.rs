//! Shared types and models for the SkyHarvest farming dashboard
//!
//! This crate contains types shared between the backend, the client flow
//! logic, and the browser bindings.

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
