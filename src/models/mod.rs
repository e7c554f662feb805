//! API data models
//!
//! This module contains the request parameters and the typed application
//! error payload.

pub mod application_error;
pub mod params;

pub use application_error::ApplicationError;
pub use params::RequestParams;
