//! Eligible API client
//!
//! A client for the Eligible healthcare eligibility-verification API. Each
//! call issues one GET request carrying payer, subscriber and provider
//! parameters and returns a typed response exposing named subsets of the
//! decoded payload.
//!
//! ```rust,no_run
//! use eligible::{Config, EligibleClient, RequestParams};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = EligibleClient::new(Config::from_env()?)?;
//! let params = RequestParams::new()
//!     .payer_id("000001")
//!     .subscriber_id("W120923801")
//!     .subscriber_dob("1955-12-14");
//!
//! let plan = client.plan(&params).await?;
//! match plan.error() {
//!     Some(error) => eprintln!("rejected: {}", error),
//!     None => println!("deductible: {:?}", plan.deductible()),
//! }
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod models;
pub mod resources;

pub use crate::core::client::EligibleClient;
pub use crate::core::config::Config;
pub use crate::core::error::{EligibleError, Result};
pub use crate::core::logging::init_logging;
pub use crate::core::response::ResponseObject;
pub use crate::core::schema::{Field, ResourceKind, Subset};
pub use crate::core::transport::{ApiRequest, Transport, TransportError, TransportResponse};
pub use crate::core::transports::{HttpTransport, ScriptedTransport};
pub use crate::models::{ApplicationError, RequestParams};
pub use crate::resources::{Claim, Demographic, Plan, Resource, Service};
