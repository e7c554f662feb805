//! Core client modules
//!
//! This module contains configuration, constants, logging, the transport
//! seam, the subset schema, response decoding and the client itself.

pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod response;
pub mod schema;
pub mod transport;
pub mod transports;
