//! Transport abstraction for sending requests to the Eligible API
//!
//! The client never talks to the network directly. It hands a fully built
//! [`ApiRequest`] to a [`Transport`], which is either the real HTTP transport
//! or a scripted one used in tests.

use async_trait::async_trait;
use thiserror::Error;

/// Error types reported by a transport
#[derive(Debug, Error)]
pub enum TransportError {
    /// The transport itself determined the credential was rejected
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("HTTP error (status {status}): {body}")]
    Status { status: u16, body: String },

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Network error: {0}")]
    Network(String),
}

impl TransportError {
    /// Whether this failure is an authentication rejection
    pub fn is_unauthorized(&self) -> bool {
        match self {
            TransportError::Unauthorized(_) => true,
            TransportError::Status { status, .. } => *status == 401,
            _ => false,
        }
    }
}

/// A GET request ready to be dispatched
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    /// Absolute endpoint URL without query string
    pub url: String,
    /// Query pairs, credential included
    pub query: Vec<(String, String)>,
}

impl ApiRequest {
    /// Look up the first value of a query parameter
    pub fn query_value(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// A successful (2xx) response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

/// Trait for request transports
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send a GET request
    ///
    /// Non-success HTTP statuses are reported as `TransportError::Status`.
    async fn get(&self, request: &ApiRequest) -> Result<TransportResponse, TransportError>;

    /// Get the transport name
    fn transport_name(&self) -> &str;
}
