//! HTTP transport implementation on reqwest

use crate::core::transport::{ApiRequest, Transport, TransportError, TransportResponse};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Real-network transport
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Create a new HTTP transport
    ///
    /// # Arguments
    ///
    /// * `timeout` - Request timeout in seconds, `0` for no client-side timeout
    pub fn new(timeout: u64) -> Result<Self, TransportError> {
        let mut builder =
            Client::builder().user_agent(concat!("eligible-rs/", env!("CARGO_PKG_VERSION")));
        if timeout > 0 {
            builder = builder.timeout(Duration::from_secs(timeout));
        }

        let client = builder
            .build()
            .map_err(|e| TransportError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    /// Wrap an existing reqwest client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    fn map_send_error(error: reqwest::Error) -> TransportError {
        if error.is_timeout() {
            TransportError::Timeout(error.to_string())
        } else {
            TransportError::Network(error.to_string())
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, request: &ApiRequest) -> Result<TransportResponse, TransportError> {
        let response = self
            .client
            .get(&request.url)
            .header("Accept", "application/json")
            .query(&request.query)
            .send()
            .await
            .map_err(Self::map_send_error)?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Network(format!("Failed to read response: {}", e)))?;

        debug!(
            "Eligible HTTP response: status={}, bytes={}",
            status.as_u16(),
            body.len()
        );

        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(TransportResponse {
            status: status.as_u16(),
            body,
        })
    }

    fn transport_name(&self) -> &str {
        "HTTP"
    }
}
