//! Eligible API client
//!
//! The client builds one GET request per call from the caller's parameters
//! and the configured credential, dispatches it through the configured
//! [`Transport`], and decodes the answer into a resource response.

use crate::core::config::Config;
use crate::core::constants::query;
use crate::core::error::{EligibleError, Result};
use crate::core::response::ResponseObject;
use crate::core::schema::ResourceKind;
use crate::core::transport::{ApiRequest, Transport};
use crate::core::transports::HttpTransport;
use crate::models::RequestParams;
use crate::resources::{Claim, Demographic, Plan, Resource, Service};
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Client for the Eligible eligibility-verification API
#[derive(Clone)]
pub struct EligibleClient {
    config: Arc<Config>,
    transport: Arc<dyn Transport>,
}

impl EligibleClient {
    /// Create a client that talks to the network over HTTP
    ///
    /// # Errors
    ///
    /// Returns a transport error if the HTTP client cannot be built.
    pub fn new(config: impl Into<Arc<Config>>) -> Result<Self> {
        let config = config.into();
        let transport = HttpTransport::new(config.request_timeout)?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Create a client over an explicit transport
    pub fn with_transport(config: impl Into<Arc<Config>>, transport: Arc<dyn Transport>) -> Self {
        Self {
            config: config.into(),
            transport,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Fetch a resource
    ///
    /// # Errors
    ///
    /// - `Authentication` when no API key is configured (nothing is sent) or
    ///   when the transport reports a 401
    /// - `Transport` for any other transport failure, unmodified
    /// - `InvalidResponse` when the body is not a JSON object
    pub async fn get<R: Resource>(&self, params: &RequestParams) -> Result<R> {
        self.fetch(R::KIND, params).await.map(R::from_response)
    }

    pub async fn plan(&self, params: &RequestParams) -> Result<Plan> {
        self.get(params).await
    }

    pub async fn service(&self, params: &RequestParams) -> Result<Service> {
        self.get(params).await
    }

    pub async fn demographic(&self, params: &RequestParams) -> Result<Demographic> {
        self.get(params).await
    }

    pub async fn claim(&self, params: &RequestParams) -> Result<Claim> {
        self.get(params).await
    }

    /// Fetch the untyped response for a resource kind
    pub async fn fetch(&self, kind: ResourceKind, params: &RequestParams) -> Result<ResponseObject> {
        // Fail before any network call when no credential is configured
        let api_key = self.config.api_key().ok_or_else(|| {
            warn!("Refusing {} request: no API key configured", kind);
            EligibleError::Authentication(
                "No API key provided. Set it on the Config or via ELIGIBLE_API_KEY.".to_string(),
            )
        })?;

        let request_id = Uuid::new_v4();
        let request = self.build_request(kind, params, api_key);

        info!(
            "Sending {} request via {}: request_id={}, params={}, test_mode={}",
            kind,
            self.transport.transport_name(),
            request_id,
            params.len(),
            self.config.test_mode
        );

        // Exactly one transport call; a 401 becomes an authentication error
        let response = self.transport.get(&request).await.map_err(|e| {
            let error = EligibleError::from(e);
            if error.is_authentication() {
                warn!("{} request {} was not authorized: {}", kind, request_id, error);
            } else {
                warn!("{} request {} failed: {}", kind, request_id, error);
            }
            error
        })?;

        let object = ResponseObject::from_body(kind, &response.body, request_id)?;

        debug!(
            "{} response: request_id={}, status={}, bytes={}, keys={}, received_at={}",
            kind,
            request_id,
            response.status,
            response.body.len(),
            object.all().len(),
            object.received_at().to_rfc3339()
        );

        // Application errors are returned as data, not raised
        if let Some(error) = object.error() {
            warn!(
                "Eligible rejected {} request {}: {}",
                kind, request_id, error
            );
        }

        Ok(object)
    }

    fn build_request(&self, kind: ResourceKind, params: &RequestParams, api_key: &str) -> ApiRequest {
        let mut pairs: Vec<(String, String)> = params
            .iter()
            .filter(|(name, _)| *name != query::API_KEY)
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();

        pairs.push((query::API_KEY.to_string(), api_key.to_string()));
        if self.config.test_mode {
            pairs.push((query::TEST.to_string(), "true".to_string()));
        }

        ApiRequest {
            url: format!("{}{}", self.config.base_url, kind.path()),
            query: pairs,
        }
    }
}
