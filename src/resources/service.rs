//! Service-level eligibility resource

use crate::core::client::EligibleClient;
use crate::core::error::Result;
use crate::core::response::ResponseObject;
use crate::core::schema::{ResourceKind, service};
use crate::models::{ApplicationError, RequestParams};
use crate::resources::Resource;
use serde_json::{Map, Value};

/// Benefits for a specific service type
#[derive(Debug, Clone, PartialEq)]
pub struct Service {
    response: ResponseObject,
}

impl Resource for Service {
    const KIND: ResourceKind = ResourceKind::Service;

    fn from_response(response: ResponseObject) -> Self {
        Self { response }
    }

    fn response(&self) -> &ResponseObject {
        &self.response
    }
}

impl Service {
    pub async fn get(client: &EligibleClient, params: &RequestParams) -> Result<Self> {
        client.get(params).await
    }

    pub fn all(&self) -> &Map<String, Value> {
        self.response.all()
    }

    pub fn error(&self) -> Option<&Value> {
        self.response.error()
    }

    pub fn application_error(&self) -> Option<ApplicationError> {
        self.response.application_error()
    }

    pub fn visits(&self) -> Map<String, Value> {
        self.response.project(&service::VISITS)
    }

    pub fn copayment(&self) -> Map<String, Value> {
        self.response.project(&service::COPAYMENT)
    }

    pub fn coinsurance(&self) -> Map<String, Value> {
        self.response.project(&service::COINSURANCE)
    }

    pub fn deductible(&self) -> Map<String, Value> {
        self.response.project(&service::DEDUCTIBLE)
    }
}
