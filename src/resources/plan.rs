//! Plan coverage resource

use crate::core::client::EligibleClient;
use crate::core::error::Result;
use crate::core::response::ResponseObject;
use crate::core::schema::{ResourceKind, plan};
use crate::models::{ApplicationError, RequestParams};
use crate::resources::Resource;
use serde_json::{Map, Value};

/// Plan-level coverage for a subscriber
#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    response: ResponseObject,
}

impl Resource for Plan {
    const KIND: ResourceKind = ResourceKind::Plan;

    fn from_response(response: ResponseObject) -> Self {
        Self { response }
    }

    fn response(&self) -> &ResponseObject {
        &self.response
    }
}

impl Plan {
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

    /// Coverage status and primary insurance identity
    pub fn status(&self) -> Map<String, Value> {
        self.response.project(&plan::STATUS)
    }

    /// In- and out-of-network deductibles
    pub fn deductible(&self) -> Map<String, Value> {
        self.response.project(&plan::DEDUCTIBLE)
    }

    pub fn balance(&self) -> Map<String, Value> {
        self.response.project(&plan::BALANCE)
    }

    /// Plan begin and end dates
    pub fn dates(&self) -> Map<String, Value> {
        self.response.project(&plan::DATES)
    }

    /// In- and out-of-network stop-loss (out-of-pocket maximum)
    pub fn stop_loss(&self) -> Map<String, Value> {
        self.response.project(&plan::STOP_LOSS)
    }
}
