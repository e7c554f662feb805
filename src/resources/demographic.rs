//! Subscriber demographic resource

use crate::core::client::EligibleClient;
use crate::core::error::Result;
use crate::core::response::ResponseObject;
use crate::core::schema::{ResourceKind, demographic};
use crate::models::{ApplicationError, RequestParams};
use crate::resources::Resource;
use serde_json::{Map, Value};

/// Demographic details the payer holds for a subscriber
#[derive(Debug, Clone, PartialEq)]
pub struct Demographic {
    response: ResponseObject,
}

impl Resource for Demographic {
    const KIND: ResourceKind = ResourceKind::Demographic;

    fn from_response(response: ResponseObject) -> Self {
        Self { response }
    }

    fn response(&self) -> &ResponseObject {
        &self.response
    }
}

impl Demographic {
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

    pub fn zip(&self) -> Map<String, Value> {
        self.response.project(&demographic::ZIP)
    }

    /// Group and employer identity
    pub fn employer(&self) -> Map<String, Value> {
        self.response.project(&demographic::EMPLOYER)
    }

    pub fn address(&self) -> Map<String, Value> {
        self.response.project(&demographic::ADDRESS)
    }

    pub fn dob(&self) -> Map<String, Value> {
        self.response.project(&demographic::DOB)
    }
}
