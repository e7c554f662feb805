//! Decoded API responses
//!
//! A [`ResponseObject`] owns the complete decoded mapping of one response.
//! `all()` exposes it unfiltered and every subset accessor is a projection
//! of that same mapping, computed on access.

use crate::core::constants::response::ERROR;
use crate::core::error::{EligibleError, Result};
use crate::core::schema::{ResourceKind, Subset};
use crate::models::ApplicationError;
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use uuid::Uuid;

/// One decoded response from a resource endpoint
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseObject {
    kind: ResourceKind,
    data: Map<String, Value>,
    request_id: Uuid,
    received_at: DateTime<Utc>,
}

impl ResponseObject {
    /// Decode a response body
    ///
    /// # Errors
    ///
    /// Returns `InvalidResponse` if the body is not a JSON object.
    pub fn from_body(kind: ResourceKind, body: &str, request_id: Uuid) -> Result<Self> {
        let value: Value = serde_json::from_str(body).map_err(|e| {
            EligibleError::InvalidResponse(format!("Failed to parse {} response: {}", kind, e))
        })?;

        match value {
            Value::Object(data) => Ok(Self::from_map(kind, data, request_id)),
            other => Err(EligibleError::InvalidResponse(format!(
                "Expected a JSON object from the {} endpoint, got {}",
                kind,
                json_type(&other)
            ))),
        }
    }

    pub fn from_map(kind: ResourceKind, data: Map<String, Value>, request_id: Uuid) -> Self {
        Self {
            kind,
            data,
            request_id,
            received_at: Utc::now(),
        }
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    /// Identifier logged with the request that produced this response
    pub fn request_id(&self) -> Uuid {
        self.request_id
    }

    pub fn received_at(&self) -> DateTime<Utc> {
        self.received_at
    }

    /// The entire decoded mapping
    pub fn all(&self) -> &Map<String, Value> {
        &self.data
    }

    /// The server-reported error, if any
    ///
    /// A `null` error value counts as no error.
    pub fn error(&self) -> Option<&Value> {
        self.data.get(ERROR).filter(|value| !value.is_null())
    }

    pub fn is_success(&self) -> bool {
        self.error().is_none()
    }

    /// Typed view of the server-reported error
    pub fn application_error(&self) -> Option<ApplicationError> {
        self.error().and_then(ApplicationError::from_value)
    }

    /// Filtered view over the mapping for the given subset
    pub fn project(&self, subset: &Subset) -> Map<String, Value> {
        subset.project(&self.data)
    }

    /// Filtered view by subset name, `None` if this resource has no such subset
    pub fn subset(&self, name: &str) -> Option<Map<String, Value>> {
        self.kind.subset(name).map(|subset| self.project(subset))
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
