//! Claim status resource

use crate::core::client::EligibleClient;
use crate::core::error::Result;
use crate::core::response::ResponseObject;
use crate::core::schema::{ResourceKind, claim};
use crate::models::{ApplicationError, RequestParams};
use crate::resources::Resource;
use serde_json::{Map, Value};

/// Status of a submitted claim
#[derive(Debug, Clone, PartialEq)]
pub struct Claim {
    response: ResponseObject,
}

impl Resource for Claim {
    const KIND: ResourceKind = ResourceKind::Claim;

    fn from_response(response: ResponseObject) -> Self {
        Self { response }
    }

    fn response(&self) -> &ResponseObject {
        &self.response
    }
}

impl Claim {
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

    pub fn status(&self) -> Map<String, Value> {
        self.response.project(&claim::STATUS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Config;
    use crate::core::transports::ScriptedTransport;
    use serde_json::json;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_get_through_client() {
        let transport = Arc::new(ScriptedTransport::new().respond_json(&json!({
            "claim_status": "Finalized/Payment",
            "claim_number": "C-77",
            "paid_amount": 120.5,
            "payer_name": "Aetna"
        })));
        let client = EligibleClient::with_transport(Config::new("TEST"), transport.clone());

        let params = RequestParams::new().set("tbd", true);
        let claim = Claim::get(&client, &params).await.unwrap();

        assert!(claim.error().is_none());
        let status = claim.status();
        assert_eq!(status.len(), 3);
        assert_eq!(status["paid_amount"], json!(120.5));
        assert!(status.get("payer_name").is_none());

        let request = &transport.requests().await[0];
        assert!(request.url.ends_with("/claim/status.json"));
        assert_eq!(request.query_value("tbd"), Some("true"));
    }

    #[tokio::test]
    async fn test_error_response_has_empty_status() {
        let transport =
            Arc::new(ScriptedTransport::new().respond_json(&json!({"error": "claim not found"})));
        let client = EligibleClient::with_transport(Config::new("TEST"), transport);

        let claim = Claim::get(&client, &RequestParams::new()).await.unwrap();
        assert_eq!(
            claim.application_error().unwrap().message(),
            Some("claim not found")
        );
        assert!(claim.status().is_empty());
    }
}
