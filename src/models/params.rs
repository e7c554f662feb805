//! Request parameters
//!
//! Parameters are forwarded to the API as query pairs without any client-side
//! validation; the server decides whether a request is complete.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Named request fields (payer, subscriber and provider identity)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestParams {
    fields: BTreeMap<String, String>,
}

impl RequestParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an arbitrary field, replacing any previous value
    pub fn set(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.fields.insert(name.into(), value.to_string());
        self
    }

    pub fn payer_name(self, value: impl ToString) -> Self {
        self.set("payer_name", value)
    }

    pub fn payer_id(self, value: impl ToString) -> Self {
        self.set("payer_id", value)
    }

    pub fn service_provider_first_name(self, value: impl ToString) -> Self {
        self.set("service_provider_first_name", value)
    }

    pub fn service_provider_last_name(self, value: impl ToString) -> Self {
        self.set("service_provider_last_name", value)
    }

    /// National Provider Identifier of the servicing provider
    pub fn service_provider_npi(self, value: impl ToString) -> Self {
        self.set("service_provider_NPI", value)
    }

    pub fn subscriber_id(self, value: impl ToString) -> Self {
        self.set("subscriber_id", value)
    }

    pub fn subscriber_first_name(self, value: impl ToString) -> Self {
        self.set("subscriber_first_name", value)
    }

    pub fn subscriber_last_name(self, value: impl ToString) -> Self {
        self.set("subscriber_last_name", value)
    }

    /// Subscriber date of birth, `YYYY-MM-DD`
    pub fn subscriber_dob(self, value: impl ToString) -> Self {
        self.set("subscriber_dob", value)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate fields as query pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for RequestParams
where
    K: Into<String>,
    V: ToString,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.to_string()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_sets_named_fields() {
        let params = RequestParams::new()
            .payer_name("Aetna")
            .payer_id("000001")
            .service_provider_npi("1928384219")
            .subscriber_dob("1955-12-14");

        assert_eq!(params.len(), 4);
        assert_eq!(params.get("payer_name"), Some("Aetna"));
        assert_eq!(params.get("service_provider_NPI"), Some("1928384219"));
        assert_eq!(params.get("subscriber_id"), None);
    }

    #[test]
    fn test_from_iterator_and_overwrite() {
        let params: RequestParams = [("tbd", "true"), ("tbd", "false")].into_iter().collect();
        assert_eq!(params.get("tbd"), Some("false"));

        let params = params.set("count", 3);
        assert_eq!(params.get("count"), Some("3"));
    }

    #[test]
    fn test_serializes_as_flat_object() {
        let params = RequestParams::new().subscriber_id("W120923801");
        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(value, serde_json::json!({"subscriber_id": "W120923801"}));
    }
}
