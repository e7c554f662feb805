//! Application-level error payload
//!
//! When the API answers but cannot resolve an eligibility request it puts an
//! error under the reserved `error` key. The value is either a plain message
//! or an object describing the rejection.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Typed view of the server's `error` value
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationError {
    #[serde(default)]
    pub response_code: Option<String>,
    #[serde(default)]
    pub response_description: Option<String>,
    #[serde(default)]
    pub agency_qualifier_code: Option<String>,
    #[serde(default)]
    pub agency_qualifier_description: Option<String>,
    #[serde(default)]
    pub reject_reason_code: Option<String>,
    #[serde(default)]
    pub reject_reason_description: Option<String>,
    #[serde(default, rename = "follow-up_action_code")]
    pub follow_up_action_code: Option<String>,
    #[serde(default, rename = "follow-up_action_description")]
    pub follow_up_action_description: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
}

impl ApplicationError {
    /// Interpret a raw `error` value
    ///
    /// Strings become `details`. Objects are read field by field, with
    /// non-string scalars rendered as text. Other shapes yield `None`.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(message) => Some(Self {
                details: Some(message.clone()),
                ..Self::default()
            }),
            Value::Object(fields) => {
                let text = |name: &str| match fields.get(name) {
                    Some(Value::String(s)) => Some(s.clone()),
                    Some(Value::Null) | None => None,
                    Some(other) => Some(other.to_string()),
                };
                Some(Self {
                    response_code: text("response_code"),
                    response_description: text("response_description"),
                    agency_qualifier_code: text("agency_qualifier_code"),
                    agency_qualifier_description: text("agency_qualifier_description"),
                    reject_reason_code: text("reject_reason_code"),
                    reject_reason_description: text("reject_reason_description"),
                    follow_up_action_code: text("follow-up_action_code"),
                    follow_up_action_description: text("follow-up_action_description"),
                    details: text("details"),
                })
            }
            _ => None,
        }
    }

    /// The most descriptive message available
    pub fn message(&self) -> Option<&str> {
        self.reject_reason_description
            .as_deref()
            .or(self.details.as_deref())
            .or(self.response_description.as_deref())
    }
}
