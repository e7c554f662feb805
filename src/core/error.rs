//! Error types returned by the Eligible client

use crate::core::transport::TransportError;
use thiserror::Error;

/// Errors that fail an Eligible API call
///
/// An application-level rejection by the server is not an error here: it is
/// returned as data on the response object.
#[derive(Debug, Error)]
pub enum EligibleError {
    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error(transparent)]
    Transport(TransportError),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl EligibleError {
    pub fn is_authentication(&self) -> bool {
        matches!(self, EligibleError::Authentication(_))
    }
}

impl From<TransportError> for EligibleError {
    fn from(error: TransportError) -> Self {
        if !error.is_unauthorized() {
            return EligibleError::Transport(error);
        }

        let message = match error {
            TransportError::Unauthorized(message) => message,
            TransportError::Status { body, .. } => classify_auth_error(&body),
            other => other.to_string(),
        };
        EligibleError::Authentication(message)
    }
}

/// Turn a 401 payload into a helpful message
///
/// The payload is never trusted to be well-formed; anything unrecognised
/// falls back to a generic message.
pub(crate) fn classify_auth_error(body: &str) -> String {
    let body_lower = body.to_lowercase();

    if body_lower.contains("api key") || body_lower.contains("api_key") {
        return "Invalid API key provided. Please check your ELIGIBLE_API_KEY configuration."
            .to_string();
    }

    "The Eligible API rejected the credentials (HTTP 401).".to_string()
}

pub type Result<T> = std::result::Result<T, EligibleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_401_becomes_authentication() {
        let error: EligibleError = TransportError::Status {
            status: 401,
            body: "{\"error\":\"Invalid API key provided: invalid\"}".to_string(),
        }
        .into();
        assert!(error.is_authentication());
        assert!(error.to_string().contains("API key"));
    }

    #[test]
    fn test_401_ignores_body_shape() {
        let error: EligibleError = TransportError::Status {
            status: 401,
            body: "<html>nope</html>".to_string(),
        }
        .into();
        assert!(error.is_authentication());
    }

    #[test]
    fn test_unauthorized_signal_keeps_message() {
        let error: EligibleError = TransportError::Unauthorized("token revoked".to_string()).into();
        assert!(matches!(error, EligibleError::Authentication(ref m) if m == "token revoked"));
    }

    #[test]
    fn test_timeout_passes_through() {
        let error: EligibleError = TransportError::Timeout("30s".to_string()).into();
        assert!(matches!(error, EligibleError::Transport(TransportError::Timeout(_))));
    }

    #[test]
    fn test_other_errors_pass_through() {
        let error: EligibleError = TransportError::Status {
            status: 503,
            body: "maintenance".to_string(),
        }
        .into();
        assert!(matches!(
            error,
            EligibleError::Transport(TransportError::Status { status: 503, .. })
        ));
        assert_eq!(error.to_string(), "HTTP error (status 503): maintenance");
    }
}
