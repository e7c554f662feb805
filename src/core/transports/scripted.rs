//! Scripted transport for deterministic tests
//!
//! Replies are consumed in the order they were queued. Every request the
//! transport receives is recorded so tests can assert on what was sent and
//! how many calls were made.

use crate::core::transport::{ApiRequest, Transport, TransportError, TransportResponse};
use async_trait::async_trait;
use std::collections::VecDeque;
use tokio::sync::Mutex;

type Reply = Result<TransportResponse, TransportError>;

/// Transport that answers from a queue of scripted replies
#[derive(Default)]
pub struct ScriptedTransport {
    replies: Mutex<VecDeque<Reply>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a 200 response with the given body
    pub fn respond_ok(self, body: impl Into<String>) -> Self {
        self.respond(Ok(TransportResponse {
            status: 200,
            body: body.into(),
        }))
    }

    /// Queue a 200 response carrying a JSON value
    pub fn respond_json(self, value: &serde_json::Value) -> Self {
        self.respond_ok(value.to_string())
    }

    /// Queue a non-success HTTP status
    pub fn respond_status(self, status: u16, body: impl Into<String>) -> Self {
        self.respond(Err(TransportError::Status {
            status,
            body: body.into(),
        }))
    }

    /// Queue a transport failure
    pub fn respond_error(self, error: TransportError) -> Self {
        self.respond(Err(error))
    }

    fn respond(mut self, reply: Reply) -> Self {
        self.replies.get_mut().push_back(reply);
        self
    }

    /// Requests received so far, oldest first
    pub async fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().await.clone()
    }

    /// Number of requests received so far
    pub async fn call_count(&self) -> usize {
        self.requests.lock().await.len()
    }

    /// Number of queued replies not yet consumed
    pub async fn remaining(&self) -> usize {
        self.replies.lock().await.len()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn get(&self, request: &ApiRequest) -> Result<TransportResponse, TransportError> {
        self.requests.lock().await.push(request.clone());

        self.replies.lock().await.pop_front().unwrap_or_else(|| {
            Err(TransportError::Network(format!(
                "No scripted reply left for {}",
                request.url
            )))
        })
    }

    fn transport_name(&self) -> &str {
        "Scripted"
    }
}
