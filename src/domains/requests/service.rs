//! Request submission service.
//!
//! A deliberate pass-through boundary: the submitted name is forwarded to
//! the backend's requests table, and whatever the backend answers (created
//! record or error payload) is returned verbatim to the caller. No
//! translation, no status mapping, no retry.

use std::sync::Arc;

use serde_json::json;
use tracing::{info, warn};

use crate::domains::catalog::{BackendError, TableClient};

/// Service forwarding inbound tool requests to the backend.
pub struct RequestService {
    client: Arc<TableClient>,
}

impl RequestService {
    /// Create a new request service sharing the backend client.
    pub fn new(client: Arc<TableClient>) -> Self {
        Self { client }
    }

    /// Forward a submission and return the payload for the response body.
    ///
    /// Both outcomes produce a payload: the created record on success, the
    /// backend's raw error payload on rejection. Transport-level failures
    /// (unreachable backend, missing credentials) carry no backend payload,
    /// so their message string stands in.
    pub async fn submit(&self, name: &str) -> serde_json::Value {
        info!("Forwarding request submission: {}", name);

        match self.client.create_request(name).await {
            Ok(created) => created,
            Err(BackendError::Rejected(payload)) => {
                warn!("Submission rejected by backend");
                payload
            }
            Err(e) => {
                warn!("Submission failed: {}", e);
                json!(e.to_string())
            }
        }
    }
}
