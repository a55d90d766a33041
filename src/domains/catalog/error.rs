//! Backend-specific error types.

use thiserror::Error;

/// Errors that can occur when talking to the backend table API.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The backend token or base identifier is not configured.
    #[error("Backend credentials are not configured")]
    MissingCredentials,

    /// The HTTP request to the backend failed.
    #[error("Backend request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend returned an empty or missing body for a read.
    #[error("Backend returned no data")]
    Unavailable,

    /// The backend response could not be decoded.
    #[error("Failed to decode backend response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The backend rejected a write; the raw error payload is carried
    /// verbatim for the pass-through boundary.
    #[error("Backend rejected the write")]
    Rejected(serde_json::Value),
}

impl BackendError {
    /// Create a rejection error carrying the backend's raw error payload.
    pub fn rejected(payload: serde_json::Value) -> Self {
        Self::Rejected(payload)
    }
}
