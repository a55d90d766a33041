//! Server coordinator and lifecycle management.
//!
//! This module contains the main server struct that coordinates the domain
//! services behind the HTTP surface: the catalog client that fetches the
//! record collection, and the request service that forwards submissions.
//!
//! Data flows through an explicit two-stage pipeline: handlers first call
//! [`PegboardServer::load_collection`] (fetch-and-validate), then render
//! with the collection. The redirect-on-empty policy is a branch in the
//! handlers, not a hidden framework hook.

use std::sync::Arc;

use super::config::Config;
use crate::domains::catalog::{BackendError, Collection, TableClient};
use crate::domains::requests::RequestService;

/// The main Pegboard server.
///
/// Coordinates between domain services to answer page and API requests.
#[derive(Clone)]
pub struct PegboardServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Client for the backend table API.
    catalog: Arc<TableClient>,

    /// Service forwarding request submissions.
    requests: Arc<RequestService>,
}

impl PegboardServer {
    /// Create a new server with the given configuration.
    pub fn new(config: Config) -> Self {
        let config = Arc::new(config);

        let catalog = Arc::new(TableClient::new(config.backend.clone()));
        let requests = Arc::new(RequestService::new(catalog.clone()));

        Self {
            config,
            catalog,
            requests,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Fetch the record collection for one page render.
    ///
    /// One fetch per render, no retry, no cache; on failure the caller
    /// renders nothing and falls back to its redirect policy.
    pub async fn load_collection(&self) -> Result<Collection, BackendError> {
        self.catalog.list_records().await
    }

    /// Forward a request submission and return the response payload verbatim.
    pub async fn submit_request(&self, name: &str) -> serde_json::Value {
        self.requests.submit(name).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_identity() {
        let server = PegboardServer::new(Config::default());
        assert_eq!(server.name(), "pegboard");
        assert_eq!(server.version(), env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_load_collection_without_credentials() {
        let server = PegboardServer::new(Config::default());
        let result = server.load_collection().await;
        assert!(matches!(result, Err(BackendError::MissingCredentials)));
    }
}
