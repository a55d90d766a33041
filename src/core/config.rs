//! Configuration management for the Pegboard server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables or defaults.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Main configuration structure for the Pegboard server.
///
/// This struct contains all configurable aspects of the server, organized
/// by domain for clarity and maintainability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Backend table API configuration and credentials.
    pub backend: BackendConfig,

    /// HTTP listener configuration.
    pub http: HttpConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported in logs and pages.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Configuration for the hosted table backend.
///
/// The token and base identifier are both required for any backend call;
/// when either is absent, calls fail with a credentials error instead of
/// being issued.
#[derive(Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Bearer token for the backend API.
    pub api_token: Option<String>,

    /// Identifier of the backend base holding the tables.
    pub base_id: Option<String>,

    /// Root URL of the backend API.
    pub api_url: String,

    /// Name of the table holding the curated tool records.
    pub services_table: String,

    /// Name of the table receiving tool-request submissions.
    pub requests_table: String,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for BackendConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendConfig")
            .field("api_token", &self.api_token.as_ref().map(|_| "[REDACTED]"))
            .field("base_id", &self.base_id)
            .field("api_url", &self.api_url)
            .field("services_table", &self.services_table)
            .field("requests_table", &self.requests_table)
            .finish()
    }
}

/// HTTP listener configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Host address to bind to.
    pub host: String,

    /// Port number to listen on.
    pub port: u16,

    /// Enable CORS for browser clients.
    pub enable_cors: bool,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            api_token: None,
            base_id: None,
            api_url: "https://api.airtable.com/v0".to_string(),
            services_table: "Services".to_string(),
            requests_table: "Requests".to_string(),
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            enable_cors: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "pegboard".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            backend: BackendConfig::default(),
            http: HttpConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
            },
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `PEGBOARD_`.
    /// For example: `PEGBOARD_API_TOKEN`, `PEGBOARD_LOG_LEVEL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("PEGBOARD_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("PEGBOARD_LOG_LEVEL") {
            config.logging.level = level;
        }

        // Backend credentials and table names
        if let Ok(token) = std::env::var("PEGBOARD_API_TOKEN") {
            config.backend.api_token = Some(token);
            info!("Backend API token loaded from environment");
        } else {
            warn!("PEGBOARD_API_TOKEN not set - all backend calls will fail");
        }

        if let Ok(base_id) = std::env::var("PEGBOARD_BASE_ID") {
            config.backend.base_id = Some(base_id);
        } else {
            warn!("PEGBOARD_BASE_ID not set - all backend calls will fail");
        }

        if let Ok(api_url) = std::env::var("PEGBOARD_API_URL") {
            config.backend.api_url = api_url;
        }

        if let Ok(table) = std::env::var("PEGBOARD_SERVICES_TABLE") {
            config.backend.services_table = table;
        }

        if let Ok(table) = std::env::var("PEGBOARD_REQUESTS_TABLE") {
            config.backend.requests_table = table;
        }

        // HTTP listener
        if let Ok(host) = std::env::var("PEGBOARD_HTTP_HOST") {
            config.http.host = host;
        }

        if let Ok(port) = std::env::var("PEGBOARD_HTTP_PORT") {
            match port.parse() {
                Ok(port) => config.http.port = port,
                Err(_) => warn!("Invalid PEGBOARD_HTTP_PORT value: {}", port),
            }
        }

        if let Ok(cors) = std::env::var("PEGBOARD_HTTP_CORS") {
            config.http.enable_cors = cors.to_lowercase() != "false" && cors != "0";
        }

        config
    }
}
