//! HTTP surface of the Pegboard server.
//!
//! Serves the two pages (landing and directory), the request submission
//! endpoint, and a health check. The submission route is registered
//! POST-only, so every other method gets an explicit 405 Method Not Allowed
//! instead of a silent no-op.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
};
use serde::Deserialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use super::config::HttpConfig;
use super::error::{Error, Result};
use super::server::PegboardServer;
use crate::domains::catalog::{DirectoryView, summarize};
use crate::domains::pages::{directory, landing};

/// HTTP service owning the listener configuration.
pub struct HttpService {
    config: HttpConfig,
}

/// Application state shared across HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    /// The Pegboard server instance.
    server: PegboardServer,
}

impl HttpService {
    /// Create a new HTTP service with the given config.
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Run the HTTP service until shutdown.
    pub async fn run(self, server: PegboardServer) -> Result<()> {
        let addr = self.address();

        let mut app = router(server);

        // Add CORS if enabled
        if self.config.enable_cors {
            let cors = CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any);
            app = app.layer(cors);
        }

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| Error::bind(&addr, e))?;

        info!("Ready - listening on {}", addr);
        info!("  → Landing:   GET  /");
        info!("  → Directory: GET  /app");
        info!("  → Requests:  POST /api/request");
        info!("  → Health:    GET  /health");

        axum::serve(listener, app)
            .await
            .map_err(|e| Error::http(e.to_string()))?;

        Ok(())
    }
}

/// Build the router for the given server.
pub fn router(server: PegboardServer) -> Router {
    let state = AppState { server };

    Router::new()
        .route("/", get(landing_page))
        .route("/app", get(directory_page))
        .route("/api/request", post(submit_request))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Query parameters for the directory page.
#[derive(Debug, Deserialize)]
struct DirectoryParams {
    /// Free-text filter query; empty means "no filter".
    #[serde(default)]
    q: String,
}

/// Query parameters for the submission endpoint.
#[derive(Debug, Deserialize)]
struct SubmitParams {
    name: Option<String>,
}

/// Landing page handler.
///
/// Fetches the collection and renders the hero plus the three counters.
/// The landing page is the site root, so the redirect-home fallback would
/// loop; on fetch failure it answers 503 with no error detail instead.
async fn landing_page(State(state): State<AppState>) -> Response {
    match state.server.load_collection().await {
        Ok(collection) => {
            let summary = summarize(&collection.records);
            Html(landing::render(&summary)).into_response()
        }
        Err(e) => {
            warn!("Landing fetch failed: {}", e);
            StatusCode::SERVICE_UNAVAILABLE.into_response()
        }
    }
}

/// Directory page handler.
///
/// Fetch, then filter with the `q` parameter, then render. On fetch failure
/// the visitor is redirected to the site root; no partial data is shown.
async fn directory_page(
    State(state): State<AppState>,
    Query(params): Query<DirectoryParams>,
) -> Response {
    match state.server.load_collection().await {
        Ok(collection) => {
            let mut view = DirectoryView::new(collection);
            view.on_query_change(&params.q);
            Html(directory::render(&view)).into_response()
        }
        Err(e) => {
            warn!("Directory fetch failed: {}", e);
            Redirect::temporary("/").into_response()
        }
    }
}

/// Request submission handler (POST only; other methods get 405 from axum).
///
/// Presence of the `name` parameter is the only validation; the backend's
/// answer is forwarded verbatim under `message` either way.
async fn submit_request(
    State(state): State<AppState>,
    Query(params): Query<SubmitParams>,
) -> Response {
    let Some(name) = params.name else {
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "message": "missing 'name' parameter" })),
        )
            .into_response();
    };

    let message = state.server.submit_request(&name).await;
    Json(serde_json::json!({ "message": message })).into_response()
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}
