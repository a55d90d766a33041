//! Pegboard Server Library
//!
//! This crate serves a small directory site of curated developer tools,
//! backed by a hosted tabular-data backend (an Airtable-style API).
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Core infrastructure including configuration, error handling, the
//!   server coordinator, and the HTTP surface
//! - **domains**: Business logic organized by bounded contexts
//!   - **catalog**: the record model, backend table client, and directory view-model
//!   - **requests**: forwarding of tool-request submissions to the backend
//!   - **pages**: HTML rendering of the landing and directory views
//!
//! # Example
//!
//! ```rust,no_run
//! use pegboard::core::{Config, PegboardServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = PegboardServer::new(config);
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, PegboardServer, Result};
