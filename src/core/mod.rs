//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational building blocks for the Pegboard
//! server, including error handling, configuration, the server coordinator,
//! and the HTTP surface.

pub mod config;
pub mod error;
pub mod http;
pub mod server;

pub use config::Config;
pub use error::{Error, Result};
pub use http::HttpService;
pub use server::PegboardServer;
