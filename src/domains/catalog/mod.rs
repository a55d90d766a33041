//! Catalog domain: the curated tool records and everything derived from them.
//!
//! This domain owns the record model, the backend table client that fetches
//! and writes records, and the directory view-model that drives the
//! searchable directory page.

pub mod client;
pub mod error;
pub mod record;
pub mod view;

pub use client::TableClient;
pub use error::BackendError;
pub use record::{Collection, Record};
pub use view::{DirectoryView, Summary, filter_records, summarize};
