//! Requests domain: forwarding tool-request submissions to the backend.

pub mod service;

pub use service::RequestService;
