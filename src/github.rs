//! GitHub v3 API client for creating release milestones.
//!
//! Requests are assembled from validated values, sent through an injected
//! transport and the response is classified into a typed outcome.

/// Fixed API endpoints and credential handling.
pub mod config;

/// Response classification for create-milestone calls.
pub mod classify;

/// Debug logging of outgoing requests.
pub mod logger;

/// The create-milestone operation.
pub mod milestone;

/// HTTP request/response values and the request factory.
pub mod request;

/// HTTP transport abstraction and its reqwest implementation.
pub mod transport;

/// Serde payloads exchanged with the milestones endpoint.
pub mod types;
