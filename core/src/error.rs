//! Error types for the Bootcamp API client and the resource layer.
//!
//! # Design
//! `ApiError` is what a single client call can fail with. `NotFound` gets a
//! dedicated variant because Read callers distinguish "the resource is gone"
//! from other bad statuses. It still counts as a transport-class failure.
//! `ResourceError` wraps an `ApiError` with the summary/detail pair a plugin
//! host shows to the user.

use thiserror::Error;

/// Errors returned by `BootcampClient` and `ApiClient`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No response was received: connection failure, timeout, broken body.
    #[error("transport error: {0}")]
    Transport(String),

    /// The server returned 404: the requested object does not exist.
    #[error("HTTP 404: resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The request payload could not be serialized to JSON.
    #[error("encoding request body failed: {0}")]
    Encode(String),

    /// The response body could not be deserialized into the expected type.
    #[error("decoding response body failed: {0}")]
    Decode(String),

    /// The endpoint is missing or empty.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl ApiError {
    /// True for failures of the round-trip itself, including bad statuses.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            ApiError::Transport(_) | ApiError::NotFound | ApiError::Status { .. }
        )
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound)
    }
}

/// A failed reconciler or data source invocation.
#[derive(Debug, Error)]
#[error("{summary}: {detail}")]
pub struct ResourceError {
    /// Short title, e.g. "Unable to create engineer".
    pub summary: String,
    /// Sentence including the underlying cause.
    pub detail: String,
    #[source]
    pub source: ApiError,
}

impl ResourceError {
    pub fn new(summary: impl Into<String>, context: &str, source: ApiError) -> Self {
        Self {
            summary: summary.into(),
            detail: format!("An error occurred while {context}: {source}"),
            source,
        }
    }
}
