//! Client error taxonomy.
//!
//! Encode errors surface before anything is sent; decode errors after the
//! transport returned a body. Recovery (retry, abort, surface to the user)
//! is the caller's decision, nothing is retried or suppressed here.

use thiserror::Error;

/// Error returned by a [`Transport`](crate::client::Transport)
/// implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("transport failed: {message}")]
pub struct TransportError {
    pub message: String,
    /// HTTP status, when the request reached the cluster at all.
    pub status: Option<u16>,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
        }
    }

    pub fn with_status(message: impl Into<String>, status: u16) -> Self {
        Self {
            message: message.into(),
            status: Some(status),
        }
    }
}

/// Errors a health query can fail with.
#[derive(Debug, Error)]
pub enum ClientError {
    /// A value in the query description has no wire representation, such as
    /// an enum member outside its token table. Raised before the transport
    /// is touched.
    #[error("failed to encode health query: {0}")]
    Encode(#[source] serde_json::Error),

    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The cluster answered, but not with a health chunk this model can
    /// read.
    #[error("failed to decode health chunk response: {0}")]
    Decode(#[source] serde_json::Error),
}
