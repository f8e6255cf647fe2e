//! Client error taxonomy
//!
//! Three kinds of failure cross the pipeline boundary: validation
//! errors the caller can correct, transport/server failures from the
//! external services, and storage failures. All are caught at the
//! boundary and rendered as messages; none crash the process. A missing
//! dataset is not an error at all; reads surface it as `Ok(None)`.

use thiserror::Error;

use shared::{DatasetKey, ValidationError};

/// Result type for client pipeline operations
pub type ClientResult<T> = Result<T, ClientError>;

/// Failures from the forecasting and optimization services. A malformed
/// body is classified separately from transport trouble so the surface
/// can tell "service unreachable" apart from "service misbehaving".
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiFailure {
    #[error("network error: {0}")]
    NetworkError(String),

    #[error("request timed out")]
    Timeout,

    #[error("service temporarily unavailable")]
    ServiceUnavailable,

    #[error("server error: {0}")]
    ServerError(String),

    #[error("malformed response: {0}")]
    InvalidResponse(String),
}

/// Failures of the persistent store itself, distinct from "no data yet"
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("stored document is not valid JSON: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum ClientError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("service call failed: {0}")]
    Api(#[from] ApiFailure),

    #[error("storage failure on '{key}': {source}")]
    Storage {
        key: DatasetKey,
        source: StoreError,
    },

    #[error("another {operation} is already in flight")]
    Busy { operation: &'static str },
}

impl ClientError {
    pub fn storage(key: DatasetKey, source: StoreError) -> Self {
        ClientError::Storage { key, source }
    }
}
