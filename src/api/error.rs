use std::fmt;

/// Fetch errors. Callers log these and keep rendering whatever data they
/// already have; no fetch failure is fatal to the process.
#[derive(Debug)]
pub enum ApiError {
    /// Network-level failure (connection, timeout, DNS)
    Network(String),
    /// HTTP error response (4xx, 5xx)
    HttpStatus(u16, String),
    /// Failed to parse response
    Parse(String),
    /// Item deleted or missing upstream (the API answers `null`)
    NotFound(u64),
    /// Storage/persistence failure
    Storage(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network(details) => write!(f, "Network error: {details}"),
            Self::HttpStatus(code, msg) => write!(f, "HTTP error {code}: {msg}"),
            Self::Parse(details) => write!(f, "Failed to parse response: {details}"),
            Self::NotFound(id) => write!(f, "Item {id} not found"),
            Self::Storage(details) => write!(f, "Storage error: {details}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Network("request timed out".into())
        } else if err.is_connect() {
            Self::Network("connection failed".into())
        } else if err.is_decode() {
            Self::Parse(err.to_string())
        } else if let Some(status) = err.status() {
            Self::HttpStatus(
                status.as_u16(),
                status.canonical_reason().unwrap_or("").into(),
            )
        } else {
            Self::Network(err.to_string())
        }
    }
}

impl From<crate::storage::StorageError> for ApiError {
    fn from(err: crate::storage::StorageError) -> Self {
        Self::Storage(err.to_string())
    }
}
