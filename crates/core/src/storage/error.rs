use thiserror::Error;

/// Errors that can occur during store operations.
///
/// The handlers collapse every variant into a 500 response, so the taxonomy
/// exists for logging and tests rather than for status-code mapping.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
