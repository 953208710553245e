use recipeshare_core::storage::StoreError;
use thiserror::Error;

/// Failures caught at the operation boundary.
///
/// Client errors (missing parameter, unparseable body) and store errors all
/// collapse into the same 500 envelope; the taxonomy only shapes `errorMsg`.
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("missing path parameter: {0}")]
    MissingPathParameter(&'static str),
    #[error("invalid request body: {0}")]
    InvalidBody(#[from] serde_json::Error),
    #[error(transparent)]
    Store(#[from] StoreError),
}
