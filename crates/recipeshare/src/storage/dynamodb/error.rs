//! DynamoDB error mapping.
//!
//! Maps AWS SDK errors to `StoreError` from `recipeshare_core::storage`.
//! The handlers collapse every store failure into a 500, so the mapping only
//! distinguishes connectivity problems from request failures and keeps the
//! full error context in the message.

use std::fmt::Debug;

use aws_sdk_dynamodb::error::{DisplayErrorContext, SdkError};

use recipeshare_core::storage::StoreError;

/// Map an SDK error from any DynamoDB operation to a `StoreError`.
pub fn map_sdk_error<E, R>(operation: &'static str, err: SdkError<E, R>) -> StoreError
where
    E: std::error::Error + Send + Sync + 'static,
    R: Debug + Send + Sync + 'static,
{
    let detail = DisplayErrorContext(&err).to_string();
    match err {
        SdkError::ConstructionFailure(_)
        | SdkError::DispatchFailure(_)
        | SdkError::TimeoutError(_) => {
            StoreError::ConnectionFailed(format!("{operation}: {detail}"))
        }
        _ => StoreError::QueryFailed(format!("{operation}: {detail}")),
    }
}
