//! DynamoDB storage backend implementation.
//!
//! Implements the `PostStore` trait from `recipeshare_core::storage` using
//! `aws-sdk-dynamodb`.

mod conversions;
mod error;
mod repository;

pub use repository::DynamoDbPostStore;
