//! Storage backends implementing the `PostStore` capability trait.

pub mod dynamodb;
pub mod inmemory;
