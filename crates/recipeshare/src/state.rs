//! Shared handler state.
//!
//! The store sits behind a trait object so handlers can be exercised against
//! the in-memory backend in tests.

use std::sync::Arc;

use recipeshare_core::storage::PostStore;

/// Shared state passed to every handler.
///
/// Invocations are stateless and independent; the store client is the only
/// resource reused across invocations in the same process.
#[derive(Clone)]
pub struct AppState {
    /// Post store (DynamoDB in production, in-memory in tests).
    pub posts: Arc<dyn PostStore>,
}

impl AppState {
    pub fn new(posts: Arc<dyn PostStore>) -> Self {
        Self { posts }
    }
}
