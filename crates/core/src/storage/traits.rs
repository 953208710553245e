use async_trait::async_trait;

use super::{FieldMap, PostRecord, Result, WriteAck};

/// Storage capability required by the post handlers.
///
/// One implementation talks to DynamoDB; an in-memory implementation backs
/// the handler tests. Every operation is a single request against the store;
/// concurrent writes to the same key race at the store level (last write
/// wins).
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Fetches the item with the given key, if present.
    async fn get_post(&self, post_id: &str) -> Result<Option<PostRecord>>;

    /// Fetches every item in the table (unbounded scan).
    async fn scan_posts(&self) -> Result<Vec<PostRecord>>;

    /// Writes a new item. An existing item under the same key is replaced.
    async fn create_post(&self, item: FieldMap) -> Result<WriteAck>;

    /// Sets the supplied fields on the item with the given key, leaving other
    /// fields untouched. Updating an absent key creates the item. An empty
    /// field map is passed through and surfaces the store's own error.
    async fn update_post(&self, post_id: &str, fields: &FieldMap) -> Result<WriteAck>;

    /// Removes the item with the given key. Removing an absent key is a
    /// no-op that still acknowledges.
    async fn delete_post(&self, post_id: &str) -> Result<WriteAck>;
}
