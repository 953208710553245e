//! In-memory store implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use recipeshare_core::storage::{FieldMap, PostRecord, PostStore, Result, StoreError, WriteAck};

/// In-memory storage backend for testing.
///
/// Items live in a `HashMap` behind `Arc<RwLock<_>>` and are lost when the
/// store is dropped. Semantics mirror the DynamoDB backend: delete of an
/// absent key is a no-op, update upserts, an empty update errors. Its native
/// encoding is the plain item map itself.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPostStore {
    items: Arc<RwLock<HashMap<String, FieldMap>>>,
}

impl InMemoryPostStore {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

fn record(item: &FieldMap) -> PostRecord {
    PostRecord {
        data: item.clone(),
        raw: Value::Object(item.clone()),
    }
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn get_post(&self, post_id: &str) -> Result<Option<PostRecord>> {
        let items = self.items.read().await;
        Ok(items.get(post_id).map(record))
    }

    async fn scan_posts(&self) -> Result<Vec<PostRecord>> {
        let items = self.items.read().await;
        Ok(items.values().map(record).collect())
    }

    async fn create_post(&self, item: FieldMap) -> Result<WriteAck> {
        let post_id = item
            .get("postId")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                StoreError::InvalidRequest("item is missing its postId key".to_string())
            })?
            .to_string();

        let mut items = self.items.write().await;
        // Put semantics: an existing item under the same key is replaced.
        items.insert(post_id, item);
        Ok(WriteAck::default())
    }

    async fn update_post(&self, post_id: &str, fields: &FieldMap) -> Result<WriteAck> {
        if fields.is_empty() {
            return Err(StoreError::InvalidRequest(
                "update expression has no assignments".to_string(),
            ));
        }

        let mut items = self.items.write().await;
        let item = items.entry(post_id.to_string()).or_insert_with(|| {
            // Upsert: an absent key gains an item holding just its key field.
            let mut item = FieldMap::new();
            item.insert("postId".to_string(), Value::String(post_id.to_string()));
            item
        });
        for (name, value) in fields {
            item.insert(name.clone(), value.clone());
        }
        Ok(WriteAck::default())
    }

    async fn delete_post(&self, post_id: &str) -> Result<WriteAck> {
        let mut items = self.items.write().await;
        items.remove(post_id);
        Ok(WriteAck::default())
    }
}
