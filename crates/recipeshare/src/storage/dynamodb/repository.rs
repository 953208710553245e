//! DynamoDB store implementation.
//!
//! Implements `PostStore` from `recipeshare_core::storage` against a single
//! table keyed by `postId`.

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;

use recipeshare_core::storage::{FieldMap, PostRecord, PostStore, Result, WriteAck};

use super::conversions::{item_to_map, item_to_native, map_to_item, value_to_attribute};
use super::error::map_sdk_error;

/// Name of the key attribute on every item.
const KEY_ATTRIBUTE: &str = "postId";

/// DynamoDB-based post store.
pub struct DynamoDbPostStore {
    client: Client,
    table_name: String,
}

impl DynamoDbPostStore {
    /// Creates a new store with the given DynamoDB client and table name.
    ///
    /// The table name is injected by the caller (see `Config`); the store
    /// never reads the environment itself.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Get the table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    fn key(post_id: &str) -> AttributeValue {
        AttributeValue::S(post_id.to_string())
    }
}

/// Build the `SET` clause for an update from the field count.
///
/// Field names and values go through `#keyN`/`:valueN` placeholders so names
/// that collide with DynamoDB reserved words are safe. An empty map yields a
/// clause with no assignments; DynamoDB rejects it and the error is surfaced
/// to the caller unchanged.
fn build_set_expression(fields: &FieldMap) -> String {
    let assignments: Vec<String> = (0..fields.len())
        .map(|index| format!("#key{index} = :value{index}"))
        .collect();
    format!("SET {}", assignments.join(", "))
}

#[async_trait]
impl PostStore for DynamoDbPostStore {
    async fn get_post(&self, post_id: &str) -> Result<Option<PostRecord>> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(KEY_ATTRIBUTE, Self::key(post_id))
            .send()
            .await
            .map_err(|e| map_sdk_error("GetItem", e))?;

        match result.item {
            Some(item) => Ok(Some(PostRecord {
                data: item_to_map(&item)?,
                raw: item_to_native(&item),
            })),
            None => Ok(None),
        }
    }

    async fn scan_posts(&self) -> Result<Vec<PostRecord>> {
        let result = self
            .client
            .scan()
            .table_name(&self.table_name)
            .send()
            .await
            .map_err(|e| map_sdk_error("Scan", e))?;

        let items = result.items.unwrap_or_default();
        items
            .iter()
            .map(|item| {
                Ok(PostRecord {
                    data: item_to_map(item)?,
                    raw: item_to_native(item),
                })
            })
            .collect()
    }

    async fn create_post(&self, item: FieldMap) -> Result<WriteAck> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(map_to_item(&item)))
            .send()
            .await
            .map_err(|e| map_sdk_error("PutItem", e))?;

        Ok(WriteAck::default())
    }

    async fn update_post(&self, post_id: &str, fields: &FieldMap) -> Result<WriteAck> {
        let mut request = self
            .client
            .update_item()
            .table_name(&self.table_name)
            .key(KEY_ATTRIBUTE, Self::key(post_id))
            .update_expression(build_set_expression(fields));

        for (index, (name, value)) in fields.iter().enumerate() {
            request = request
                .expression_attribute_names(format!("#key{index}"), name)
                .expression_attribute_values(format!(":value{index}"), value_to_attribute(value));
        }

        let result = request
            .send()
            .await
            .map_err(|e| map_sdk_error("UpdateItem", e))?;

        Ok(WriteAck {
            attributes: result.attributes.as_ref().map(item_to_map).transpose()?,
        })
    }

    async fn delete_post(&self, post_id: &str) -> Result<WriteAck> {
        // No condition expression: deleting an absent key acknowledges.
        let result = self
            .client
            .delete_item()
            .table_name(&self.table_name)
            .key(KEY_ATTRIBUTE, Self::key(post_id))
            .send()
            .await
            .map_err(|e| map_sdk_error("DeleteItem", e))?;

        Ok(WriteAck {
            attributes: result.attributes.as_ref().map(item_to_map).transpose()?,
        })
    }
}
