use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::storage::FieldMap;

/// A recipe post, keyed by its server-generated `postId`.
///
/// All recipe fields are free-form and optional on the wire; the service
/// performs no presence validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub post_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipe_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipe_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipe_instructions: Option<String>,
    /// Free-form value (string or structured), stored as-is.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipe_ingredients: Option<Value>,
}

/// Creation payload.
///
/// `postId` is never accepted from the caller; it is generated when the
/// payload is turned into a [`Post`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePost {
    pub recipe_name: Option<String>,
    pub recipe_description: Option<String>,
    pub recipe_instructions: Option<String>,
    pub recipe_ingredients: Option<Value>,
}

impl Post {
    /// Creates a post from a creation payload, generating a fresh `postId`.
    pub fn from_payload(payload: CreatePost) -> Self {
        Self {
            post_id: Uuid::new_v4().to_string(),
            recipe_name: payload.recipe_name,
            recipe_description: payload.recipe_description,
            recipe_instructions: payload.recipe_instructions,
            recipe_ingredients: payload.recipe_ingredients,
        }
    }

    /// Converts the post into the schema-less item map the stores operate on.
    ///
    /// Absent fields are omitted from the item rather than stored as nulls.
    pub fn into_item(self) -> FieldMap {
        let mut item = FieldMap::new();
        item.insert("postId".to_string(), Value::String(self.post_id));
        if let Some(name) = self.recipe_name {
            item.insert("recipeName".to_string(), Value::String(name));
        }
        if let Some(description) = self.recipe_description {
            item.insert("recipeDescription".to_string(), Value::String(description));
        }
        if let Some(instructions) = self.recipe_instructions {
            item.insert(
                "recipeInstructions".to_string(),
                Value::String(instructions),
            );
        }
        if let Some(ingredients) = self.recipe_ingredients {
            item.insert("recipeIngredients".to_string(), ingredients);
        }
        item
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload() -> CreatePost {
        CreatePost {
            recipe_name: Some("Chili".to_string()),
            recipe_description: Some("Spicy".to_string()),
            recipe_instructions: Some("Cook".to_string()),
            recipe_ingredients: Some(json!("Beans")),
        }
    }

    #[test]
    fn test_from_payload_generates_unique_ids() {
        let first = Post::from_payload(payload());
        let second = Post::from_payload(payload());
        assert_ne!(first.post_id, second.post_id);
        assert!(!first.post_id.is_empty());
    }

    #[test]
    fn test_into_item_carries_all_fields() {
        let post = Post::from_payload(payload());
        let post_id = post.post_id.clone();
        let item = post.into_item();

        assert_eq!(item["postId"], json!(post_id));
        assert_eq!(item["recipeName"], json!("Chili"));
        assert_eq!(item["recipeDescription"], json!("Spicy"));
        assert_eq!(item["recipeInstructions"], json!("Cook"));
        assert_eq!(item["recipeIngredients"], json!("Beans"));
    }

    #[test]
    fn test_into_item_skips_absent_fields() {
        let post = Post::from_payload(CreatePost::default());
        let item = post.into_item();

        assert_eq!(item.len(), 1);
        assert!(item.contains_key("postId"));
    }

    #[test]
    fn test_payload_accepts_structured_ingredients() {
        let payload: CreatePost = serde_json::from_value(json!({
            "recipeName": "Chili",
            "recipeIngredients": ["Beans", "Peppers"],
        }))
        .unwrap();

        assert_eq!(payload.recipe_name.as_deref(), Some("Chili"));
        assert_eq!(payload.recipe_ingredients, Some(json!(["Beans", "Peppers"])));
        assert!(payload.recipe_description.is_none());
    }

    #[test]
    fn test_post_wire_names_are_camel_case() {
        let post = Post {
            post_id: "abc-123".to_string(),
            recipe_name: Some("Chili".to_string()),
            recipe_description: None,
            recipe_instructions: None,
            recipe_ingredients: None,
        };

        let value = serde_json::to_value(&post).unwrap();
        assert_eq!(value, json!({"postId": "abc-123", "recipeName": "Chili"}));
    }
}
