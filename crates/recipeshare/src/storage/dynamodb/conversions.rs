//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and
//! plain JSON. These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use serde_json::{json, Number, Value};

use recipeshare_core::storage::{FieldMap, Result, StoreError};

/// Convert a JSON value into its DynamoDB attribute encoding.
pub fn value_to_attribute(value: &Value) -> AttributeValue {
    match value {
        Value::Null => AttributeValue::Null(true),
        Value::Bool(flag) => AttributeValue::Bool(*flag),
        Value::Number(number) => AttributeValue::N(number.to_string()),
        Value::String(text) => AttributeValue::S(text.clone()),
        Value::Array(values) => AttributeValue::L(values.iter().map(value_to_attribute).collect()),
        Value::Object(map) => AttributeValue::M(
            map.iter()
                .map(|(name, value)| (name.clone(), value_to_attribute(value)))
                .collect(),
        ),
    }
}

/// Decode a DynamoDB attribute into plain JSON.
///
/// Binary attributes are never written by this service; reading one back is
/// a serialization error rather than a silent drop.
pub fn attribute_to_value(attr: &AttributeValue) -> Result<Value> {
    Ok(match attr {
        AttributeValue::S(text) => Value::String(text.clone()),
        AttributeValue::N(number) => Value::Number(parse_number(number)?),
        AttributeValue::Bool(flag) => Value::Bool(*flag),
        AttributeValue::Null(_) => Value::Null,
        AttributeValue::L(values) => Value::Array(
            values
                .iter()
                .map(attribute_to_value)
                .collect::<Result<_>>()?,
        ),
        AttributeValue::M(map) => Value::Object(
            map.iter()
                .map(|(name, value)| Ok((name.clone(), attribute_to_value(value)?)))
                .collect::<Result<_>>()?,
        ),
        AttributeValue::Ss(values) => json!(values),
        AttributeValue::Ns(values) => Value::Array(
            values
                .iter()
                .map(|number| Ok(Value::Number(parse_number(number)?)))
                .collect::<Result<_>>()?,
        ),
        other => {
            return Err(StoreError::Serialization(format!(
                "unsupported DynamoDB attribute type: {other:?}"
            )))
        }
    })
}

/// Render a DynamoDB attribute in its native wire shape (`{"S": ...}`).
pub fn attribute_to_native(attr: &AttributeValue) -> Value {
    match attr {
        AttributeValue::S(text) => json!({"S": text}),
        AttributeValue::N(number) => json!({"N": number}),
        AttributeValue::Bool(flag) => json!({"BOOL": flag}),
        AttributeValue::Null(flag) => json!({"NULL": flag}),
        AttributeValue::L(values) => {
            json!({"L": values.iter().map(attribute_to_native).collect::<Vec<_>>()})
        }
        AttributeValue::M(map) => Value::Object(
            std::iter::once((
                "M".to_string(),
                Value::Object(
                    map.iter()
                        .map(|(name, value)| (name.clone(), attribute_to_native(value)))
                        .collect(),
                ),
            ))
            .collect(),
        ),
        AttributeValue::Ss(values) => json!({"SS": values}),
        AttributeValue::Ns(values) => json!({"NS": values}),
        // Binary shapes are never produced by this service.
        other => json!({"_unsupported": format!("{other:?}")}),
    }
}

/// Decode a full item into the plain field map.
pub fn item_to_map(item: &HashMap<String, AttributeValue>) -> Result<FieldMap> {
    item.iter()
        .map(|(name, value)| Ok((name.clone(), attribute_to_value(value)?)))
        .collect()
}

/// Render a full item in its native wire shape.
pub fn item_to_native(item: &HashMap<String, AttributeValue>) -> Value {
    Value::Object(
        item.iter()
            .map(|(name, value)| (name.clone(), attribute_to_native(value)))
            .collect(),
    )
}

/// Marshal a field map into a DynamoDB item.
pub fn map_to_item(map: &FieldMap) -> HashMap<String, AttributeValue> {
    map.iter()
        .map(|(name, value)| (name.clone(), value_to_attribute(value)))
        .collect()
}

fn parse_number(number: &str) -> Result<Number> {
    number.parse().map_err(|_| {
        StoreError::Serialization(format!("invalid numeric attribute: {number}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_to_attribute_scalars() {
        assert_eq!(
            value_to_attribute(&json!("Chili")),
            AttributeValue::S("Chili".to_string())
        );
        assert_eq!(
            value_to_attribute(&json!(4)),
            AttributeValue::N("4".to_string())
        );
        assert_eq!(value_to_attribute(&json!(true)), AttributeValue::Bool(true));
        assert_eq!(value_to_attribute(&Value::Null), AttributeValue::Null(true));
    }

    #[test]
    fn test_value_to_attribute_nested() {
        let attr = value_to_attribute(&json!({"tags": ["spicy", 2]}));

        let AttributeValue::M(map) = attr else {
            panic!("expected map attribute");
        };
        assert_eq!(
            map["tags"],
            AttributeValue::L(vec![
                AttributeValue::S("spicy".to_string()),
                AttributeValue::N("2".to_string()),
            ])
        );
    }

    #[test]
    fn test_attribute_round_trip() {
        let value = json!({
            "postId": "abc-123",
            "recipeIngredients": ["Beans", {"pepper": true}],
            "servings": 4.5,
        });

        let decoded = attribute_to_value(&value_to_attribute(&value)).unwrap();
        assert_eq!(decoded, value);
    }

    #[test]
    fn test_attribute_to_value_rejects_binary() {
        let attr = AttributeValue::B(aws_sdk_dynamodb::primitives::Blob::new(vec![1, 2]));
        let result = attribute_to_value(&attr);
        assert!(matches!(result, Err(StoreError::Serialization(_))));
    }

    #[test]
    fn test_attribute_to_native_shapes() {
        assert_eq!(
            attribute_to_native(&AttributeValue::S("Chili".to_string())),
            json!({"S": "Chili"})
        );
        assert_eq!(
            attribute_to_native(&AttributeValue::N("4".to_string())),
            json!({"N": "4"})
        );
        assert_eq!(
            attribute_to_native(&AttributeValue::L(vec![AttributeValue::Bool(false)])),
            json!({"L": [{"BOOL": false}]})
        );
    }

    #[test]
    fn test_item_to_native_wraps_every_field() {
        let mut item = HashMap::new();
        item.insert(
            "postId".to_string(),
            AttributeValue::S("abc-123".to_string()),
        );
        item.insert("servings".to_string(), AttributeValue::N("4".to_string()));

        assert_eq!(
            item_to_native(&item),
            json!({"postId": {"S": "abc-123"}, "servings": {"N": "4"}})
        );
    }

    #[test]
    fn test_map_to_item_and_back() {
        let mut map = FieldMap::new();
        map.insert("postId".to_string(), json!("abc-123"));
        map.insert("recipeName".to_string(), json!("Chili"));

        let item = map_to_item(&map);
        assert_eq!(item_to_map(&item).unwrap(), map);
    }
}
