use serde::Serialize;
use serde_json::Value;

/// A schema-less item map: arbitrary field names to JSON values.
///
/// Stores operate on maps rather than on [`crate::post::Post`] because the
/// update operation may set arbitrary field names.
pub type FieldMap = serde_json::Map<String, Value>;

/// One stored item as returned by read operations.
#[derive(Debug, Clone, PartialEq)]
pub struct PostRecord {
    /// The decoded item, plain JSON fields.
    pub data: FieldMap,
    /// The store's native encoding of the same item (for DynamoDB, the
    /// AttributeValue wire shape). Surfaced verbatim as `rawData`/`Items`.
    pub raw: Value,
}

/// Opaque acknowledgement returned by write operations.
///
/// Serialized into the response envelope as-is; typically an empty object.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WriteAck {
    /// Attributes echoed back by the store, when the backend provides any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<FieldMap>,
}
