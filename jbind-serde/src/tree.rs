//! serde_json tree node
//!
//! [`Json`] wraps `serde_json::Value` and implements the node contract the
//! generic message model is written against. The wrapper is transparent for
//! serde purposes, so a `Json` serializes and deserializes exactly like the
//! value it holds.

use jbind_core::{JsonNode, NodeKind, SyntaxError};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A `serde_json::Value` behind the jbind node contract
///
/// The inner value is public; unwrap it whenever a raw `serde_json` tree is
/// more convenient, or convert with `From` in either direction.
///
/// # Examples
///
/// ```rust
/// use jbind_core::JsonNode;
/// use jbind_serde::Json;
///
/// let node = Json::from(serde_json::json!({"minuend": 42}));
/// assert!(node.is_object());
/// assert_eq!(node.kind().to_string(), "object");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Json(pub Value);

impl From<Value> for Json {
    fn from(value: Value) -> Self {
        Json(value)
    }
}

impl From<Json> for Value {
    fn from(node: Json) -> Self {
        node.0
    }
}

impl JsonNode for Json {
    fn kind(&self) -> NodeKind {
        match &self.0 {
            Value::Null => NodeKind::Null,
            Value::Bool(_) => NodeKind::Bool,
            Value::Number(_) => NodeKind::Number,
            Value::String(_) => NodeKind::String,
            Value::Array(_) => NodeKind::Array,
            Value::Object(_) => NodeKind::Object,
        }
    }

    fn as_str(&self) -> Option<&str> {
        self.0.as_str()
    }

    fn as_i64(&self) -> Option<i64> {
        self.0.as_i64()
    }

    fn as_u64(&self) -> Option<u64> {
        self.0.as_u64()
    }

    fn number_literal(&self) -> Option<String> {
        match &self.0 {
            Value::Number(number) => Some(number.to_string()),
            _ => None,
        }
    }

    fn of_str(value: &str) -> Self {
        Json(Value::String(value.to_owned()))
    }

    fn of_i64(value: i64) -> Self {
        Json(Value::from(value))
    }

    fn of_u64(value: u64) -> Self {
        Json(Value::from(value))
    }

    fn from_typed<T>(value: &T) -> Result<Self, SyntaxError>
    where
        T: Serialize + ?Sized,
    {
        serde_json::to_value(value)
            .map(Json)
            .map_err(|e| SyntaxError::Incompatible(e.to_string()))
    }

    fn to_typed<T>(&self) -> Result<T, SyntaxError>
    where
        T: DeserializeOwned,
    {
        T::deserialize(&self.0).map_err(|e| SyntaxError::Incompatible(e.to_string()))
    }

    fn parse_text(text: &str) -> Result<Self, SyntaxError> {
        serde_json::from_str(text).map_err(|e| SyntaxError::Malformed(e.to_string()))
    }

    fn parse_bytes(bytes: &[u8]) -> Result<Self, SyntaxError> {
        serde_json::from_slice(bytes).map_err(|e| SyntaxError::Malformed(e.to_string()))
    }

    fn render_text(&self) -> Result<String, SyntaxError> {
        serde_json::to_string(&self.0).map_err(|e| SyntaxError::Incompatible(e.to_string()))
    }

    fn render_bytes(&self) -> Result<Vec<u8>, SyntaxError> {
        serde_json::to_vec(&self.0).map_err(|e| SyntaxError::Incompatible(e.to_string()))
    }
}
