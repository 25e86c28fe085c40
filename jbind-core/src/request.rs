//! JSON-RPC 2.0 request message
//!
//! A request names a method to invoke and optionally carries parameters and
//! an identifier. A request without an identifier is a notification: no
//! response will correlate with it.
//!
//! Field sub-trees are stored opaquely and converted lazily. Deserializing a
//! request never validates field shapes eagerly; the contextual predicates
//! and typed accessors do that on demand.

use crate::coerce;
use crate::error::{BindError, Result};
use crate::message::{Message, VERSION};
use crate::node::JsonNode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// JSON-RPC 2.0 request message
///
/// A typed view over the wire object `{"jsonrpc", "method", "params", "id"}`.
/// The `params` member, when present, must be an array or an object; the
/// accessors expose it either way through the array-or-object convention.
///
/// # Examples
///
/// ```rust
/// use jbind_core::Message;
/// use jbind_serde::Request;
///
/// let mut request = Request::new();
/// request.set_method("subtract");
/// request.set_id_i64(1);
/// request.set_params_array(&[42, 23]).unwrap();
///
/// assert!(request.has_params());
/// assert_eq!(request.params_as_array::<i32>().unwrap(), Some(vec![42, 23]));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound = "N: JsonNode")]
pub struct Request<N: JsonNode> {
    /// Protocol version, always "2.0"
    #[serde(default = "crate::message::default_version")]
    jsonrpc: String,
    /// Name of the method to invoke; opaque to this crate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    method: Option<String>,
    /// Identifier sub-tree
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<N>,
    /// Parameters sub-tree
    #[serde(default, skip_serializing_if = "Option::is_none")]
    params: Option<N>,
}

impl<N: JsonNode> Default for Request<N> {
    fn default() -> Self {
        Self {
            jsonrpc: VERSION.to_owned(),
            method: None,
            id: None,
            params: None,
        }
    }
}

impl<N: JsonNode> Request<N> {
    /// Create an empty request with all optional fields absent.
    pub fn new() -> Self {
        Self::default()
    }

    /// The method name, if one is set.
    pub fn method(&self) -> Option<&str> {
        self.method.as_deref()
    }

    /// Set the method name.
    pub fn set_method(&mut self, method: impl Into<String>) {
        self.method = Some(method.into());
    }

    /// True when parameters are present (absent and `null` both count as
    /// missing).
    pub fn has_params(&self) -> bool {
        coerce::present_then_check(self.params.as_ref(), false, |_| true)
    }

    /// True when the parameters, if present, are an array or an object.
    pub fn is_params_contextually_valid(&self) -> bool {
        coerce::present_then_check(self.params.as_ref(), true, |params| {
            params.is_array() || params.is_object()
        })
    }

    /// Read the parameters as a vector of `T`.
    ///
    /// An array converts element-wise; a single compound value converts once
    /// and is returned as a one-element vector.
    pub fn params_as_array<T>(&self) -> Result<Option<Vec<T>>>
    where
        T: DeserializeOwned,
    {
        coerce::present_then_map(self.params.as_ref(), |params| {
            coerce::node_as_vec("params", params)
        })
    }

    /// Read the parameters as a single typed value.
    pub fn params_as_object<T>(&self) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        coerce::present_then_map(self.params.as_ref(), |params| {
            coerce::node_as_typed("params", params)
        })
    }

    /// Store positional parameters.
    pub fn set_params_array<T>(&mut self, params: &[T]) -> Result<()>
    where
        T: Serialize,
    {
        self.params =
            Some(N::from_typed(params).map_err(|source| BindError::field("params", source))?);
        Ok(())
    }

    /// Store named (or otherwise structured) parameters.
    pub fn set_params_object<T>(&mut self, params: &T) -> Result<()>
    where
        T: Serialize + ?Sized,
    {
        self.params =
            Some(N::from_typed(params).map_err(|source| BindError::field("params", source))?);
        Ok(())
    }

    /// Remove the parameters.
    pub fn clear_params(&mut self) {
        self.params = None;
    }
}

impl<N: JsonNode> Message<N> for Request<N> {
    fn jsonrpc(&self) -> &str {
        &self.jsonrpc
    }

    fn id_slot(&self) -> Option<&N> {
        self.id.as_ref()
    }

    fn id_slot_mut(&mut self) -> &mut Option<N> {
        &mut self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jbind_serde::Json;
    use serde::Deserialize;
    use serde_json::json;

    type TestRequest = Request<Json>;

    #[derive(Debug, Deserialize, PartialEq)]
    struct NamedParams {
        minuend: i32,
        subtrahend: i32,
    }

    #[test]
    fn absent_params_are_vacuously_valid() {
        let request = TestRequest::new();
        assert!(!request.has_params());
        assert!(request.is_params_contextually_valid());
        assert_eq!(request.params_as_array::<i32>().unwrap(), None);
    }

    #[test]
    fn positional_params_read_back_element_wise() {
        let mut request = TestRequest::new();
        request.set_params_array(&[42, 23]).unwrap();
        assert!(request.is_params_contextually_valid());
        assert_eq!(
            request.params_as_array::<i64>().unwrap(),
            Some(vec![42, 23])
        );
    }

    #[test]
    fn named_params_read_back_as_an_object() {
        let mut request = TestRequest::new();
        request
            .set_params_object(&json!({"minuend": 42, "subtrahend": 23}))
            .unwrap();
        let named: Option<NamedParams> = request.params_as_object().unwrap();
        assert_eq!(
            named,
            Some(NamedParams {
                minuend: 42,
                subtrahend: 23
            })
        );
    }

    #[test]
    fn object_params_wrap_into_a_one_element_array_read() {
        let mut request = TestRequest::new();
        request
            .set_params_object(&json!({"minuend": 42, "subtrahend": 23}))
            .unwrap();
        let wrapped: Option<Vec<NamedParams>> = request.params_as_array().unwrap();
        assert_eq!(wrapped.map(|list| list.len()), Some(1));
    }

    #[test]
    fn primitive_params_are_contextually_invalid() {
        let mut request = TestRequest::new();
        request.set_params_object(&19).unwrap();
        assert!(request.has_params());
        assert!(!request.is_params_contextually_valid());
    }

    #[test]
    fn set_then_get_is_a_no_op_round_trip() {
        let mut request = TestRequest::new();
        request.set_params_array(&["a", "b"]).unwrap();
        let first = request.params_as_array::<String>().unwrap();
        request
            .set_params_array(&first.clone().unwrap())
            .unwrap();
        assert_eq!(request.params_as_array::<String>().unwrap(), first);
    }

    #[test]
    fn method_is_an_opaque_string() {
        let mut request = TestRequest::new();
        assert_eq!(request.method(), None);
        request.set_method("sum");
        assert_eq!(request.method(), Some("sum"));
    }

    #[test]
    fn wire_shape_omits_absent_members() {
        let mut request = TestRequest::new();
        request.set_method("ping");
        let text = serde_json::to_string(&request).unwrap();
        assert!(text.contains("\"jsonrpc\":\"2.0\""));
        assert!(text.contains("\"method\":\"ping\""));
        assert!(!text.contains("\"id\""));
        assert!(!text.contains("\"params\""));
    }
}
