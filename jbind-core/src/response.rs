//! JSON-RPC 2.0 response message
//!
//! A response correlates with a request through its identifier and carries
//! exactly one of `result` or `error`. Both present and both absent are
//! invalid states; the exclusivity predicate reports either as a violation
//! rather than guessing which member to trust.

use crate::coerce;
use crate::error::{BindError, Result};
use crate::message::{Message, VERSION};
use crate::node::JsonNode;
use crate::response_error::ResponseError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// JSON-RPC 2.0 response message
///
/// A typed view over the wire object `{"jsonrpc", "result", "error", "id"}`.
/// The `result` member may be any JSON value; the `error` member, when
/// present, must be an object with `code` and `message`. Both are stored as
/// opaque sub-trees and converted lazily.
///
/// # Examples
///
/// ```rust
/// use jbind_core::Message;
/// use jbind_serde::Response;
///
/// let mut response = Response::new();
/// response.set_id_i64(1);
/// response.set_result_object(&19).unwrap();
///
/// assert!(response.has_result());
/// assert!(!response.has_error());
/// assert!(response.is_result_and_error_exclusive());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound = "N: JsonNode")]
pub struct Response<N: JsonNode> {
    /// Protocol version, always "2.0"
    #[serde(default = "crate::message::default_version")]
    jsonrpc: String,
    /// Result sub-tree, mutually exclusive with `error`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    result: Option<N>,
    /// Error sub-tree, mutually exclusive with `result`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<N>,
    /// Identifier sub-tree
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<N>,
}

impl<N: JsonNode> Default for Response<N> {
    fn default() -> Self {
        Self {
            jsonrpc: VERSION.to_owned(),
            result: None,
            error: None,
            id: None,
        }
    }
}

impl<N: JsonNode> Response<N> {
    /// Create an empty response with all optional fields absent.
    pub fn new() -> Self {
        Self::default()
    }

    /// True when exactly one of `result` and `error` is present.
    ///
    /// Both present and both absent are violations.
    pub fn is_result_and_error_exclusive(&self) -> bool {
        self.has_result() != self.has_error()
    }

    /// True when a result is present (absent and `null` both count as
    /// missing).
    pub fn has_result(&self) -> bool {
        coerce::present_then_check(self.result.as_ref(), false, |_| true)
    }

    /// True when the result, if present, has an acceptable shape.
    ///
    /// Any JSON value is an acceptable result, so a present result is always
    /// valid; the predicate exists so response validity composes uniformly
    /// over its fields.
    pub fn is_result_contextually_valid(&self) -> bool {
        coerce::present_then_check(self.result.as_ref(), true, |_| true)
    }

    /// Read the result as a vector of `T`.
    ///
    /// An array converts element-wise; a single value converts once and is
    /// returned as a one-element vector.
    pub fn result_as_array<T>(&self) -> Result<Option<Vec<T>>>
    where
        T: DeserializeOwned,
    {
        coerce::present_then_map(self.result.as_ref(), |result| {
            coerce::node_as_vec("result", result)
        })
    }

    /// Read the result as a single typed value.
    pub fn result_as_object<T>(&self) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        coerce::present_then_map(self.result.as_ref(), |result| {
            coerce::node_as_typed("result", result)
        })
    }

    /// Store a positional result.
    pub fn set_result_array<T>(&mut self, result: &[T]) -> Result<()>
    where
        T: Serialize,
    {
        self.result =
            Some(N::from_typed(result).map_err(|source| BindError::field("result", source))?);
        Ok(())
    }

    /// Store a single result value.
    pub fn set_result_object<T>(&mut self, result: &T) -> Result<()>
    where
        T: Serialize + ?Sized,
    {
        self.result =
            Some(N::from_typed(result).map_err(|source| BindError::field("result", source))?);
        Ok(())
    }

    /// Remove the result.
    pub fn clear_result(&mut self) {
        self.result = None;
    }

    /// True when an error is present.
    pub fn has_error(&self) -> bool {
        coerce::present_then_check(self.error.as_ref(), false, |_| true)
    }

    /// True when the error, if present, is a JSON object.
    pub fn is_error_contextually_valid(&self) -> bool {
        coerce::present_then_check(self.error.as_ref(), true, |error| error.is_object())
    }

    /// Read the error as a caller-chosen type.
    ///
    /// Useful when an application extends the error object with members of
    /// its own; most callers want [`Response::error_default`] instead.
    pub fn error_as<T>(&self) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        coerce::present_then_map(self.error.as_ref(), |error| {
            coerce::node_as_typed("error", error)
        })
    }

    /// Read the error as this crate's [`ResponseError`] type.
    pub fn error_default(&self) -> Result<Option<ResponseError<N>>> {
        self.error_as()
    }

    /// Store an error object.
    pub fn set_error(&mut self, error: &ResponseError<N>) -> Result<()> {
        self.error =
            Some(N::from_typed(error).map_err(|source| BindError::field("error", source))?);
        Ok(())
    }

    /// Remove the error.
    pub fn clear_error(&mut self) {
        self.error = None;
    }
}

impl<N: JsonNode> Message<N> for Response<N> {
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
