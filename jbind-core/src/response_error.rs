//! JSON-RPC 2.0 error object
//!
//! The object carried in a response's `error` member. `code` and `message`
//! are mandatory and accessed directly; `data` is optional, has no shape
//! constraint, and is exposed through the same array-or-object convention as
//! the other polymorphic fields.

use crate::coerce;
use crate::error::{BindError, Result};
use crate::node::JsonNode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;

/// JSON-RPC 2.0 error object
///
/// # Error codes
///
/// The protocol reserves codes from `-32768` to `-32000` and predefines:
///
/// - `-32700`: Parse error
/// - `-32600`: Invalid Request
/// - `-32601`: Method not found
/// - `-32602`: Invalid params
/// - `-32603`: Internal error
/// - `-32000` to `-32099`: Server error (implementation-defined)
///
/// Applications are free to use any code outside the reserved range.
///
/// # Examples
///
/// ```rust
/// use jbind_serde::ResponseError;
///
/// let error = ResponseError::method_not_found("calculate");
/// assert_eq!(error.code(), ResponseError::CODE_METHOD_NOT_FOUND);
/// assert!(error.is_code_reserved());
/// assert!(!error.has_data());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound = "N: JsonNode")]
pub struct ResponseError<N: JsonNode> {
    /// Numeric error code
    code: i64,
    /// Short human-readable error description
    message: String,
    /// Optional additional information of unrestricted shape
    #[serde(default, skip_serializing_if = "Option::is_none")]
    data: Option<N>,
}

impl<N: JsonNode> ResponseError<N> {
    /// Parse error code (-32700)
    pub const CODE_PARSE_ERROR: i64 = -32700;
    /// Invalid Request code (-32600)
    pub const CODE_INVALID_REQUEST: i64 = -32600;
    /// Method not found code (-32601)
    pub const CODE_METHOD_NOT_FOUND: i64 = -32601;
    /// Invalid params code (-32602)
    pub const CODE_INVALID_PARAMS: i64 = -32602;
    /// Internal error code (-32603)
    pub const CODE_INTERNAL_ERROR: i64 = -32603;
    /// Lower bound of the reserved code range, inclusive
    pub const CODE_RESERVED_MIN: i64 = -32768;
    /// Upper bound of the reserved code range, inclusive
    pub const CODE_RESERVED_MAX: i64 = -32000;

    /// Create an error object with a code and a message.
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }

    /// Create an error object carrying additional data.
    pub fn with_data<T>(code: i64, message: impl Into<String>, data: &T) -> Result<Self>
    where
        T: Serialize + ?Sized,
    {
        Ok(Self {
            code,
            message: message.into(),
            data: Some(N::from_typed(data).map_err(|source| BindError::field("data", source))?),
        })
    }

    /// Create a parse error (-32700).
    pub fn parse_error() -> Self {
        Self::new(Self::CODE_PARSE_ERROR, "Parse error")
    }

    /// Create an invalid request error (-32600).
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(Self::CODE_INVALID_REQUEST, message)
    }

    /// Create a method not found error (-32601).
    pub fn method_not_found(method: impl Into<String>) -> Self {
        Self::new(
            Self::CODE_METHOD_NOT_FOUND,
            format!("Method not found: {}", method.into()),
        )
    }

    /// Create an invalid params error (-32602).
    pub fn invalid_params(message: impl Into<String>) -> Self {
        Self::new(Self::CODE_INVALID_PARAMS, message)
    }

    /// Create an internal error (-32603).
    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new(Self::CODE_INTERNAL_ERROR, message)
    }

    /// The error code.
    pub fn code(&self) -> i64 {
        self.code
    }

    /// Replace the error code.
    pub fn set_code(&mut self, code: i64) {
        self.code = code;
    }

    /// The error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Replace the error message.
    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    /// True when the code falls in the range the protocol reserves.
    pub fn is_code_reserved(&self) -> bool {
        (Self::CODE_RESERVED_MIN..=Self::CODE_RESERVED_MAX).contains(&self.code)
    }

    /// True when additional data is present (absent and `null` both count as
    /// missing).
    pub fn has_data(&self) -> bool {
        coerce::present_then_check(self.data.as_ref(), false, |_| true)
    }

    /// True when the data, if present, has an acceptable shape.
    ///
    /// Data is unrestricted, so this is always true; it exists so error
    /// validity composes uniformly over its fields.
    pub fn is_data_contextually_valid(&self) -> bool {
        coerce::present_then_check(self.data.as_ref(), true, |_| true)
    }

    /// Read the data as a vector of `T`.
    pub fn data_as_array<T>(&self) -> Result<Option<Vec<T>>>
    where
        T: DeserializeOwned,
    {
        coerce::present_then_map(self.data.as_ref(), |data| coerce::node_as_vec("data", data))
    }

    /// Read the data as a single typed value.
    pub fn data_as_object<T>(&self) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        coerce::present_then_map(self.data.as_ref(), |data| {
            coerce::node_as_typed("data", data)
        })
    }

    /// Store positional data.
    pub fn set_data_array<T>(&mut self, data: &[T]) -> Result<()>
    where
        T: Serialize,
    {
        self.data = Some(N::from_typed(data).map_err(|source| BindError::field("data", source))?);
        Ok(())
    }

    /// Store a single data value.
    pub fn set_data_object<T>(&mut self, data: &T) -> Result<()>
    where
        T: Serialize + ?Sized,
    {
        self.data = Some(N::from_typed(data).map_err(|source| BindError::field("data", source))?);
        Ok(())
    }

    /// Remove the data.
    pub fn clear_data(&mut self) {
        self.data = None;
    }
}

impl<N: JsonNode> fmt::Display for ResponseError<N> {
    /// Formats as `[code] message`, convenient for logs.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl<N: JsonNode> std::error::Error for ResponseError<N> {}
