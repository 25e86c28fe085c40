//! JSON tree abstraction
//!
//! Message entities never touch a concrete JSON library. Everything they need
//! from a parsed JSON document is expressed by the [`JsonNode`] trait: classify
//! a node, extract primitive values, convert a sub-tree to and from typed
//! application values, and parse or render whole documents.
//!
//! This trait is the single seam between the generic message model and a JSON
//! backend. An adapter crate implements it once for its library of choice
//! (`jbind-serde` does so for `serde_json`) and every accessor, predicate, and
//! service function in this crate works unchanged on top of it.
//!
//! # Ownership
//!
//! Nodes are plain values. A field sub-tree stored inside a message entity is
//! owned exclusively by that entity; handing a node out of an accessor always
//! copies or converts, never shares.

use crate::error::SyntaxError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;

/// Classification of a JSON tree node
///
/// Mirrors the six value kinds of the JSON grammar. Primitive string and
/// number nodes are distinguished because the identifier rules care about
/// exactly that distinction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// The JSON literal `null`
    Null,
    /// `true` or `false`
    Bool,
    /// Any JSON number
    Number,
    /// A JSON string
    String,
    /// A JSON array
    Array,
    /// A JSON object
    Object,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeKind::Null => "null",
            NodeKind::Bool => "bool",
            NodeKind::Number => "number",
            NodeKind::String => "string",
            NodeKind::Array => "array",
            NodeKind::Object => "object",
        };
        f.write_str(name)
    }
}

/// Capability contract over an opaque JSON tree node
///
/// The `Serialize` and `DeserializeOwned` supertraits let message entities
/// hold node-typed fields while still deriving their own serde
/// implementations; any serde-backed JSON value type satisfies them.
///
/// # Failure semantics
///
/// Extraction methods (`as_str`, `as_i64`, ...) return `None` when the node is
/// of a different kind; they never panic and never coerce. Conversion methods
/// (`from_typed`, `to_typed`) fail with a [`SyntaxError`] when the node shape
/// and the target type are incompatible.
pub trait JsonNode: Clone + fmt::Debug + Serialize + DeserializeOwned {
    /// Classify this node.
    fn kind(&self) -> NodeKind;

    /// String value of a string node.
    fn as_str(&self) -> Option<&str>;

    /// Value of a number node that fits an `i64`.
    fn as_i64(&self) -> Option<i64>;

    /// Value of a number node that fits a `u64`.
    fn as_u64(&self) -> Option<u64>;

    /// Decimal literal of a number node, regardless of width.
    ///
    /// Used as the escape hatch for numbers wider than the fixed-size
    /// extraction methods can report.
    fn number_literal(&self) -> Option<String>;

    /// Build a string node.
    fn of_str(value: &str) -> Self;

    /// Build a number node from an `i64`.
    fn of_i64(value: i64) -> Self;

    /// Build a number node from a `u64`.
    fn of_u64(value: u64) -> Self;

    /// Convert an application value into a tree node.
    fn from_typed<T>(value: &T) -> Result<Self, SyntaxError>
    where
        T: Serialize + ?Sized;

    /// Convert this node into an application value.
    fn to_typed<T>(&self) -> Result<T, SyntaxError>
    where
        T: DeserializeOwned;

    /// Parse a JSON document from text.
    fn parse_text(text: &str) -> Result<Self, SyntaxError>;

    /// Parse a JSON document from bytes.
    fn parse_bytes(bytes: &[u8]) -> Result<Self, SyntaxError>;

    /// Render this node as JSON text.
    fn render_text(&self) -> Result<String, SyntaxError>;

    /// Render this node as JSON bytes.
    fn render_bytes(&self) -> Result<Vec<u8>, SyntaxError>;

    /// True for the JSON literal `null`.
    fn is_null(&self) -> bool {
        self.kind() == NodeKind::Null
    }

    /// True for string nodes.
    fn is_string(&self) -> bool {
        self.kind() == NodeKind::String
    }

    /// True for number nodes.
    fn is_number(&self) -> bool {
        self.kind() == NodeKind::Number
    }

    /// True for array nodes.
    fn is_array(&self) -> bool {
        self.kind() == NodeKind::Array
    }

    /// True for object nodes.
    fn is_object(&self) -> bool {
        self.kind() == NodeKind::Object
    }
}
