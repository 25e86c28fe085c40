//! Error types for jbind
//!
//! Two kinds of failure exist in this crate, and they are deliberately kept
//! apart:
//!
//! - **`SyntaxError`**: a JSON sub-tree could not be converted to the
//!   requested shape or type. Raised by the tree abstraction itself (wrong
//!   node kind, malformed JSON text, numeric overflow).
//! - **`BindError`**: the stable error kind surfaced at the message-accessor
//!   boundary. It wraps a `SyntaxError` (plus the field name, where one is
//!   known) so callers see a single error type no matter which JSON backend
//!   sits underneath.
//!
//! Contextual *invalidity* is not an error. Predicates such as
//! `is_id_contextually_valid` return plain booleans; only a value that cannot
//! be converted at all produces an `Err`.
//!
//! # Examples
//!
//! ```rust
//! use jbind_core::{BindError, SyntaxError, NodeKind};
//!
//! let source = SyntaxError::UnexpectedKind {
//!     expected: "string or number",
//!     found: NodeKind::Bool,
//! };
//! let error = BindError::field("id", source);
//! assert!(error.to_string().contains("id"));
//! ```

use crate::node::NodeKind;
use thiserror::Error;

/// Result type for jbind operations
///
/// Convenience alias used throughout the jbind crates for consistent error
/// handling.
pub type Result<T> = std::result::Result<T, BindError>;

/// A JSON sub-tree could not be converted to the requested target
///
/// These errors originate in the tree abstraction: the node exists, but its
/// shape or value is incompatible with what the caller asked for. Backend
/// error details are carried as strings so this type stays independent of any
/// concrete JSON library.
#[derive(Debug, Clone, Error)]
pub enum SyntaxError {
    /// The node is of a kind the requested conversion cannot accept,
    /// for example reading a boolean where a string or number is required.
    #[error("expected {expected}, found {found}")]
    UnexpectedKind {
        /// Description of the acceptable node kinds
        expected: &'static str,
        /// The kind actually found
        found: NodeKind,
    },

    /// A numeric or string literal could not be parsed as an integer
    ///
    /// Covers both non-numeric text and decimal values wider than 128 bits.
    #[error("invalid integer literal `{literal}`: {source}")]
    InvalidInteger {
        /// The literal as it appeared in the tree
        literal: String,
        /// The parse failure
        source: std::num::ParseIntError,
    },

    /// An integer value does not fit the requested fixed-width target
    #[error("number out of range for {target}: {literal}")]
    NumberOutOfRange {
        /// Name of the target type, e.g. "i64"
        target: &'static str,
        /// Decimal rendering of the offending value
        literal: String,
    },

    /// Input text or bytes are not well-formed JSON
    #[error("malformed JSON: {0}")]
    Malformed(String),

    /// The backend refused the tree-to-value (or value-to-tree) conversion
    ///
    /// Typically a structural mismatch, such as deserializing an object into
    /// a type that expects different members.
    #[error("incompatible value: {0}")]
    Incompatible(String),
}

/// Binding failure surfaced at the message-accessor boundary
///
/// Every typed accessor and every service function returns this type. A
/// conversion failure is never swallowed or defaulted; absence, by contrast,
/// is not a failure at all and is reported as `Ok(None)`.
#[derive(Debug, Clone, Error)]
pub enum BindError {
    /// A named message field could not be read or written as requested
    #[error("cannot bind field `{field}`: {source}")]
    Field {
        /// JSON member name, e.g. "id" or "params"
        field: &'static str,
        /// The underlying conversion failure
        source: SyntaxError,
    },

    /// A whole message could not be bound to or from a tree
    #[error("cannot bind message: {0}")]
    Syntax(#[from] SyntaxError),

    /// Reading from a source or writing to a sink failed
    ///
    /// Only the service boundary produces this variant; pure in-memory
    /// accessors never perform I/O.
    #[error("IO error: {0}")]
    Io(String),
}

impl BindError {
    /// Wrap a conversion failure with the name of the field it occurred on.
    pub fn field(field: &'static str, source: SyntaxError) -> Self {
        BindError::Field { field, source }
    }

    /// The underlying `SyntaxError`, if this failure carries one.
    pub fn syntax(&self) -> Option<&SyntaxError> {
        match self {
            BindError::Field { source, .. } => Some(source),
            BindError::Syntax(source) => Some(source),
            BindError::Io(_) => None,
        }
    }
}
