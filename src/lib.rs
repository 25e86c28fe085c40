//! jbind - JSON-RPC 2.0 message binding
//!
//! This is the main convenience crate that re-exports all jbind sub-crates.
//! Use this crate if you want a single dependency covering the message model
//! and the serde_json backend.
//!
//! # Architecture
//!
//! jbind is organized into modular crates:
//!
//! - **jbind-core**: the generic message model: entities, field coercion,
//!   contextual validation, error taxonomy, service boundary
//! - **jbind-serde**: the serde_json backend adapter: tree type, entity
//!   aliases, render configuration, concrete services
//!
//! # Quick Start - Binding a message
//!
//! ```rust
//! use jbind::{Message, Request};
//!
//! let request: Request = jbind::json::service::request_from_str(
//!     r#"{"jsonrpc":"2.0","method":"subtract","params":[42,23],"id":1}"#,
//! ).unwrap();
//!
//! assert_eq!(request.method(), Some("subtract"));
//! assert_eq!(request.id_as_i64().unwrap(), Some(1));
//! assert_eq!(request.params_as_array::<i32>().unwrap(), Some(vec![42, 23]));
//! ```
//!
//! # Quick Start - Building a response
//!
//! ```rust
//! use jbind::{Message, Response, ResponseError};
//!
//! let mut response = Response::new();
//! response.set_id_i64(1);
//! response.set_error(&ResponseError::method_not_found("subtractt")).unwrap();
//!
//! assert!(response.is_result_and_error_exclusive());
//! let text = jbind::json::service::response_to_string(&response).unwrap();
//! assert!(text.contains("-32601"));
//! ```

// Re-export all public APIs from sub-crates
// This allows users to access everything through the `jbind::` prefix
pub use jbind_core as core;
pub use jbind_serde as json;

// Convenience re-exports of the most commonly used types
pub use jbind_core::{BindError, Message, NodeKind, Result, SyntaxError};
pub use jbind_serde::{Json, Request, Response, ResponseError};
