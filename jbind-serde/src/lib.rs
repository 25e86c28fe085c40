//! serde_json backend adapter for jbind
//!
//! The generic message model in `jbind-core` is written against an abstract
//! JSON tree. This crate closes the loop for `serde_json`:
//!
//! - **Tree**: [`Json`], a transparent wrapper over `serde_json::Value`
//!   implementing the node contract
//! - **Aliases**: [`Request`], [`Response`], and [`ResponseError`] with the
//!   tree type fixed
//! - **Config**: the process-wide render configuration
//! - **Services**: read/write functions for text, bytes, streams, and trees
//!
//! # Example
//!
//! ```rust
//! use jbind_core::Message;
//! use jbind_serde::service;
//!
//! let response = service::response_from_str(
//!     r#"{"jsonrpc":"2.0","result":19,"id":3}"#,
//! ).unwrap();
//!
//! assert!(response.has_result());
//! assert_eq!(response.id_as_string().unwrap().as_deref(), Some("3"));
//! assert_eq!(response.result_as_array::<i32>().unwrap(), Some(vec![19]));
//! ```

pub mod config;
pub mod service;
pub mod tree;

pub use tree::Json;

// Entity aliases with the tree type fixed to the serde_json backend
/// Request message bound to the serde_json backend
pub type Request = jbind_core::Request<Json>;
/// Response message bound to the serde_json backend
pub type Response = jbind_core::Response<Json>;
/// Error object bound to the serde_json backend
pub type ResponseError = jbind_core::ResponseError<Json>;

// Re-export the shared surface so adapter users need a single import
pub use jbind_core::{BindError, Message, Result, SyntaxError};
