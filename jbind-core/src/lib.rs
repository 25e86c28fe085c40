//! Generic JSON-RPC 2.0 message model for jbind
//!
//! This crate provides the message data model of the JSON-RPC 2.0
//! specification (<https://www.jsonrpc.org/specification>) without committing
//! to a JSON library. It includes:
//!
//! - **Node abstraction**: the [`JsonNode`] trait, the single seam to a
//!   concrete JSON backend
//! - **Entities**: [`Request`], [`Response`], and [`ResponseError`], typed
//!   views over opaque field sub-trees
//! - **Coercion**: shared has/validate/get/set logic for the polymorphic
//!   fields (`id`, `params`, `result`, `error.data`)
//! - **Validation**: pure contextual predicates composed per entity
//! - **Service boundary**: tree-normalizing conversion against byte, text,
//!   and stream sources and sinks
//!
//! # Architecture
//!
//! Everything here is written once against [`JsonNode`]. A backend adapter
//! implements that trait for its JSON value type and the whole model comes
//! along unchanged; `jbind-serde` is the adapter for `serde_json`.
//!
//! Field values are stored as opaque sub-trees and converted lazily. Reading
//! a field as a richer type can fail; checking its presence never can, and
//! data that is merely invalid for its role is reported through boolean
//! predicates rather than errors.
//!
//! # Concurrency
//!
//! Every operation is a pure function of the entity's current field values,
//! with no suspension points and no hidden shared state. Entities carry no
//! internal synchronization; one entity instance is meant to be owned and
//! mutated by one logical owner at a time, and mutating the same instance
//! from several threads concurrently is the caller's bug to avoid.
//!
//! # Example
//!
//! ```rust
//! use jbind_core::{validate, Message};
//! use jbind_serde::{Request, Response};
//!
//! let mut request = Request::new();
//! request.set_method("subtract");
//! request.set_id_i64(1);
//! request.set_params_object(&serde_json::json!({"minuend": 42, "subtrahend": 23})).unwrap();
//! assert!(validate::request_is_contextually_valid(&request));
//!
//! let mut response = Response::new();
//! response.set_id_i64(1);
//! response.set_result_object(&19).unwrap();
//! assert!(response.is_result_and_error_exclusive());
//! ```

pub mod coerce;
pub mod error;
pub mod message;
pub mod node;
pub mod request;
pub mod response;
pub mod response_error;
pub mod service;
pub mod validate;

// Re-export the most commonly used items for convenience
pub use error::{BindError, Result, SyntaxError};
pub use message::{Message, VERSION};
pub use node::{JsonNode, NodeKind};
pub use request::Request;
pub use response::Response;
pub use response_error::ResponseError;
