//! Message services bound to the serde_json backend
//!
//! Thin wrappers over the generic service boundary with the tree type fixed
//! to [`Json`]. Reads accept text, bytes, streams, or already-parsed trees
//! and normalize all of them to trees before binding; writes consult the
//! process-wide render configuration to choose between compact and
//! pretty-printed output.

use crate::config::render_config;
use crate::tree::Json;
use crate::{Request, Response};
use jbind_core::{service, BindError, JsonNode, Result, SyntaxError};
use serde::Serialize;
use std::io::{Read, Write};
use tracing::debug;

/// Bind a request from JSON text.
pub fn request_from_str(text: &str) -> Result<Request> {
    service::from_text::<Json, _>(text)
}

/// Bind a request from JSON bytes.
pub fn request_from_slice(bytes: &[u8]) -> Result<Request> {
    service::from_slice::<Json, _>(bytes)
}

/// Bind a request from a byte stream.
pub fn request_from_reader<R: Read>(reader: R) -> Result<Request> {
    debug!("binding request from stream");
    service::from_reader::<Json, _, _>(reader)
}

/// Bind a request from an already-parsed tree.
pub fn request_from_tree(tree: &Json) -> Result<Request> {
    service::from_tree(tree)
}

/// Render a request as JSON text.
pub fn request_to_string(request: &Request) -> Result<String> {
    render(request)
}

/// Render a request into a byte sink.
pub fn request_to_writer<W: Write>(writer: W, request: &Request) -> Result<()> {
    write(writer, request)
}

/// Convert a request into a tree.
pub fn request_to_tree(request: &Request) -> Result<Json> {
    service::to_tree(request)
}

/// Bind a response from JSON text.
pub fn response_from_str(text: &str) -> Result<Response> {
    service::from_text::<Json, _>(text)
}

/// Bind a response from JSON bytes.
pub fn response_from_slice(bytes: &[u8]) -> Result<Response> {
    service::from_slice::<Json, _>(bytes)
}

/// Bind a response from a byte stream.
pub fn response_from_reader<R: Read>(reader: R) -> Result<Response> {
    debug!("binding response from stream");
    service::from_reader::<Json, _, _>(reader)
}

/// Bind a response from an already-parsed tree.
pub fn response_from_tree(tree: &Json) -> Result<Response> {
    service::from_tree(tree)
}

/// Render a response as JSON text.
pub fn response_to_string(response: &Response) -> Result<String> {
    render(response)
}

/// Render a response into a byte sink.
pub fn response_to_writer<W: Write>(writer: W, response: &Response) -> Result<()> {
    write(writer, response)
}

/// Convert a response into a tree.
pub fn response_to_tree(response: &Response) -> Result<Json> {
    service::to_tree(response)
}

fn render<M: Serialize>(message: &M) -> Result<String> {
    let tree: Json = service::to_tree(message)?;
    if render_config().is_pretty() {
        serde_json::to_string_pretty(&tree)
            .map_err(|e| BindError::Syntax(SyntaxError::Incompatible(e.to_string())))
    } else {
        tree.render_text().map_err(BindError::Syntax)
    }
}

fn write<W: Write, M: Serialize>(mut writer: W, message: &M) -> Result<()> {
    let text = render(message)?;
    writer
        .write_all(text.as_bytes())
        .map_err(|e| BindError::Io(e.to_string()))
}
