//! Message service boundary
//!
//! Converts message entities to and from external sources and sinks: byte
//! slices, text, `io::Read`/`io::Write` streams, and already-parsed trees.
//! Every source is normalized to a tree before the entity is constructed, so
//! validation and coercion behave identically no matter where the bytes came
//! from. Sinks work the same way in reverse: the entity becomes a tree, the
//! tree is rendered.
//!
//! The functions are generic over the tree type `N` and the message type `M`;
//! backend adapter crates re-expose them with both parameters fixed (see
//! `jbind-serde`).

use crate::error::{BindError, Result};
use crate::node::JsonNode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::{Read, Write};
use tracing::trace;

/// Bind a message from an already-parsed tree.
pub fn from_tree<N, M>(tree: &N) -> Result<M>
where
    N: JsonNode,
    M: DeserializeOwned,
{
    tree.to_typed().map_err(BindError::Syntax)
}

/// Bind a message from JSON text.
pub fn from_text<N, M>(text: &str) -> Result<M>
where
    N: JsonNode,
    M: DeserializeOwned,
{
    let tree = N::parse_text(text).map_err(BindError::Syntax)?;
    from_tree(&tree)
}

/// Bind a message from JSON bytes.
pub fn from_slice<N, M>(bytes: &[u8]) -> Result<M>
where
    N: JsonNode,
    M: DeserializeOwned,
{
    let tree = N::parse_bytes(bytes).map_err(BindError::Syntax)?;
    from_tree(&tree)
}

/// Bind a message from a byte stream.
///
/// The stream is buffered to its end first; JSON-RPC messages are bounded
/// documents, not open-ended streams.
pub fn from_reader<N, M, R>(mut reader: R) -> Result<M>
where
    N: JsonNode,
    M: DeserializeOwned,
    R: Read,
{
    let mut buffer = Vec::new();
    reader
        .read_to_end(&mut buffer)
        .map_err(|e| BindError::Io(e.to_string()))?;
    trace!(bytes = buffer.len(), "buffered message source");
    from_slice::<N, M>(&buffer)
}

/// Convert a message into a tree.
pub fn to_tree<N, M>(message: &M) -> Result<N>
where
    N: JsonNode,
    M: Serialize + ?Sized,
{
    N::from_typed(message).map_err(BindError::Syntax)
}

/// Render a message as JSON text.
pub fn to_text<N, M>(message: &M) -> Result<String>
where
    N: JsonNode,
    M: Serialize + ?Sized,
{
    to_tree::<N, M>(message)?
        .render_text()
        .map_err(BindError::Syntax)
}

/// Render a message as JSON bytes.
pub fn to_vec<N, M>(message: &M) -> Result<Vec<u8>>
where
    N: JsonNode,
    M: Serialize + ?Sized,
{
    to_tree::<N, M>(message)?
        .render_bytes()
        .map_err(BindError::Syntax)
}

/// Render a message into a byte sink.
pub fn to_writer<N, M, W>(mut writer: W, message: &M) -> Result<()>
where
    N: JsonNode,
    M: Serialize + ?Sized,
    W: Write,
{
    let bytes = to_vec::<N, M>(message)?;
    writer
        .write_all(&bytes)
        .map_err(|e| BindError::Io(e.to_string()))?;
    trace!(bytes = bytes.len(), "rendered message to sink");
    Ok(())
}
