//! Shared message surface
//!
//! Requests and responses both carry the protocol version member and the
//! identifier field, and the identifier behaves identically on both. The
//! [`Message`] trait captures that shared surface once: an implementing
//! entity only supplies access to its raw `id` slot, and every presence
//! check, validity predicate, and typed accessor comes as a provided method.
//!
//! # Identifier rules
//!
//! A present identifier must be a JSON string or number. Absence and an
//! explicit `null` both mean "no id", which is what distinguishes a
//! notification from a call. Numeric reads accept string-encoded ids as a
//! fallback, since some producers serialize large ids that way.

use crate::coerce;
use crate::error::{BindError, Result, SyntaxError};
use crate::node::JsonNode;

/// The protocol version carried in the `jsonrpc` member
pub const VERSION: &str = "2.0";

/// serde default for the `jsonrpc` member of programmatically built messages
pub(crate) fn default_version() -> String {
    VERSION.to_owned()
}

/// Common surface of request and response messages
///
/// Implementors supply the version accessor and the two identifier slot
/// accessors; everything else is provided.
///
/// # Examples
///
/// ```rust
/// use jbind_core::Message;
/// use jbind_serde::Request;
///
/// let mut request = Request::new();
/// request.set_id_string("req-1");
/// assert!(request.has_id());
/// assert_eq!(request.id_as_string().unwrap().as_deref(), Some("req-1"));
/// ```
pub trait Message<N: JsonNode> {
    /// The value of the `jsonrpc` member.
    fn jsonrpc(&self) -> &str;

    /// Raw identifier sub-tree, if one is stored.
    fn id_slot(&self) -> Option<&N>;

    /// Mutable access to the identifier slot.
    fn id_slot_mut(&mut self) -> &mut Option<N>;

    /// True when an identifier is present (absent and `null` both count as
    /// missing).
    fn has_id(&self) -> bool {
        coerce::present_then_check(self.id_slot(), false, |_| true)
    }

    /// True when the identifier, if present, is a string or a number.
    ///
    /// An absent identifier is vacuously valid; a message without one is a
    /// notification, not a malformed call.
    fn is_id_contextually_valid(&self) -> bool {
        coerce::present_then_check(self.id_slot(), true, |id| id.is_string() || id.is_number())
    }

    /// Read the identifier as a string.
    ///
    /// A number identifier is reported as its decimal literal. Any other
    /// node kind fails with a binding error.
    fn id_as_string(&self) -> Result<Option<String>> {
        coerce::present_then_map(self.id_slot(), |id| {
            if let Some(text) = id.as_str() {
                return Ok(text.to_owned());
            }
            if let Some(literal) = id.number_literal() {
                return Ok(literal);
            }
            Err(BindError::field(
                "id",
                SyntaxError::UnexpectedKind {
                    expected: "string or number",
                    found: id.kind(),
                },
            ))
        })
    }

    /// Read the identifier as a wide integer.
    ///
    /// Accepts number nodes and string-encoded decimal ids.
    fn id_as_number(&self) -> Result<Option<i128>> {
        coerce::present_then_map(self.id_slot(), |id| coerce::node_as_wide_int("id", id))
    }

    /// Read the identifier as an `i64`, failing on overflow.
    fn id_as_i64(&self) -> Result<Option<i64>> {
        coerce::present_then_map(self.id_slot(), |id| {
            let wide = coerce::node_as_wide_int("id", id)?;
            coerce::narrow_wide_int("id", "i64", wide)
        })
    }

    /// Read the identifier as an `i32`, failing on overflow.
    fn id_as_i32(&self) -> Result<Option<i32>> {
        coerce::present_then_map(self.id_slot(), |id| {
            let wide = coerce::node_as_wide_int("id", id)?;
            coerce::narrow_wide_int("id", "i32", wide)
        })
    }

    /// Store a string identifier.
    fn set_id_string(&mut self, id: &str) {
        *self.id_slot_mut() = Some(N::of_str(id));
    }

    /// Store a numeric identifier.
    ///
    /// Values wider than a JSON number are stored as their decimal string,
    /// which the numeric readers accept back.
    fn set_id_number(&mut self, id: i128) {
        *self.id_slot_mut() = Some(coerce::node_of_wide_int(id));
    }

    /// Store an `i64` identifier.
    fn set_id_i64(&mut self, id: i64) {
        *self.id_slot_mut() = Some(N::of_i64(id));
    }

    /// Store an `i32` identifier.
    fn set_id_i32(&mut self, id: i32) {
        *self.id_slot_mut() = Some(N::of_i64(i64::from(id)));
    }

    /// Remove the identifier, turning the message into a notification shape.
    fn clear_id(&mut self) {
        *self.id_slot_mut() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jbind_serde::{Json, Request};
    use serde_json::json;

    #[test]
    fn fresh_message_has_no_id() {
        let request = Request::new();
        assert!(!request.has_id());
        assert!(request.is_id_contextually_valid());
        assert_eq!(request.id_as_string().unwrap(), None);
    }

    #[test]
    fn string_id_round_trips() {
        let mut request = Request::new();
        request.set_id_string("3");
        assert_eq!(request.id_as_string().unwrap().as_deref(), Some("3"));
        assert_eq!(request.id_as_number().unwrap(), Some(3));
    }

    #[test]
    fn numeric_id_reads_as_its_literal_string() {
        let mut request = Request::new();
        request.set_id_i64(42);
        assert_eq!(request.id_as_string().unwrap().as_deref(), Some("42"));
        assert_eq!(request.id_as_i64().unwrap(), Some(42));
        assert_eq!(request.id_as_i32().unwrap(), Some(42));
    }

    #[test]
    fn wide_id_survives_the_string_encoding() {
        let wide = 123456789012345678901234567890i128;
        let mut request = Request::new();
        request.set_id_number(wide);
        assert_eq!(request.id_as_number().unwrap(), Some(wide));
        assert!(request.id_as_i64().is_err());
    }

    #[test]
    fn narrow_reads_fail_on_overflow() {
        let mut request = Request::new();
        request.set_id_i64(i64::MAX);
        assert_eq!(request.id_as_i64().unwrap(), Some(i64::MAX));
        assert!(request.id_as_i32().is_err());
    }

    #[test]
    fn boolean_id_is_invalid_and_unreadable() {
        let mut request = Request::new();
        *request.id_slot_mut() = Some(Json::from(json!(true)));
        assert!(request.has_id());
        assert!(!request.is_id_contextually_valid());
        assert!(request.id_as_string().is_err());
        assert!(request.id_as_number().is_err());
    }

    #[test]
    fn clearing_the_id_restores_notification_shape() {
        let mut request = Request::new();
        request.set_id_i32(7);
        assert!(request.has_id());
        request.clear_id();
        assert!(!request.has_id());
        assert!(request.is_id_contextually_valid());
    }
}
