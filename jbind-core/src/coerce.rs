//! Shared field coercion logic
//!
//! The polymorphic message fields (`id`, `params`, `result`, `error.data`)
//! all follow the same access pattern: check presence, evaluate contextual
//! validity, read as a typed value, write from a typed value. This module
//! implements each half of that pattern exactly once; the entities wire the
//! helpers to their own field slots.
//!
//! # Presence
//!
//! A field slot is *present* when it holds a node that is not the JSON
//! literal `null`. An absent slot and an explicit `null` behave identically
//! everywhere: `has_*` reports false, validity predicates are vacuously true,
//! and reads return `Ok(None)`.
//!
//! # Array-or-object reads
//!
//! JSON-RPC allows `params` (and by the same convention `result` and
//! `error.data`) to be passed either positionally as an array or as a single
//! compound value. [`node_as_vec`] reflects that: an array node converts
//! element-wise, anything else converts once and is wrapped in a one-element
//! vector. An incompatible element fails the whole read; partial results are
//! never returned.

use crate::error::{BindError, Result, SyntaxError};
use crate::node::JsonNode;
use serde::de::DeserializeOwned;

/// Evaluate `predicate` on a present field, or return `default_if_absent`.
///
/// Backs both `has_*` (default `false`) and `is_*_contextually_valid`
/// (default `true`, an absent optional field is vacuously valid). The default
/// is a plain parameter; no supplier indirection is involved.
pub fn present_then_check<N, P>(slot: Option<&N>, default_if_absent: bool, predicate: P) -> bool
where
    N: JsonNode,
    P: FnOnce(&N) -> bool,
{
    match slot {
        Some(node) if !node.is_null() => predicate(node),
        _ => default_if_absent,
    }
}

/// Map a present field through `map`, or return `Ok(None)`.
///
/// Backs every "read as X" accessor. Absence is not an error; a conversion
/// failure inside `map` propagates unchanged.
pub fn present_then_map<N, T, F>(slot: Option<&N>, map: F) -> Result<Option<T>>
where
    N: JsonNode,
    F: FnOnce(&N) -> Result<T>,
{
    match slot {
        Some(node) if !node.is_null() => map(node).map(Some),
        _ => Ok(None),
    }
}

/// Read a node as a vector of `T`, honoring the array-or-object convention.
pub fn node_as_vec<N, T>(field: &'static str, node: &N) -> Result<Vec<T>>
where
    N: JsonNode,
    T: DeserializeOwned,
{
    if node.is_array() {
        node.to_typed::<Vec<T>>()
            .map_err(|source| BindError::field(field, source))
    } else {
        node.to_typed::<T>()
            .map(|single| vec![single])
            .map_err(|source| BindError::field(field, source))
    }
}

/// Read a node as a single typed value.
pub fn node_as_typed<N, T>(field: &'static str, node: &N) -> Result<T>
where
    N: JsonNode,
    T: DeserializeOwned,
{
    node.to_typed()
        .map_err(|source| BindError::field(field, source))
}

/// Read an identifier node as a wide integer.
///
/// Direct numeric extraction is attempted first. When that fails the decimal
/// literal of the node (the number text itself, or the content of a string
/// node) is parsed instead; some producers encode large numeric ids as JSON
/// strings, and numbers wider than 64 bits only survive as literals. When
/// neither route applies the error wraps the root cause.
pub fn node_as_wide_int<N>(field: &'static str, node: &N) -> Result<i128>
where
    N: JsonNode,
{
    if let Some(value) = node.as_i64() {
        return Ok(i128::from(value));
    }
    if let Some(value) = node.as_u64() {
        return Ok(i128::from(value));
    }
    let literal = match node.number_literal().or_else(|| node.as_str().map(str::to_owned)) {
        Some(literal) => literal,
        None => {
            return Err(BindError::field(
                field,
                SyntaxError::UnexpectedKind {
                    expected: "string or number",
                    found: node.kind(),
                },
            ))
        }
    };
    literal
        .parse::<i128>()
        .map_err(|source| BindError::field(field, SyntaxError::InvalidInteger { literal, source }))
}

/// Narrow a wide integer into a fixed-width target.
pub fn narrow_wide_int<T>(field: &'static str, target: &'static str, value: i128) -> Result<T>
where
    T: TryFrom<i128>,
{
    T::try_from(value).map_err(|_| {
        BindError::field(
            field,
            SyntaxError::NumberOutOfRange {
                target,
                literal: value.to_string(),
            },
        )
    })
}

/// Build an identifier node from a wide integer.
///
/// Values that fit a JSON number are stored as numbers; anything wider is
/// stored as its decimal string, the same encoding [`node_as_wide_int`]
/// accepts back.
pub fn node_of_wide_int<N>(value: i128) -> N
where
    N: JsonNode,
{
    if let Ok(small) = i64::try_from(value) {
        return N::of_i64(small);
    }
    if let Ok(unsigned) = u64::try_from(value) {
        return N::of_u64(unsigned);
    }
    N::of_str(&value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use jbind_serde::Json;
    use serde_json::json;

    fn node(value: serde_json::Value) -> Json {
        Json::from(value)
    }

    #[test]
    fn absent_slot_uses_the_default() {
        let slot: Option<&Json> = None;
        assert!(!present_then_check(slot, false, |_| true));
        assert!(present_then_check(slot, true, |_| false));
    }

    #[test]
    fn explicit_null_counts_as_absent() {
        let null = node(json!(null));
        assert!(!present_then_check(Some(&null), false, |_| true));
        assert_eq!(
            present_then_map(Some(&null), |_| Ok(1)).unwrap(),
            None::<i32>
        );
    }

    #[test]
    fn present_slot_runs_the_predicate() {
        let number = node(json!(3));
        assert!(present_then_check(Some(&number), false, |n| n.is_number()));
        assert!(!present_then_check(Some(&number), true, |n| n.is_string()));
    }

    #[test]
    fn array_node_converts_element_wise() {
        let array = node(json!([1, 2, 3]));
        let values: Vec<i32> = node_as_vec("params", &array).unwrap();
        assert_eq!(values, vec![1, 2, 3]);
    }

    #[test]
    fn single_value_wraps_into_one_element_vec() {
        let object = node(json!(19));
        let values: Vec<i64> = node_as_vec("result", &object).unwrap();
        assert_eq!(values, vec![19]);
    }

    #[test]
    fn incompatible_element_fails_the_whole_read() {
        let array = node(json!([1, "two", 3]));
        let result: Result<Vec<i32>> = node_as_vec("params", &array);
        assert!(matches!(result, Err(BindError::Field { field: "params", .. })));
    }

    #[test]
    fn wide_int_reads_plain_numbers_directly() {
        assert_eq!(node_as_wide_int("id", &node(json!(42))).unwrap(), 42);
        assert_eq!(
            node_as_wide_int("id", &node(json!(u64::MAX))).unwrap(),
            i128::from(u64::MAX)
        );
        assert_eq!(node_as_wide_int("id", &node(json!(-7))).unwrap(), -7);
    }

    #[test]
    fn wide_int_falls_back_to_string_literals() {
        let id = node(json!("123456789012345678901234567890"));
        assert_eq!(
            node_as_wide_int("id", &id).unwrap(),
            123456789012345678901234567890i128
        );
    }

    #[test]
    fn wide_int_rejects_non_numeric_text() {
        let id = node(json!("not-a-number"));
        let error = node_as_wide_int("id", &id).unwrap_err();
        assert!(matches!(
            error.syntax(),
            Some(SyntaxError::InvalidInteger { .. })
        ));
    }

    #[test]
    fn wide_int_rejects_incompatible_kinds() {
        let id = node(json!(true));
        let error = node_as_wide_int("id", &id).unwrap_err();
        assert!(matches!(
            error.syntax(),
            Some(SyntaxError::UnexpectedKind { .. })
        ));
    }

    #[test]
    fn narrowing_checks_the_target_width() {
        let narrowed: i32 = narrow_wide_int("id", "i32", 19).unwrap();
        assert_eq!(narrowed, 19);

        let error = narrow_wide_int::<i32>("id", "i32", i128::from(i64::MAX)).unwrap_err();
        assert!(matches!(
            error.syntax(),
            Some(SyntaxError::NumberOutOfRange { target: "i32", .. })
        ));
    }

    #[test]
    fn wide_int_node_round_trips_through_the_string_encoding() {
        let wide = 123456789012345678901234567890i128;
        let stored: Json = node_of_wide_int(wide);
        assert!(stored.0.is_string());
        assert_eq!(node_as_wide_int("id", &stored).unwrap(), wide);

        let small: Json = node_of_wide_int(42);
        assert!(small.0.is_number());
    }
}
