//! Contextual validation
//!
//! Pure predicate composition over the entities. Each function evaluates the
//! field-level predicates the entity already exposes and combines them; no
//! parsing, no mutation, and nothing is ever thrown for data that is merely
//! invalid. Callers that want to report violations get the names of the
//! failed predicates.
//!
//! Structural enforcement of required members (a schema framework, a
//! constraint library) is a collaborator's job; this layer only guarantees
//! its booleans are correct for any reachable field state.

use crate::message::Message;
use crate::node::JsonNode;
use crate::request::Request;
use crate::response::Response;
use crate::response_error::ResponseError;

/// True when every field of the request satisfies its contextual rules.
pub fn request_is_contextually_valid<N: JsonNode>(request: &Request<N>) -> bool {
    request_violations(request).is_empty()
}

/// Names of the request predicates that evaluate to false.
pub fn request_violations<N: JsonNode>(request: &Request<N>) -> Vec<&'static str> {
    let mut violations = Vec::new();
    if !request.is_id_contextually_valid() {
        violations.push("is_id_contextually_valid");
    }
    if !request.is_params_contextually_valid() {
        violations.push("is_params_contextually_valid");
    }
    violations
}

/// True when every field of the response satisfies its contextual rules and
/// exactly one of result and error is present.
pub fn response_is_contextually_valid<N: JsonNode>(response: &Response<N>) -> bool {
    response_violations(response).is_empty()
}

/// Names of the response predicates that evaluate to false.
pub fn response_violations<N: JsonNode>(response: &Response<N>) -> Vec<&'static str> {
    let mut violations = Vec::new();
    if !response.is_id_contextually_valid() {
        violations.push("is_id_contextually_valid");
    }
    if !response.is_result_contextually_valid() {
        violations.push("is_result_contextually_valid");
    }
    if !response.is_error_contextually_valid() {
        violations.push("is_error_contextually_valid");
    }
    if !response.is_result_and_error_exclusive() {
        violations.push("is_result_and_error_exclusive");
    }
    violations
}

/// True when the error object's data satisfies its contextual rules.
pub fn error_is_contextually_valid<N: JsonNode>(error: &ResponseError<N>) -> bool {
    error_violations(error).is_empty()
}

/// Names of the error-object predicates that evaluate to false.
pub fn error_violations<N: JsonNode>(error: &ResponseError<N>) -> Vec<&'static str> {
    let mut violations = Vec::new();
    if !error.is_data_contextually_valid() {
        violations.push("is_data_contextually_valid");
    }
    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use jbind_serde::{Json, Request as JsonRequest, Response as JsonResponse};
    use serde_json::json;

    fn request_from(value: serde_json::Value) -> JsonRequest {
        crate::service::from_tree(&Json::from(value)).unwrap()
    }

    fn response_from(value: serde_json::Value) -> JsonResponse {
        crate::service::from_tree(&Json::from(value)).unwrap()
    }

    #[test]
    fn notification_without_params_is_valid() {
        let request = request_from(json!({"jsonrpc": "2.0", "method": "heartbeat"}));
        assert!(!request.has_params());
        assert!(request.is_params_contextually_valid());
        assert!(request_is_contextually_valid(&request));
    }

    #[test]
    fn primitive_params_are_reported_by_name() {
        let request = request_from(json!({"jsonrpc": "2.0", "method": "sum", "params": 3}));
        assert_eq!(
            request_violations(&request),
            vec!["is_params_contextually_valid"]
        );
    }

    #[test]
    fn boolean_id_is_reported_by_name() {
        let request = request_from(json!({"jsonrpc": "2.0", "method": "sum", "id": true}));
        assert_eq!(request_violations(&request), vec!["is_id_contextually_valid"]);
    }

    #[test]
    fn exclusivity_truth_table() {
        let neither = response_from(json!({"jsonrpc": "2.0", "id": 1}));
        assert_eq!(
            response_violations(&neither),
            vec!["is_result_and_error_exclusive"]
        );

        let result_only = response_from(json!({"jsonrpc": "2.0", "result": 19, "id": 1}));
        assert!(response_is_contextually_valid(&result_only));

        let error_only = response_from(json!({
            "jsonrpc": "2.0",
            "error": {"code": -32601, "message": "Method not found"},
            "id": 1
        }));
        assert!(response_is_contextually_valid(&error_only));

        let both = response_from(json!({
            "jsonrpc": "2.0",
            "result": 19,
            "error": {"code": -32603, "message": "Internal error"},
            "id": 1
        }));
        assert_eq!(
            response_violations(&both),
            vec!["is_result_and_error_exclusive"]
        );
    }

    #[test]
    fn error_object_data_is_always_acceptable() {
        let error = jbind_serde::ResponseError::with_data(
            -32000,
            "Server error",
            &json!({"detail": "disk full"}),
        )
        .unwrap();
        assert!(error_is_contextually_valid(&error));
        assert!(error_violations(&error).is_empty());
    }
}
