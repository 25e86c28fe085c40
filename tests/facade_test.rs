//! End-to-end exercise of the facade re-exports

use jbind::{Message, Request, Response, ResponseError};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

#[test]
fn call_and_response_through_the_facade() {
    init_tracing();

    let mut request = Request::new();
    request.set_method("subtract");
    request.set_id_i64(1);
    request
        .set_params_object(&serde_json::json!({"minuend": 42, "subtrahend": 23}))
        .unwrap();

    let wire = jbind::json::service::request_to_string(&request).unwrap();
    let received = jbind::json::service::request_from_str(&wire).unwrap();
    assert_eq!(received.method(), Some("subtract"));
    assert!(jbind::core::validate::request_is_contextually_valid(
        &received
    ));

    let mut response = Response::new();
    response.set_id_i64(1);
    response.set_result_object(&19).unwrap();
    assert!(response.is_result_and_error_exclusive());

    let wire = jbind::json::service::response_to_string(&response).unwrap();
    let received = jbind::json::service::response_from_str(&wire).unwrap();
    assert_eq!(received.result_as_object::<i32>().unwrap(), Some(19));
    assert_eq!(received.id_as_i64().unwrap(), Some(1));
}

#[test]
fn error_response_through_the_facade() {
    init_tracing();

    let mut response = Response::new();
    response.set_id_string("1");
    response
        .set_error(&ResponseError::method_not_found("subtractt"))
        .unwrap();

    let wire = jbind::json::service::response_to_string(&response).unwrap();
    let received = jbind::json::service::response_from_str(&wire).unwrap();

    let error = received.error_default().unwrap().unwrap();
    assert_eq!(error.code(), ResponseError::CODE_METHOD_NOT_FOUND);
    assert!(error.message().contains("subtractt"));
    assert!(!received.has_result());
    assert!(jbind::core::validate::response_is_contextually_valid(
        &received
    ));
}
