//! Tests for the response envelope and its HTTP rendering.

use super::*;
use actix_web::body::to_bytes;
use rstest::rstest;
use serde_json::json;

async fn body_json(response: HttpResponse) -> Value {
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    serde_json::from_slice(&bytes).expect("envelope JSON")
}

#[rstest]
#[case(ResponseCode::Ok, "OK")]
#[case(ResponseCode::InvalidParams, "INVALID_PARAMS")]
#[case(ResponseCode::InvalidRequest, "INVALID_REQUEST")]
#[case(ResponseCode::InvalidRequestBody, "INVALID_REQUEST_BODY")]
#[case(ResponseCode::DataNotFound, "DATA_NOT_FOUND")]
#[case(ResponseCode::UserSyncFailed, "USER_SYNC_FAILED")]
#[case(ResponseCode::UserAssignFailed, "USER_ASSIGN_FAILED")]
#[case(ResponseCode::InternalServerError, "INTERNAL_SERVER_ERROR")]
#[case(ResponseCode::Downstream("invalidtoken".to_owned()), "invalidtoken")]
#[case(ResponseCode::Downstream(String::new()), "")]
fn codes_serialise_as_plain_strings(#[case] code: ResponseCode, #[case] wire: &str) {
    assert_eq!(serde_json::to_value(&code).expect("serialise"), json!(wire));
    assert_eq!(code.as_str(), wire);
}

#[test]
fn known_strings_parse_to_fixed_variants() {
    assert_eq!(
        ResponseCode::from("DATA_NOT_FOUND".to_owned()),
        ResponseCode::DataNotFound
    );
    assert_eq!(
        ResponseCode::from("nopermissions".to_owned()),
        ResponseCode::Downstream("nopermissions".to_owned())
    );
}

#[test]
fn success_envelope_carries_data() {
    let value = serde_json::to_value(Envelope::success(json!({"id": 7}))).expect("serialise");
    assert_eq!(value, json!({"code": "OK", "message": "OK", "data": {"id": 7}}));
}

#[test]
fn absent_data_is_omitted() {
    let value = serde_json::to_value(Envelope::<Value>::acknowledged("Users updated successfully"))
        .expect("serialise");
    assert_eq!(value, json!({"code": "OK", "message": "Users updated successfully"}));
    assert!(value.get("data").is_none());
}

#[test]
fn envelope_without_data_deserialises() {
    let envelope: Envelope = serde_json::from_value(json!({
        "code": "USER_SYNC_FAILED",
        "message": "user not found"
    }))
    .expect("deserialise");
    assert_eq!(envelope.code, ResponseCode::UserSyncFailed);
    assert!(envelope.data.is_none());
}

#[actix_web::test]
async fn failure_renders_status_and_envelope() {
    let failure = ApiFailure::new(
        StatusCode::NOT_FOUND,
        ResponseCode::DataNotFound,
        "user not found",
    );

    let response = ResponseError::error_response(&failure);
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await,
        json!({"code": "DATA_NOT_FOUND", "message": "user not found"})
    );
}

#[actix_web::test]
async fn failure_with_diagnostic_data_keeps_it() {
    let failure = ApiFailure::new(
        StatusCode::BAD_REQUEST,
        ResponseCode::InvalidRequestBody,
        "Invalid request body format.",
    )
    .with_data(json!("EOF while parsing a value at line 1 column 0"));

    let body = body_json(ResponseError::error_response(&failure)).await;
    assert_eq!(
        body.get("data").and_then(Value::as_str),
        Some("EOF while parsing a value at line 1 column 0")
    );
}

#[actix_web::test]
async fn success_responder_renders_ok() {
    let req = actix_web::test::TestRequest::default().to_http_request();
    let response = Envelope::success(json!([1, 2])).respond_to(&req);
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"code": "OK", "message": "OK", "data": [1, 2]})
    );
}
