//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_http::Request;
use actix_web::dev::{HttpServiceFactory, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use serde_json::Value;

use crate::domain::ports::{LmsUserService, RequestObserver};
use crate::inbound::http::state::HttpState;

/// Build state around the given port doubles.
pub fn state_with(
    lms: impl LmsUserService + 'static,
    observer: impl RequestObserver + 'static,
) -> HttpState {
    HttpState::new(Arc::new(lms)).with_observer(Arc::new(observer))
}

/// Serve `service` with `state`, send `request` and decode the envelope.
pub async fn send<F>(state: HttpState, service: F, request: Request) -> (StatusCode, Value)
where
    F: HttpServiceFactory + 'static,
{
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .service(service),
    )
    .await;
    read_envelope(actix_test::call_service(&app, request).await).await
}

/// Decode a response body as JSON alongside its status.
pub async fn read_envelope(response: ServiceResponse) -> (StatusCode, Value) {
    let status = response.status();
    let body = actix_test::read_body(response).await;
    let value = serde_json::from_slice(&body).expect("envelope body is JSON");
    (status, value)
}

/// Raw `POST` with an arbitrary body.
pub fn post_raw(uri: &str, body: &'static [u8]) -> Request {
    actix_test::TestRequest::post()
        .uri(uri)
        .insert_header(("content-type", "application/json"))
        .set_payload(body)
        .to_request()
}

/// Raw `PUT` with an arbitrary body.
pub fn put_raw(uri: &str, body: &'static [u8]) -> Request {
    actix_test::TestRequest::put()
        .uri(uri)
        .insert_header(("content-type", "application/json"))
        .set_payload(body)
        .to_request()
}
