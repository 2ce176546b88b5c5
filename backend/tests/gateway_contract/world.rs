//! Shared world for the gateway contract suite.
//!
//! Requests go through `actix_web::test` against an app assembled the same
//! way the server assembles it. Actix services are `!Send`, so the world owns
//! a single-threaded Tokio runtime plus a `LocalSet`.

use std::sync::Arc;

use actix_web::http::Method;
use actix_web::http::header::CONTENT_TYPE;
use actix_web::{App, test, web};
use lms_gateway::Trace;
use lms_gateway::inbound::http::routes;
use lms_gateway::inbound::http::state::HttpState;
use lms_gateway::middleware::TRACE_ID_HEADER;
use serde_json::Value;
use tokio::runtime::{Builder, Runtime};
use tokio::task::LocalSet;

use super::recording_lms::RecordingLms;

/// Captured response.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Exchange {
    pub(crate) status: u16,
    pub(crate) body: Value,
    pub(crate) trace_id: Option<String>,
}

pub(crate) struct GatewayWorld {
    runtime: Runtime,
    local: LocalSet,
    pub(crate) lms: RecordingLms,
    pub(crate) exchanges: Vec<Exchange>,
}

impl GatewayWorld {
    pub(crate) fn new() -> Self {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("test runtime");
        Self {
            runtime,
            local: LocalSet::new(),
            lms: RecordingLms::default(),
            exchanges: Vec::new(),
        }
    }

    pub(crate) fn last(&self) -> &Exchange {
        self.exchanges.last().expect("a request was sent")
    }

    /// Send `body` to `path` and record the response.
    pub(crate) fn send(&mut self, method: Method, path: &str, body: &[u8]) {
        let state = web::Data::new(HttpState::new(Arc::new(self.lms.clone())));
        let request = test::TestRequest::default()
            .method(method)
            .uri(path)
            .insert_header((CONTENT_TYPE, "application/json"))
            .set_payload(body.to_vec())
            .to_request();

        let exchange = self.local.block_on(&self.runtime, async move {
            let app = test::init_service(
                App::new()
                    .app_data(state)
                    .wrap(Trace)
                    .configure(routes::configure),
            )
            .await;
            let response = test::call_service(&app, request).await;
            let status = response.status().as_u16();
            let trace_id = response
                .headers()
                .get(TRACE_ID_HEADER)
                .and_then(|value| value.to_str().ok())
                .map(str::to_owned);
            let body: Value = test::read_body_json(response).await;
            Exchange {
                status,
                body,
                trace_id,
            }
        });
        self.exchanges.push(exchange);
    }
}
