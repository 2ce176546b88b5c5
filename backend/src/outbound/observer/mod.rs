//! `tracing`-backed request observer.
//!
//! Events carry the operation label and, when the `Trace` middleware is in
//! front of the handler, the request's trace identifier. Unclassified LMS
//! failures are logged at `error` with their raw detail, which callers never
//! see; everything else is logged at `warn` or `info`.

use tracing::{error, info, warn};

use crate::domain::GatewayOperation;
use crate::domain::ports::{LmsError, RequestObserver};
use crate::middleware::trace::TraceId;

/// Observer emitting one structured event per request outcome.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingRequestObserver;

fn trace_id() -> String {
    TraceId::current()
        .map(|id| id.to_string())
        .unwrap_or_default()
}

impl RequestObserver for TracingRequestObserver {
    fn binding_rejected(&self, operation: GatewayOperation, detail: &str) {
        warn!(
            operation = operation.as_str(),
            trace_id = %trace_id(),
            detail,
            "request body rejected"
        );
    }

    fn delegate_failed(&self, operation: GatewayOperation, failure: &LmsError) {
        match failure {
            LmsError::NotFound { message } => warn!(
                operation = operation.as_str(),
                trace_id = %trace_id(),
                message = message.as_str(),
                "LMS reported no match"
            ),
            LmsError::Exception {
                error_code,
                message,
            } => warn!(
                operation = operation.as_str(),
                trace_id = %trace_id(),
                error_code = error_code.as_str(),
                message = message.as_str(),
                "LMS rejected the call"
            ),
            LmsError::Unclassified { message } => error!(
                operation = operation.as_str(),
                trace_id = %trace_id(),
                detail = message.as_str(),
                "LMS call failed"
            ),
        }
    }

    fn completed(&self, operation: GatewayOperation) {
        info!(
            operation = operation.as_str(),
            trace_id = %trace_id(),
            "operation completed"
        );
    }
}
