//! Side-channel port for reporting how each gateway request ended.
//!
//! Handlers report binding rejections, delegate failures and completions
//! here instead of calling a global logger, so handler tests can assert on
//! responses alone. Implementations may log, export metrics or discard.

use crate::domain::GatewayOperation;

use super::LmsError;

/// Receives one event per request outcome.
#[cfg_attr(test, mockall::automock)]
pub trait RequestObserver: Send + Sync {
    /// The request body failed structural validation.
    fn binding_rejected(&self, operation: GatewayOperation, detail: &str);

    /// The LMS call failed.
    fn delegate_failed(&self, operation: GatewayOperation, error: &LmsError);

    /// The operation succeeded.
    fn completed(&self, operation: GatewayOperation);
}

/// Observer that discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpRequestObserver;

impl RequestObserver for NoOpRequestObserver {
    fn binding_rejected(&self, _operation: GatewayOperation, _detail: &str) {}

    fn delegate_failed(&self, _operation: GatewayOperation, _error: &LmsError) {}

    fn completed(&self, _operation: GatewayOperation) {}
}
