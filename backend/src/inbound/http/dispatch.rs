//! Per-operation request flow: bind, delegate, respond.
//!
//! Each handler opens a [`Dispatch`] for its operation. The dispatch picks
//! the operation's binding and failure policies and reports every outcome to
//! the request observer exactly once.

use crate::domain::GatewayOperation;
use crate::domain::ports::LmsError;

use super::binding::{Bind, BindingPolicy, RequestBody, bind_body};
use super::classify::FailurePolicy;
use super::envelope::{ApiFailure, Envelope, ResponseCode};
use super::state::HttpState;

/// Binding and failure policies for `operation`.
///
/// `CheckStatus` reads no body, so its binding policy is never consulted; it
/// carries the default so every operation has one pair.
pub fn policies(operation: GatewayOperation) -> (BindingPolicy, FailurePolicy) {
    match operation {
        GatewayOperation::CheckStatus => (BindingPolicy::default(), FailurePolicy::Classified),
        GatewayOperation::CreateUser | GatewayOperation::UpdateUsers => {
            (BindingPolicy::InvalidParams, FailurePolicy::Classified)
        }
        GatewayOperation::GetUserByField => {
            (BindingPolicy::InvalidRequestBody, FailurePolicy::Classified)
        }
        GatewayOperation::UserSync => (
            BindingPolicy::InvalidRequest,
            FailurePolicy::Fixed(ResponseCode::UserSyncFailed),
        ),
        GatewayOperation::AssignRole => (
            BindingPolicy::InvalidRequest,
            FailurePolicy::Fixed(ResponseCode::UserAssignFailed),
        ),
    }
}

/// One in-flight gateway operation.
pub(crate) struct Dispatch<'a> {
    state: &'a HttpState,
    operation: GatewayOperation,
    binding: BindingPolicy,
    failure: FailurePolicy,
}

impl<'a> Dispatch<'a> {
    pub(crate) fn new(state: &'a HttpState, operation: GatewayOperation) -> Self {
        let (binding, failure) = policies(operation);
        Self {
            state,
            operation,
            binding,
            failure,
        }
    }

    /// Bind the request body, rejecting it under the operation's policy.
    pub(crate) fn bind<T: Bind>(&self, body: RequestBody) -> Result<T, ApiFailure> {
        bind_body(body).map_err(|err| {
            self.state
                .observer
                .binding_rejected(self.operation, &err.to_string());
            self.binding.reject(&err)
        })
    }

    /// Turn a delegate failure into the operation's failure response.
    pub(crate) fn fail(&self, error: LmsError) -> ApiFailure {
        self.state.observer.delegate_failed(self.operation, &error);
        self.failure.apply(&error).into()
    }

    /// Record success and pass the envelope through.
    pub(crate) fn complete<T>(&self, envelope: Envelope<T>) -> Envelope<T> {
        self.state.observer.completed(self.operation);
        envelope
    }
}
