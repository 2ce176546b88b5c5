//! Role assignment handler.
//!
//! ```text
//! POST /roles/assign {"roleId":5,"userId":42,"contextId":1}
//! ```

use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{GatewayOperation, RoleAssignment};
use crate::inbound::http::binding::{Bind, BindingError, RequestBody, require_id};
use crate::inbound::http::dispatch::Dispatch;
use crate::inbound::http::envelope::{ApiResult, Envelope};
use crate::inbound::http::schemas::EnvelopeSchema;
use crate::inbound::http::state::HttpState;

/// Request body for `POST /roles/assign`.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoleAssignRequest {
    pub role_id: Option<u64>,
    pub user_id: Option<u64>,
    pub context_id: Option<u64>,
}

impl Bind for RoleAssignRequest {
    fn check_required(&self) -> Result<(), BindingError> {
        require_id(self.role_id, "roleId")?;
        require_id(self.user_id, "userId")?;
        require_id(self.context_id, "contextId")
    }
}

impl From<RoleAssignRequest> for RoleAssignment {
    fn from(value: RoleAssignRequest) -> Self {
        Self {
            role_id: value.role_id.unwrap_or_default(),
            user_id: value.user_id.unwrap_or_default(),
            context_id: value.context_id.unwrap_or_default(),
        }
    }
}

/// Grant a role to a user within an LMS context.
#[utoipa::path(
    post,
    path = "/roles/assign",
    request_body = RoleAssignRequest,
    responses(
        (status = 200, description = "Role granted", body = EnvelopeSchema),
        (status = 400, description = "Malformed body or any LMS failure (USER_ASSIGN_FAILED)", body = EnvelopeSchema)
    ),
    tags = ["roles"],
    operation_id = "assignRole"
)]
#[post("/roles/assign")]
pub async fn assign_role(state: web::Data<HttpState>, body: RequestBody) -> ApiResult<()> {
    let dispatch = Dispatch::new(&state, GatewayOperation::AssignRole);
    let request: RoleAssignRequest = dispatch.bind(body)?;
    state
        .lms
        .assign_role(&request.into())
        .await
        .map_err(|err| dispatch.fail(err))?;
    Ok(dispatch.complete(Envelope::acknowledged("User assigned successfully")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{
        LmsError, MockLmsUserService, MockRequestObserver, NoOpRequestObserver,
    };
    use crate::inbound::http::test_utils::{post_raw, send, state_with};
    use actix_web::http::StatusCode;
    use rstest::rstest;
    use serde_json::json;

    #[actix_web::test]
    async fn assigns_role() {
        let mut lms = MockLmsUserService::new();
        lms.expect_assign_role()
            .withf(|assignment| {
                *assignment
                    == RoleAssignment {
                        role_id: 5,
                        user_id: 42,
                        context_id: 1,
                    }
            })
            .times(1)
            .return_once(|_| Ok(()));
        let request = post_raw("/roles/assign", br#"{"roleId":5,"userId":42,"contextId":1}"#);

        let (status, body) = send(state_with(lms, NoOpRequestObserver), assign_role, request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"code": "OK", "message": "User assigned successfully"}));
    }

    #[rstest]
    #[case(br#"{"roleId":5,"userId":42}"#.as_slice(), "missing required field: contextId")]
    #[case(br#"{"roleId":0,"userId":42,"contextId":1}"#.as_slice(), "missing required field: roleId")]
    #[case(br#"{"roleId":"5","userId":42,"contextId":1}"#.as_slice(), "invalid type")]
    #[case(br#"{"roleId":-1,"userId":42,"contextId":1}"#.as_slice(), "invalid value")]
    #[actix_web::test]
    async fn rejects_malformed_body(#[case] payload: &'static [u8], #[case] fragment: &str) {
        let mut lms = MockLmsUserService::new();
        lms.expect_assign_role().never();
        let mut observer = MockRequestObserver::new();
        observer
            .expect_binding_rejected()
            .withf(|op, _| *op == GatewayOperation::AssignRole)
            .times(1)
            .return_const(());

        let (status, body) = send(
            state_with(lms, observer),
            assign_role,
            post_raw("/roles/assign", payload),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "INVALID_REQUEST");
        let message = body["message"].as_str().expect("message");
        assert!(message.starts_with("Invalid data submitted: "));
        assert!(message.contains(fragment), "unexpected message: {message}");
    }

    #[rstest]
    #[case(LmsError::exception("invalidrole", "Invalid role"))]
    #[case(LmsError::not_found("context not found"))]
    #[case(LmsError::unclassified("connection reset"))]
    #[actix_web::test]
    async fn failures_use_fixed_code(#[case] error: LmsError) {
        let expected_message = error.to_string();
        let mut lms = MockLmsUserService::new();
        lms.expect_assign_role().return_once(move |_| Err(error));

        let (status, body) = send(
            state_with(lms, NoOpRequestObserver),
            assign_role,
            post_raw("/roles/assign", br#"{"roleId":5,"userId":42,"contextId":1}"#),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({"code": "USER_ASSIGN_FAILED", "message": expected_message})
        );
    }
}
