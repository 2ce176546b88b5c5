//! LMS reachability check.
//!
//! ```text
//! POST /status
//! ```

use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{GatewayOperation, SiteStatus};
use crate::inbound::http::dispatch::Dispatch;
use crate::inbound::http::envelope::{ApiResult, Envelope};
use crate::inbound::http::schemas::EnvelopeSchema;
use crate::inbound::http::state::HttpState;

/// Site details reported by the LMS.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SiteStatusResponse {
    pub site_name: String,
    pub site_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl From<SiteStatus> for SiteStatusResponse {
    fn from(value: SiteStatus) -> Self {
        Self {
            site_name: value.site_name,
            site_url: value.site_url,
            release: value.release,
            version: value.version,
            username: value.username,
        }
    }
}

/// Report whether the LMS answers and which site it serves.
#[utoipa::path(
    post,
    path = "/status",
    responses(
        (status = 200, description = "LMS reachable; data is a SiteStatusResponse", body = EnvelopeSchema),
        (status = 400, description = "LMS rejected the call", body = EnvelopeSchema),
        (status = 404, description = "Not found", body = EnvelopeSchema),
        (status = 500, description = "LMS unreachable", body = EnvelopeSchema)
    ),
    tags = ["status"],
    operation_id = "checkStatus"
)]
#[post("/status")]
pub async fn check_status(state: web::Data<HttpState>) -> ApiResult<SiteStatusResponse> {
    let dispatch = Dispatch::new(&state, GatewayOperation::CheckStatus);
    let status = state
        .lms
        .check_status()
        .await
        .map_err(|err| dispatch.fail(err))?;
    Ok(dispatch.complete(Envelope::success(status.into())))
}
