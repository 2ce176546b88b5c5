//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the six gateway operations, the health probes, the
//! request and response records, and the envelope wrapper schemas from
//! [`crate::inbound::http::schemas`].
//!
//! The generated document is served by Swagger UI (debug builds) and
//! exported via `cargo run --bin openapi-dump` for external tooling.

use crate::inbound::http::roles::RoleAssignRequest;
use crate::inbound::http::schemas::{EnvelopeSchema, ResponseCodeSchema};
use crate::inbound::http::status::SiteStatusResponse;
use crate::inbound::http::users::{
    CreateUserRequest, CreatedUserResponse, UpdateWarningResponse, UserLookupRequest,
    UserResponse, UserSyncRequest, UserUpdateRequest,
};
use utoipa::OpenApi;

/// OpenAPI document for the gateway.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "LMS user-management gateway",
        description = "JSON gateway in front of a Moodle site. Every operation answers with a {code, message, data} envelope."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::status::check_status,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::get_user_by_field,
        crate::inbound::http::users::update_users,
        crate::inbound::http::users::user_sync,
        crate::inbound::http::roles::assign_role,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        EnvelopeSchema,
        ResponseCodeSchema,
        SiteStatusResponse,
        CreateUserRequest,
        CreatedUserResponse,
        UserLookupRequest,
        UserResponse,
        UserUpdateRequest,
        UpdateWarningResponse,
        UserSyncRequest,
        RoleAssignRequest,
    )),
    tags(
        (name = "status", description = "LMS reachability"),
        (name = "users", description = "Account provisioning and lookup"),
        (name = "roles", description = "Role assignment"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
