//! User management handlers.
//!
//! ```text
//! POST /users        {"username":"ada","password":"...","firstName":"Ada",...}
//! POST /users/search {"field":"email","value":"ada@example.org"}
//! PUT  /users        [{"id":42,"email":"ada@example.org"}, ...]
//! POST /users/sync   {"username":"ada","firstName":"Ada",...}
//! ```
//!
//! Bodies are read as raw bytes and bound here so each operation controls the
//! envelope it returns for a malformed body.

use actix_web::{post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    CreatedUser, GatewayOperation, LmsUser, NewUser, UpdateWarning, UserLookup, UserSync,
    UserUpdate,
};
use crate::inbound::http::binding::{Bind, BindingError, RequestBody, require_id, require_text};
use crate::inbound::http::dispatch::Dispatch;
use crate::inbound::http::envelope::{ApiResult, Envelope};
use crate::inbound::http::schemas::EnvelopeSchema;
use crate::inbound::http::state::HttpState;

const UPDATED_MESSAGE: &str = "Users updated successfully";
const UPDATED_WITH_WARNINGS_MESSAGE: &str = "Users updated with warnings";
const SYNCED_MESSAGE: &str = "User synced successfully";

/// Request body for `POST /users`.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub username: Option<String>,
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_number: Option<String>,
}

impl Bind for CreateUserRequest {
    fn check_required(&self) -> Result<(), BindingError> {
        require_text(&self.username, "username")?;
        require_text(&self.password, "password")?;
        require_text(&self.first_name, "firstName")?;
        require_text(&self.last_name, "lastName")?;
        require_text(&self.email, "email")
    }
}

impl From<CreateUserRequest> for NewUser {
    fn from(value: CreateUserRequest) -> Self {
        Self {
            username: value.username.unwrap_or_default(),
            password: value.password.unwrap_or_default(),
            first_name: value.first_name.unwrap_or_default(),
            last_name: value.last_name.unwrap_or_default(),
            email: value.email.unwrap_or_default(),
            auth: value.auth,
            id_number: value.id_number,
        }
    }
}

/// Account created by `POST /users`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CreatedUserResponse {
    pub id: u64,
    pub username: String,
}

impl From<CreatedUser> for CreatedUserResponse {
    fn from(value: CreatedUser) -> Self {
        Self {
            id: value.id,
            username: value.username,
        }
    }
}

/// Request body for `POST /users/search`.
///
/// `field` is passed to the LMS as given; the LMS decides which fields it
/// can search on.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct UserLookupRequest {
    #[schema(example = "email")]
    pub field: Option<String>,
    pub value: Option<String>,
}

impl Bind for UserLookupRequest {
    fn check_required(&self) -> Result<(), BindingError> {
        require_text(&self.field, "field")?;
        require_text(&self.value, "value")
    }
}

impl From<UserLookupRequest> for UserLookup {
    fn from(value: UserLookupRequest) -> Self {
        Self {
            field: value.field.unwrap_or_default(),
            value: value.value.unwrap_or_default(),
        }
    }
}

/// User profile returned by `POST /users/search`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suspended: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_number: Option<String>,
}

impl From<LmsUser> for UserResponse {
    fn from(value: LmsUser) -> Self {
        Self {
            id: value.id,
            username: value.username,
            first_name: value.first_name,
            last_name: value.last_name,
            full_name: value.full_name,
            email: value.email,
            auth: value.auth,
            suspended: value.suspended,
            id_number: value.id_number,
        }
    }
}

/// One element of the `PUT /users` body.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdateRequest {
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suspended: Option<bool>,
}

impl Bind for UserUpdateRequest {
    fn check_required(&self) -> Result<(), BindingError> {
        require_id(self.id, "id")
    }
}

impl From<UserUpdateRequest> for UserUpdate {
    fn from(value: UserUpdateRequest) -> Self {
        Self {
            id: value.id.unwrap_or_default(),
            username: value.username,
            password: value.password,
            first_name: value.first_name,
            last_name: value.last_name,
            email: value.email,
            auth: value.auth,
            id_number: value.id_number,
            suspended: value.suspended,
        }
    }
}

/// Record the LMS skipped while accepting a batch update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWarningResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_id: Option<u64>,
    pub warning_code: String,
    pub message: String,
}

impl From<UpdateWarning> for UpdateWarningResponse {
    fn from(value: UpdateWarning) -> Self {
        Self {
            item: value.item,
            item_id: value.item_id,
            warning_code: value.warning_code,
            message: value.message,
        }
    }
}

/// Request body for `POST /users/sync`.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserSyncRequest {
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_number: Option<String>,
}

impl Bind for UserSyncRequest {
    fn check_required(&self) -> Result<(), BindingError> {
        require_text(&self.username, "username")?;
        require_text(&self.first_name, "firstName")?;
        require_text(&self.last_name, "lastName")?;
        require_text(&self.email, "email")
    }
}

impl From<UserSyncRequest> for UserSync {
    fn from(value: UserSyncRequest) -> Self {
        Self {
            username: value.username.unwrap_or_default(),
            first_name: value.first_name.unwrap_or_default(),
            last_name: value.last_name.unwrap_or_default(),
            email: value.email.unwrap_or_default(),
            password: value.password,
            auth: value.auth,
            id_number: value.id_number,
        }
    }
}

/// Provision a new LMS account.
#[utoipa::path(
    post,
    path = "/users",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "Account created; data is a CreatedUserResponse", body = EnvelopeSchema),
        (status = 400, description = "Malformed body or LMS rejection", body = EnvelopeSchema),
        (status = 500, description = "LMS unreachable", body = EnvelopeSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    body: RequestBody,
) -> ApiResult<CreatedUserResponse> {
    let dispatch = Dispatch::new(&state, GatewayOperation::CreateUser);
    let request: CreateUserRequest = dispatch.bind(body)?;
    let created = state
        .lms
        .create_user(&request.into())
        .await
        .map_err(|err| dispatch.fail(err))?;
    Ok(dispatch.complete(Envelope::success(created.into())))
}

/// Find the accounts whose field matches a value.
#[utoipa::path(
    post,
    path = "/users/search",
    request_body = UserLookupRequest,
    responses(
        (status = 200, description = "Matches; data is a list of UserResponse", body = EnvelopeSchema),
        (status = 400, description = "Malformed body or LMS rejection", body = EnvelopeSchema),
        (status = 404, description = "No account matches", body = EnvelopeSchema),
        (status = 500, description = "LMS unreachable", body = EnvelopeSchema)
    ),
    tags = ["users"],
    operation_id = "getUserByField"
)]
#[post("/users/search")]
pub async fn get_user_by_field(
    state: web::Data<HttpState>,
    body: RequestBody,
) -> ApiResult<Vec<UserResponse>> {
    let dispatch = Dispatch::new(&state, GatewayOperation::GetUserByField);
    let request: UserLookupRequest = dispatch.bind(body)?;
    let users = state
        .lms
        .get_user_by_field(&request.into())
        .await
        .map_err(|err| dispatch.fail(err))?;
    let data: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();
    Ok(dispatch.complete(Envelope::success(data)))
}

/// Apply a batch of partial updates in one LMS call.
///
/// Records the LMS skipped are listed in `data`; a failed call fails the
/// whole batch.
#[utoipa::path(
    put,
    path = "/users",
    request_body = [UserUpdateRequest],
    responses(
        (status = 200, description = "Batch accepted; data lists UpdateWarningResponse items when present", body = EnvelopeSchema),
        (status = 400, description = "Malformed body or LMS rejection", body = EnvelopeSchema),
        (status = 404, description = "Not found", body = EnvelopeSchema),
        (status = 500, description = "LMS unreachable", body = EnvelopeSchema)
    ),
    tags = ["users"],
    operation_id = "updateUsers"
)]
#[put("/users")]
pub async fn update_users(
    state: web::Data<HttpState>,
    body: RequestBody,
) -> ApiResult<Vec<UpdateWarningResponse>> {
    let dispatch = Dispatch::new(&state, GatewayOperation::UpdateUsers);
    let request: Vec<UserUpdateRequest> = dispatch.bind(body)?;
    let updates: Vec<UserUpdate> = request.into_iter().map(UserUpdate::from).collect();
    let outcome = state
        .lms
        .update_users(&updates)
        .await
        .map_err(|err| dispatch.fail(err))?;
    let envelope = if outcome.is_clean() {
        Envelope::acknowledged(UPDATED_MESSAGE)
    } else {
        let warnings: Vec<UpdateWarningResponse> = outcome
            .warnings
            .into_iter()
            .map(UpdateWarningResponse::from)
            .collect();
        Envelope::acknowledged(UPDATED_WITH_WARNINGS_MESSAGE).with_data(warnings)
    };
    Ok(dispatch.complete(envelope))
}

/// Create or update the account named by `username`.
#[utoipa::path(
    post,
    path = "/users/sync",
    request_body = UserSyncRequest,
    responses(
        (status = 200, description = "Account synchronised", body = EnvelopeSchema),
        (status = 400, description = "Malformed body or any LMS failure (USER_SYNC_FAILED)", body = EnvelopeSchema)
    ),
    tags = ["users"],
    operation_id = "userSync"
)]
#[post("/users/sync")]
pub async fn user_sync(state: web::Data<HttpState>, body: RequestBody) -> ApiResult<()> {
    let dispatch = Dispatch::new(&state, GatewayOperation::UserSync);
    let request: UserSyncRequest = dispatch.bind(body)?;
    state
        .lms
        .user_sync(&request.into())
        .await
        .map_err(|err| dispatch.fail(err))?;
    Ok(dispatch.complete(Envelope::acknowledged(SYNCED_MESSAGE)))
}
