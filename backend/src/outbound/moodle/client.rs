//! Reqwest-backed Moodle web service adapter.
//!
//! This adapter owns transport details only: form encoding, timeout and HTTP
//! error mapping, exception detection, and JSON decoding into domain records.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use super::dto::{CreatedUserDto, ExceptionDto, SiteInfoDto, UpdateUsersDto, UserDto};
use super::params::{self, FormParams};
use crate::domain::ports::{LmsError, LmsUserService};
use crate::domain::{
    CreatedUser, LmsUser, NewUser, RoleAssignment, SiteStatus, UpdateUsersOutcome, UserLookup,
    UserSync, UserUpdate,
};

const SITE_INFO: &str = "core_webservice_get_site_info";
const CREATE_USERS: &str = "core_user_create_users";
const USERS_BY_FIELD: &str = "core_user_get_users_by_field";
const UPDATE_USERS: &str = "core_user_update_users";
const ASSIGN_ROLES: &str = "core_role_assign_roles";

const USER_NOT_FOUND: &str = "user not found";

/// Moodle adapter posting to one REST endpoint with one web service token.
pub struct MoodleHttpClient {
    client: Client,
    endpoint: Url,
    token: String,
}

impl MoodleHttpClient {
    /// Build an adapter using a reqwest client with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(
        endpoint: Url,
        token: impl Into<String>,
        timeout: Duration,
        user_agent: &str,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            endpoint,
            token: token.into(),
        })
    }

    async fn call<T: DeserializeOwned>(
        &self,
        function: &'static str,
        params: FormParams,
    ) -> Result<T, LmsError> {
        debug!(function, endpoint = %self.endpoint, "calling Moodle web service");
        let form = params.with_protocol(&self.token, function);
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .form(form.pairs())
            .send()
            .await
            .map_err(|error| map_transport_error(function, error))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|error| map_transport_error(function, error))?;
        if !status.is_success() {
            return Err(map_status_error(function, status, body.as_ref()));
        }
        decode_reply(function, body.as_ref())
    }

    async fn find_users(&self, field: &str, value: &str) -> Result<Vec<LmsUser>, LmsError> {
        let users: Vec<UserDto> = self
            .call(USERS_BY_FIELD, params::users_by_field(field, value))
            .await?;
        Ok(users.into_iter().map(LmsUser::from).collect())
    }
}

#[async_trait]
impl LmsUserService for MoodleHttpClient {
    async fn check_status(&self) -> Result<SiteStatus, LmsError> {
        let info: SiteInfoDto = self.call(SITE_INFO, FormParams::new()).await?;
        Ok(info.into())
    }

    async fn create_user(&self, user: &NewUser) -> Result<CreatedUser, LmsError> {
        let created: Vec<CreatedUserDto> =
            self.call(CREATE_USERS, params::create_users(user)).await?;
        created
            .into_iter()
            .next()
            .map(CreatedUser::from)
            .ok_or_else(|| LmsError::unclassified(format!("{CREATE_USERS}: empty reply")))
    }

    async fn get_user_by_field(&self, lookup: &UserLookup) -> Result<Vec<LmsUser>, LmsError> {
        let users = self.find_users(&lookup.field, &lookup.value).await?;
        if users.is_empty() {
            return Err(LmsError::not_found(USER_NOT_FOUND));
        }
        Ok(users)
    }

    async fn update_users(&self, updates: &[UserUpdate]) -> Result<UpdateUsersOutcome, LmsError> {
        let reply: Option<UpdateUsersDto> =
            self.call(UPDATE_USERS, params::update_users(updates)).await?;
        Ok(reply.unwrap_or_default().into())
    }

    async fn user_sync(&self, sync: &UserSync) -> Result<(), LmsError> {
        let existing = self.find_users("username", &sync.username).await?;
        match existing.first() {
            Some(user) => {
                let update = sync.clone().into_update(user.id);
                let outcome = self.update_users(&[update]).await?;
                match outcome.warnings.into_iter().next() {
                    Some(warning) => Err(LmsError::exception(warning.warning_code, warning.message)),
                    None => Ok(()),
                }
            }
            None => {
                let user = NewUser {
                    username: sync.username.clone(),
                    password: sync.password.clone().unwrap_or_default(),
                    first_name: sync.first_name.clone(),
                    last_name: sync.last_name.clone(),
                    email: sync.email.clone(),
                    auth: sync.auth.clone(),
                    id_number: sync.id_number.clone(),
                };
                self.create_user(&user).await.map(|_| ())
            }
        }
    }

    async fn assign_role(&self, assignment: &RoleAssignment) -> Result<(), LmsError> {
        let _: Value = self
            .call(ASSIGN_ROLES, params::assign_roles(assignment))
            .await?;
        Ok(())
    }
}

/// Decode a 2xx reply, surfacing Moodle exceptions as structured failures.
///
/// Void functions answer `null` or an empty body.
fn decode_reply<T: DeserializeOwned>(function: &str, body: &[u8]) -> Result<T, LmsError> {
    let reply: Value = if body.iter().all(u8::is_ascii_whitespace) {
        Value::Null
    } else {
        serde_json::from_slice(body).map_err(|error| {
            LmsError::unclassified(format!(
                "{function}: invalid JSON reply: {error}; body: {}",
                body_preview(body)
            ))
        })?
    };
    if let Some(exception) = ExceptionDto::from_reply(&reply) {
        return Err(LmsError::exception(exception.errorcode, exception.message));
    }
    serde_json::from_value(reply).map_err(|error| {
        LmsError::unclassified(format!("{function}: unexpected reply shape: {error}"))
    })
}

fn map_transport_error(function: &str, error: reqwest::Error) -> LmsError {
    if error.is_timeout() {
        LmsError::unclassified(format!("{function}: timed out: {error}"))
    } else {
        LmsError::unclassified(format!("{function}: transport error: {error}"))
    }
}

fn map_status_error(function: &str, status: StatusCode, body: &[u8]) -> LmsError {
    let body_preview = body_preview(body);
    if body_preview.is_empty() {
        LmsError::unclassified(format!("{function}: status {}", status.as_u16()))
    } else {
        LmsError::unclassified(format!(
            "{function}: status {}: {body_preview}",
            status.as_u16()
        ))
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
