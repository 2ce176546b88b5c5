//! DTOs for decoding Moodle web service replies.
//!
//! Moodle names members in flat lowercase (`firstname`, `itemid`). Replies
//! are decoded into these DTOs first and then mapped onto domain records.

use serde::Deserialize;
use serde_json::Value;

use crate::domain::{CreatedUser, LmsUser, SiteStatus, UpdateUsersOutcome, UpdateWarning};

/// Structured error body Moodle returns with HTTP 200.
#[derive(Debug)]
pub(super) struct ExceptionDto {
    pub(super) errorcode: String,
    pub(super) message: String,
}

impl ExceptionDto {
    /// Extract the exception carried by `reply`, if any.
    pub(super) fn from_reply(reply: &Value) -> Option<Self> {
        let object = reply.as_object()?;
        if !object.contains_key("exception") {
            return None;
        }
        Some(Self {
            errorcode: text_member(object.get("errorcode")),
            message: text_member(object.get("message")),
        })
    }
}

fn text_member(value: Option<&Value>) -> String {
    value
        .and_then(Value::as_str)
        .map(str::to_owned)
        .unwrap_or_default()
}

#[derive(Debug, Deserialize)]
pub(super) struct SiteInfoDto {
    pub(super) sitename: String,
    pub(super) siteurl: String,
    pub(super) release: Option<String>,
    pub(super) version: Option<String>,
    pub(super) username: Option<String>,
}

impl From<SiteInfoDto> for SiteStatus {
    fn from(value: SiteInfoDto) -> Self {
        Self {
            site_name: value.sitename,
            site_url: value.siteurl,
            release: value.release,
            version: value.version,
            username: value.username,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct CreatedUserDto {
    pub(super) id: u64,
    pub(super) username: String,
}

impl From<CreatedUserDto> for CreatedUser {
    fn from(value: CreatedUserDto) -> Self {
        Self {
            id: value.id,
            username: value.username,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct UserDto {
    pub(super) id: u64,
    pub(super) username: Option<String>,
    pub(super) firstname: Option<String>,
    pub(super) lastname: Option<String>,
    pub(super) fullname: Option<String>,
    pub(super) email: Option<String>,
    pub(super) auth: Option<String>,
    pub(super) suspended: Option<bool>,
    pub(super) idnumber: Option<String>,
}

impl From<UserDto> for LmsUser {
    fn from(value: UserDto) -> Self {
        Self {
            id: value.id,
            username: value.username,
            first_name: value.firstname,
            last_name: value.lastname,
            full_name: value.fullname,
            email: value.email,
            auth: value.auth,
            suspended: value.suspended,
            id_number: value.idnumber.filter(|id| !id.is_empty()),
        }
    }
}

/// Reply of `core_user_update_users`; older Moodle releases answer `null`.
#[derive(Debug, Default, Deserialize)]
pub(super) struct UpdateUsersDto {
    #[serde(default)]
    pub(super) warnings: Vec<WarningDto>,
}

#[derive(Debug, Deserialize)]
pub(super) struct WarningDto {
    pub(super) item: Option<String>,
    pub(super) itemid: Option<u64>,
    #[serde(default)]
    pub(super) warningcode: String,
    #[serde(default)]
    pub(super) message: String,
}

impl From<UpdateUsersDto> for UpdateUsersOutcome {
    fn from(value: UpdateUsersDto) -> Self {
        Self {
            warnings: value
                .warnings
                .into_iter()
                .map(|warning| UpdateWarning {
                    item: warning.item,
                    item_id: warning.itemid,
                    warning_code: warning.warningcode,
                    message: warning.message,
                })
                .collect(),
        }
    }
}
