//! LMS user records exchanged across the `LmsUserService` port.
//!
//! These are plain records with no transport concerns. Inbound adapters build
//! them from request payloads; outbound adapters encode them for the LMS and
//! decode LMS replies back into them.

/// Fields required to provision a new LMS account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Authentication plugin name; the LMS default applies when absent.
    pub auth: Option<String>,
    pub id_number: Option<String>,
}

/// Account created by the LMS.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedUser {
    pub id: u64,
    pub username: String,
}

/// Selects users whose `field` equals `value`.
///
/// The field name is passed through untouched; the LMS decides which fields
/// are searchable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserLookup {
    pub field: String,
    pub value: String,
}

/// User profile as reported by the LMS.
///
/// Only `id` is guaranteed; the remaining members depend on the capabilities
/// of the web service account.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LmsUser {
    pub id: u64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub auth: Option<String>,
    pub suspended: Option<bool>,
    pub id_number: Option<String>,
}

/// Partial update for one existing account. `None` members are left as is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserUpdate {
    pub id: u64,
    pub username: Option<String>,
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub auth: Option<String>,
    pub id_number: Option<String>,
    pub suspended: Option<bool>,
}

/// Per-record warning returned by the LMS for a batch update it accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateWarning {
    pub item: Option<String>,
    pub item_id: Option<u64>,
    pub warning_code: String,
    pub message: String,
}

/// Result of a batch update accepted by the LMS.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateUsersOutcome {
    pub warnings: Vec<UpdateWarning>,
}

impl UpdateUsersOutcome {
    /// True when every record was applied without warnings.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Desired state of an account keyed by `username`.
///
/// Synchronising creates the account when the username is unknown and
/// updates it otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSync {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: Option<String>,
    pub auth: Option<String>,
    pub id_number: Option<String>,
}

impl UserSync {
    /// Express the sync as an update of the account with identifier `id`.
    pub fn into_update(self, id: u64) -> UserUpdate {
        UserUpdate {
            id,
            username: Some(self.username),
            password: self.password,
            first_name: Some(self.first_name),
            last_name: Some(self.last_name),
            email: Some(self.email),
            auth: self.auth,
            id_number: self.id_number,
            suspended: None,
        }
    }
}

/// Grants `role_id` to `user_id` within the LMS context `context_id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleAssignment {
    pub role_id: u64,
    pub user_id: u64,
    pub context_id: u64,
}

/// Reachability report for the LMS site.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteStatus {
    pub site_name: String,
    pub site_url: String,
    pub release: Option<String>,
    pub version: Option<String>,
    /// Web service account the gateway authenticates as.
    pub username: Option<String>,
}
