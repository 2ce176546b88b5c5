//! Driving port for LMS user-management use cases.
//!
//! HTTP handlers call this port without knowing how the LMS is reached. The
//! production adapter speaks the Moodle REST protocol; tests substitute mocks
//! or recording doubles.

use async_trait::async_trait;

use crate::domain::{
    CreatedUser, LmsUser, NewUser, RoleAssignment, SiteStatus, UpdateUsersOutcome, UserLookup,
    UserSync, UserUpdate,
};

/// Failures surfaced by `LmsUserService` implementations.
///
/// Each failure is produced once by the adapter and consumed once by the
/// inbound classifier; nothing retries or rewrites it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LmsError {
    /// The queried entity does not exist in the LMS.
    #[error("{message}")]
    NotFound { message: String },
    /// The LMS rejected the call with a structured error code.
    #[error("{message}")]
    Exception { error_code: String, message: String },
    /// Any other failure: transport, timeout, undecodable reply.
    #[error("{message}")]
    Unclassified { message: String },
}

impl LmsError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn exception(error_code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Exception {
            error_code: error_code.into(),
            message: message.into(),
        }
    }

    pub fn unclassified(message: impl Into<String>) -> Self {
        Self::Unclassified {
            message: message.into(),
        }
    }
}

/// User-management operations offered by the LMS.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LmsUserService: Send + Sync {
    /// Report whether the LMS is reachable and which site it serves.
    async fn check_status(&self) -> Result<SiteStatus, LmsError>;

    /// Provision a single account.
    async fn create_user(&self, user: &NewUser) -> Result<CreatedUser, LmsError>;

    /// Return every account whose field matches.
    ///
    /// Implementations report an empty match set as [`LmsError::NotFound`].
    async fn get_user_by_field(&self, lookup: &UserLookup) -> Result<Vec<LmsUser>, LmsError>;

    /// Submit an ordered batch of updates as one call.
    async fn update_users(&self, updates: &[UserUpdate]) -> Result<UpdateUsersOutcome, LmsError>;

    /// Create or update the account identified by `sync.username`.
    async fn user_sync(&self, sync: &UserSync) -> Result<(), LmsError>;

    /// Grant a role to a user within a context.
    async fn assign_role(&self, assignment: &RoleAssignment) -> Result<(), LmsError>;
}
