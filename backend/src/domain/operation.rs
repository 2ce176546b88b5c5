//! Names of the use cases the gateway exposes.

use std::fmt;

/// One gateway use case, used to label observer events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GatewayOperation {
    /// Site reachability check.
    CheckStatus,
    /// Provision one account.
    CreateUser,
    /// Look accounts up by a single field.
    GetUserByField,
    /// Batch update of existing accounts.
    UpdateUsers,
    /// Create or update by username.
    UserSync,
    /// Grant a role in a context.
    AssignRole,
}

impl GatewayOperation {
    /// Stable snake-case label for logs.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CheckStatus => "check_status",
            Self::CreateUser => "create_user",
            Self::GetUserByField => "get_user_by_field",
            Self::UpdateUsers => "update_users",
            Self::UserSync => "user_sync",
            Self::AssignRole => "assign_role",
        }
    }
}

impl fmt::Display for GatewayOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
