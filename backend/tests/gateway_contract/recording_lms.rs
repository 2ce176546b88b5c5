//! Recording `LmsUserService` double for the contract suite.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use lms_gateway::domain::ports::{LmsError, LmsUserService};
use lms_gateway::domain::{
    CreatedUser, LmsUser, NewUser, RoleAssignment, SiteStatus, UpdateUsersOutcome, UserLookup,
    UserSync, UserUpdate,
};

/// One recorded port call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum LmsCall {
    CheckStatus,
    CreateUser(String),
    GetUserByField(UserLookup),
    UpdateUsers(Vec<UserUpdate>),
    UserSync(String),
    AssignRole(RoleAssignment),
}

#[derive(Clone, Default)]
pub(crate) struct RecordingLms {
    calls: Arc<Mutex<Vec<LmsCall>>>,
    failure: Arc<Mutex<Option<LmsError>>>,
}

impl RecordingLms {
    pub(crate) fn calls(&self) -> Vec<LmsCall> {
        self.calls.lock().expect("lms calls lock").clone()
    }

    /// Make every subsequent call fail with `failure`.
    pub(crate) fn fail_with(&self, failure: LmsError) {
        *self.failure.lock().expect("lms failure lock") = Some(failure);
    }

    fn record(&self, call: LmsCall) -> Result<(), LmsError> {
        self.calls.lock().expect("lms calls lock").push(call);
        match self.failure.lock().expect("lms failure lock").clone() {
            Some(failure) => Err(failure),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl LmsUserService for RecordingLms {
    async fn check_status(&self) -> Result<SiteStatus, LmsError> {
        self.record(LmsCall::CheckStatus)?;
        Ok(SiteStatus {
            site_name: "Campus LMS".to_owned(),
            site_url: "https://lms.example.org".to_owned(),
            ..SiteStatus::default()
        })
    }

    async fn create_user(&self, user: &NewUser) -> Result<CreatedUser, LmsError> {
        self.record(LmsCall::CreateUser(user.username.clone()))?;
        Ok(CreatedUser {
            id: 42,
            username: user.username.clone(),
        })
    }

    async fn get_user_by_field(&self, lookup: &UserLookup) -> Result<Vec<LmsUser>, LmsError> {
        self.record(LmsCall::GetUserByField(lookup.clone()))?;
        Ok(vec![LmsUser {
            id: 7,
            email: Some(lookup.value.clone()),
            ..LmsUser::default()
        }])
    }

    async fn update_users(&self, updates: &[UserUpdate]) -> Result<UpdateUsersOutcome, LmsError> {
        self.record(LmsCall::UpdateUsers(updates.to_vec()))?;
        Ok(UpdateUsersOutcome::default())
    }

    async fn user_sync(&self, sync: &UserSync) -> Result<(), LmsError> {
        self.record(LmsCall::UserSync(sync.username.clone()))
    }

    async fn assign_role(&self, assignment: &RoleAssignment) -> Result<(), LmsError> {
        self.record(LmsCall::AssignRole(*assignment))
    }
}
