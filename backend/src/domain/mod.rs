//! Domain records and ports for the LMS gateway.
//!
//! Purpose: define the transport-agnostic records exchanged with the LMS and
//! the ports inbound adapters drive. Nothing here knows about HTTP or about
//! the Moodle wire protocol.
//!
//! Public surface:
//! - user records (`NewUser`, `LmsUser`, `UserUpdate`, ...) passed across
//!   the `LmsUserService` port;
//! - `GatewayOperation`, the use-case label used by observers;
//! - `ports`, the driving and side-channel ports.

pub mod operation;
pub mod ports;
pub mod user;

pub use self::operation::GatewayOperation;
pub use self::user::{
    CreatedUser, LmsUser, NewUser, RoleAssignment, SiteStatus, UpdateUsersOutcome, UpdateWarning,
    UserLookup, UserSync, UserUpdate,
};
