//! Route table for the gateway operations.
//!
//! ```text
//! POST /status
//! POST /users
//! POST /users/search
//! PUT  /users
//! POST /users/sync
//! POST /roles/assign
//! ```

use actix_web::web;

use crate::inbound::http::roles::assign_role;
use crate::inbound::http::status::check_status;
use crate::inbound::http::users::{create_user, get_user_by_field, update_users, user_sync};

/// Largest request body the gateway reads, in bytes.
///
/// Larger bodies are rejected through the operation's binding policy.
pub const MAX_BODY_BYTES: usize = 4 * 1024 * 1024;

/// Register every gateway operation on `cfg`.
///
/// Handlers expect `web::Data<HttpState>` in the application data. The body
/// size limit is installed here as well.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use lms_gateway::inbound::http::routes::configure;
///
/// let app = App::new().configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::PayloadConfig::new(MAX_BODY_BYTES))
        .service(check_status)
        .service(create_user)
        .service(get_user_by_field)
        .service(update_users)
        .service(user_sync)
        .service(assign_role);
}
