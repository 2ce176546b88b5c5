//! Domain ports for the hexagonal boundary.

mod lms_user_service;
mod request_observer;

#[cfg(test)]
pub use lms_user_service::MockLmsUserService;
pub use lms_user_service::{LmsError, LmsUserService};
#[cfg(test)]
pub use request_observer::MockRequestObserver;
pub use request_observer::{NoOpRequestObserver, RequestObserver};
