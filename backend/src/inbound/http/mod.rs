//! HTTP inbound adapter exposing the gateway's REST endpoints.

pub mod binding;
pub mod classify;
pub mod dispatch;
pub mod envelope;
pub mod health;
pub mod roles;
pub mod routes;
pub mod schemas;
pub mod state;
pub mod status;
#[cfg(test)]
pub mod test_utils;
pub mod users;

pub use envelope::{ApiFailure, ApiResult, Envelope, ResponseCode};
