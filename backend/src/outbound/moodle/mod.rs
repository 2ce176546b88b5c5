//! Moodle outbound adapter.
//!
//! This module provides an HTTP implementation of the `LmsUserService` port
//! over Moodle's REST web service protocol.

mod client;
mod dto;
mod params;

pub use client::MoodleHttpClient;
