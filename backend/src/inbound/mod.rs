//! Inbound adapters that translate external requests into calls on the
//! domain ports while keeping framework details at the edge.
//!
//! HTTP handlers live under [`http`].

pub mod http;
