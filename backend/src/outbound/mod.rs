//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **moodle**: `LmsUserService` over Moodle's REST web service protocol
//! - **observer**: `RequestObserver` emitting `tracing` events
//!
//! Adapters are thin translators between domain records and
//! infrastructure-specific representations. They contain no business logic.

pub mod moodle;
pub mod observer;
