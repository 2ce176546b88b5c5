//! Request middleware.
//!
//! Purpose: request lifecycle concerns that sit outside the handlers, such as
//! trace correlation.

pub mod trace;

pub use trace::{TRACE_ID_HEADER, Trace, TraceId};
