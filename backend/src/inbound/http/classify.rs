//! Mapping of LMS failures onto envelope status, code and message.
//!
//! Purpose: keep `LmsError` HTTP-agnostic while giving callers a stable,
//! enumerable set of codes. The mapping is pure; it neither retries nor
//! rewrites the error it inspects.

use actix_web::http::StatusCode;

use super::envelope::{ApiFailure, ResponseCode};
use crate::domain::ports::LmsError;

/// Message returned to callers for unclassified failures. The raw detail is
/// reported to the request observer instead.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Outcome of classifying one failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// HTTP status of the response.
    pub status: StatusCode,
    /// Envelope `code`.
    pub code: ResponseCode,
    /// Envelope `message`; never the raw detail of an unclassified failure.
    pub message: String,
}

/// How an operation turns delegate failures into responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Apply [`classify`].
    Classified,
    /// Report every failure as `400` with this code and the error's message.
    Fixed(ResponseCode),
}

impl FailurePolicy {
    /// Classify `error` under this policy.
    pub fn apply(&self, error: &LmsError) -> Classification {
        match self {
            Self::Classified => classify(error),
            Self::Fixed(code) => Classification {
                status: StatusCode::BAD_REQUEST,
                code: code.clone(),
                message: error.to_string(),
            },
        }
    }
}

/// General classifier.
///
/// | error          | status | code                    | message          |
/// |----------------|--------|-------------------------|------------------|
/// | `NotFound`     | 404    | `DATA_NOT_FOUND`        | error message    |
/// | `Exception`    | 400    | the LMS `error_code`    | error message    |
/// | `Unclassified` | 500    | `INTERNAL_SERVER_ERROR` | generic message  |
///
/// An `Exception` with an empty `error_code` is emitted as is.
///
/// # Examples
/// ```
/// use actix_web::http::StatusCode;
/// use lms_gateway::domain::ports::LmsError;
/// use lms_gateway::inbound::http::classify::classify;
///
/// let outcome = classify(&LmsError::exception("invalidtoken", "Invalid token"));
/// assert_eq!(outcome.status, StatusCode::BAD_REQUEST);
/// assert_eq!(outcome.code.as_str(), "invalidtoken");
/// ```
pub fn classify(error: &LmsError) -> Classification {
    match error {
        LmsError::NotFound { message } => Classification {
            status: StatusCode::NOT_FOUND,
            code: ResponseCode::DataNotFound,
            message: message.clone(),
        },
        LmsError::Exception {
            error_code,
            message,
        } => Classification {
            status: StatusCode::BAD_REQUEST,
            code: ResponseCode::from(error_code.clone()),
            message: message.clone(),
        },
        LmsError::Unclassified { .. } => Classification {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            code: ResponseCode::InternalServerError,
            message: INTERNAL_ERROR_MESSAGE.to_owned(),
        },
    }
}

impl From<Classification> for ApiFailure {
    fn from(value: Classification) -> Self {
        ApiFailure::new(value.status, value.code, value.message)
    }
}
