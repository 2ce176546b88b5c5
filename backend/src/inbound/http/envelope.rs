//! Uniform `{code, message, data}` response envelope.
//!
//! Every gateway endpoint answers with [`Envelope`], for successes and for
//! failures alike. Handlers return [`ApiResult`]: the `Ok` side renders as
//! `200 OK`, the `Err` side ([`ApiFailure`]) carries its own status. A
//! handler returns exactly one of the two, so each request gets exactly one
//! response body.

use std::fmt;

use actix_web::body::BoxBody;
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, Responder, ResponseError};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Convenient result alias for gateway handlers.
pub type ApiResult<T> = Result<Envelope<T>, ApiFailure>;

/// Machine-readable envelope code.
///
/// The fixed vocabulary is modelled as variants; codes reported by the LMS
/// travel through [`ResponseCode::Downstream`] unchanged, including an empty
/// string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ResponseCode {
    /// `OK`: the operation succeeded.
    Ok,
    /// `INVALID_PARAMS`: the body failed to bind for create or update.
    InvalidParams,
    /// `INVALID_REQUEST`: the body failed to bind for sync or role assignment.
    InvalidRequest,
    /// `INVALID_REQUEST_BODY`: the lookup body failed to bind.
    InvalidRequestBody,
    /// `DATA_NOT_FOUND`: the LMS reported no matching entity.
    DataNotFound,
    /// `USER_SYNC_FAILED`: any delegate failure during sync.
    UserSyncFailed,
    /// `USER_ASSIGN_FAILED`: any delegate failure during role assignment.
    UserAssignFailed,
    /// `INTERNAL_SERVER_ERROR`: an unclassified failure.
    InternalServerError,
    /// An LMS error code passed through verbatim.
    Downstream(String),
}

impl ResponseCode {
    /// Wire representation of the code.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Ok => "OK",
            Self::InvalidParams => "INVALID_PARAMS",
            Self::InvalidRequest => "INVALID_REQUEST",
            Self::InvalidRequestBody => "INVALID_REQUEST_BODY",
            Self::DataNotFound => "DATA_NOT_FOUND",
            Self::UserSyncFailed => "USER_SYNC_FAILED",
            Self::UserAssignFailed => "USER_ASSIGN_FAILED",
            Self::InternalServerError => "INTERNAL_SERVER_ERROR",
            Self::Downstream(code) => code.as_str(),
        }
    }
}

impl From<String> for ResponseCode {
    fn from(value: String) -> Self {
        match value.as_str() {
            "OK" => Self::Ok,
            "INVALID_PARAMS" => Self::InvalidParams,
            "INVALID_REQUEST" => Self::InvalidRequest,
            "INVALID_REQUEST_BODY" => Self::InvalidRequestBody,
            "DATA_NOT_FOUND" => Self::DataNotFound,
            "USER_SYNC_FAILED" => Self::UserSyncFailed,
            "USER_ASSIGN_FAILED" => Self::UserAssignFailed,
            "INTERNAL_SERVER_ERROR" => Self::InternalServerError,
            _ => Self::Downstream(value),
        }
    }
}

impl From<ResponseCode> for String {
    fn from(value: ResponseCode) -> Self {
        match value {
            ResponseCode::Downstream(code) => code,
            other => other.as_str().to_owned(),
        }
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The only response body shape the gateway emits.
///
/// `data` is omitted from the JSON when absent.
///
/// # Examples
/// ```
/// use lms_gateway::inbound::http::envelope::{Envelope, ResponseCode};
///
/// let ok = Envelope::success(vec![1, 2, 3]);
/// assert_eq!(ok.code, ResponseCode::Ok);
/// assert_eq!(ok.message, "OK");
///
/// let ack = Envelope::<()>::acknowledged("User synced successfully");
/// assert!(ack.data.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T = Value> {
    pub code: ResponseCode,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// `OK` envelope carrying a payload.
    pub fn success(data: T) -> Self {
        Self {
            code: ResponseCode::Ok,
            message: "OK".to_owned(),
            data: Some(data),
        }
    }

    /// `OK` envelope with a custom message and no payload.
    pub fn acknowledged(message: impl Into<String>) -> Self {
        Self {
            code: ResponseCode::Ok,
            message: message.into(),
            data: None,
        }
    }

    /// Attach a payload.
    #[must_use]
    pub fn with_data(mut self, data: T) -> Self {
        self.data = Some(data);
        self
    }
}

impl Envelope<Value> {
    /// Failure envelope with no payload.
    pub fn failure(code: ResponseCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }
}

impl<T: Serialize> Responder for Envelope<T> {
    type Body = BoxBody;

    fn respond_to(self, _req: &HttpRequest) -> HttpResponse<Self::Body> {
        HttpResponse::Ok().json(self)
    }
}

/// Failure response: an HTTP status paired with a failure envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiFailure {
    status: StatusCode,
    envelope: Envelope<Value>,
}

impl ApiFailure {
    /// Build a failure from its parts.
    pub fn new(status: StatusCode, code: ResponseCode, message: impl Into<String>) -> Self {
        Self {
            status,
            envelope: Envelope::failure(code, message),
        }
    }

    /// Attach diagnostic detail as the envelope payload.
    #[must_use]
    pub fn with_data(mut self, data: Value) -> Self {
        self.envelope.data = Some(data);
        self
    }

    /// HTTP status the failure renders with.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Envelope rendered as the response body.
    pub fn envelope(&self) -> &Envelope<Value> {
        &self.envelope
    }
}

impl fmt::Display for ApiFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.envelope.code, self.envelope.message)
    }
}

impl std::error::Error for ApiFailure {}

impl ResponseError for ApiFailure {
    fn status_code(&self) -> StatusCode {
        self.status
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status).json(&self.envelope)
    }
}

#[cfg(test)]
mod tests;
