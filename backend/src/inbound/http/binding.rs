//! Structural binding of request bodies into typed requests.
//!
//! Binding decodes the raw body and checks that required members are present
//! and non-empty. Nothing here consults the LMS, so a body that binds may
//! still be rejected downstream.

use actix_web::http::StatusCode;
use actix_web::web;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::envelope::{ApiFailure, ResponseCode};

/// Request body as handed over by actix.
///
/// Handlers take the extractor's `Result` so that an unreadable body, such
/// as one over the configured size limit, is rejected with an envelope.
pub type RequestBody = Result<web::Bytes, actix_web::Error>;

/// Why a body could not be bound.
#[derive(Debug, thiserror::Error)]
pub enum BindingError {
    /// The body could not be read, e.g. it exceeded the size limit.
    #[error("request body could not be read: {0}")]
    Unreadable(String),
    /// Malformed JSON or a member of the wrong type.
    #[error("{0}")]
    Decode(#[from] serde_json::Error),
    /// A required member was absent, blank or zero.
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },
    /// An element of a JSON array failed to bind.
    #[error("record {index}: {source}")]
    Element {
        index: usize,
        source: Box<BindingError>,
    },
}

/// Request payloads that can be bound from a JSON body.
pub trait Bind: DeserializeOwned {
    /// Decode `body` without checking required members.
    fn decode(body: &[u8]) -> Result<Self, BindingError> {
        Ok(serde_json::from_slice(body)?)
    }

    /// Reject values whose required members are missing.
    fn check_required(&self) -> Result<(), BindingError> {
        Ok(())
    }
}

impl<T: Bind> Bind for Vec<T> {
    fn decode(body: &[u8]) -> Result<Self, BindingError> {
        let raw: Vec<Value> = serde_json::from_slice(body)?;
        raw.into_iter()
            .enumerate()
            .map(|(index, value)| {
                serde_json::from_value(value).map_err(|err| element_error(index, err.into()))
            })
            .collect()
    }

    fn check_required(&self) -> Result<(), BindingError> {
        self.iter().enumerate().try_for_each(|(index, item)| {
            item.check_required()
                .map_err(|err| element_error(index, err))
        })
    }
}

fn element_error(index: usize, source: BindingError) -> BindingError {
    BindingError::Element {
        index,
        source: Box::new(source),
    }
}

/// Require a present, non-blank string member.
pub(crate) fn require_text(value: &Option<String>, field: &'static str) -> Result<(), BindingError> {
    match value.as_deref() {
        Some(text) if !text.trim().is_empty() => Ok(()),
        _ => Err(BindingError::MissingField { field }),
    }
}

/// Require a present, non-zero identifier.
pub(crate) fn require_id(value: Option<u64>, field: &'static str) -> Result<(), BindingError> {
    match value {
        Some(id) if id != 0 => Ok(()),
        _ => Err(BindingError::MissingField { field }),
    }
}

/// Read the extracted body and bind it.
///
/// # Errors
///
/// Returns [`BindingError::Unreadable`] when extraction failed, otherwise
/// whatever [`bind`] reports.
pub fn bind_body<T: Bind>(body: RequestBody) -> Result<T, BindingError> {
    let bytes = body.map_err(|err| BindingError::Unreadable(err.to_string()))?;
    bind(&bytes)
}

/// Decode `body` and check its required members.
///
/// # Examples
/// ```
/// use lms_gateway::inbound::http::binding::bind;
/// use lms_gateway::inbound::http::users::UserLookupRequest;
///
/// let lookup: UserLookupRequest = bind(br#"{"field":"email","value":"a@b.c"}"#)
///     .expect("valid lookup");
/// assert_eq!(lookup.field.as_deref(), Some("email"));
/// assert!(bind::<UserLookupRequest>(b"{").is_err());
/// ```
pub fn bind<T: Bind>(body: &[u8]) -> Result<T, BindingError> {
    let value = T::decode(body)?;
    value.check_required()?;
    Ok(value)
}

const INVALID_BODY_MESSAGE: &str = "Invalid request body format.";

/// Envelope shape an operation uses for binding failures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BindingPolicy {
    /// `INVALID_PARAMS` with the error text as message.
    #[default]
    InvalidParams,
    /// `INVALID_REQUEST_BODY` with a fixed message and the error text as data.
    InvalidRequestBody,
    /// `INVALID_REQUEST` with the error text prefixed by `Invalid data submitted: `.
    InvalidRequest,
}

impl BindingPolicy {
    /// Render `error` as a `400` failure.
    pub fn reject(self, error: &BindingError) -> ApiFailure {
        let detail = error.to_string();
        match self {
            Self::InvalidParams => {
                ApiFailure::new(StatusCode::BAD_REQUEST, ResponseCode::InvalidParams, detail)
            }
            Self::InvalidRequestBody => ApiFailure::new(
                StatusCode::BAD_REQUEST,
                ResponseCode::InvalidRequestBody,
                INVALID_BODY_MESSAGE,
            )
            .with_data(Value::String(detail)),
            Self::InvalidRequest => ApiFailure::new(
                StatusCode::BAD_REQUEST,
                ResponseCode::InvalidRequest,
                format!("Invalid data submitted: {detail}"),
            ),
        }
    }
}
