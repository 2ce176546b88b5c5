//! OpenAPI schema definitions for the response envelope.
//!
//! `Envelope<T>` is generic and `ResponseCode` serialises through `String`,
//! so neither derives `ToSchema` directly. These wrappers describe their wire
//! shape for the generated document.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::inbound::http::envelope::ResponseCode`].
///
/// Codes emitted by the gateway itself. LMS error codes are passed through
/// verbatim and are not enumerated.
#[derive(ToSchema)]
#[schema(as = crate::inbound::http::envelope::ResponseCode)]
pub enum ResponseCodeSchema {
    #[schema(rename = "OK")]
    Ok,
    #[schema(rename = "INVALID_PARAMS")]
    InvalidParams,
    #[schema(rename = "INVALID_REQUEST")]
    InvalidRequest,
    #[schema(rename = "INVALID_REQUEST_BODY")]
    InvalidRequestBody,
    #[schema(rename = "DATA_NOT_FOUND")]
    DataNotFound,
    #[schema(rename = "USER_SYNC_FAILED")]
    UserSyncFailed,
    #[schema(rename = "USER_ASSIGN_FAILED")]
    UserAssignFailed,
    #[schema(rename = "INTERNAL_SERVER_ERROR")]
    InternalServerError,
}

/// OpenAPI schema for [`crate::inbound::http::envelope::Envelope`].
#[derive(ToSchema)]
#[schema(as = crate::inbound::http::envelope::Envelope)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct EnvelopeSchema {
    /// Gateway code, or the LMS error code for rejected calls.
    #[schema(value_type = String, example = "OK")]
    code: String,
    /// Human-readable outcome.
    #[schema(example = "OK")]
    message: String,
    /// Operation payload, or diagnostic detail for some failures.
    data: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::PartialSchema;

    fn schema_to_json<T: PartialSchema>() -> String {
        serde_json::to_string(&T::schema()).expect("schema serialises to JSON")
    }

    #[test]
    fn envelope_schema_has_expected_name() {
        assert_eq!(EnvelopeSchema::name(), "crate.inbound.http.envelope.Envelope");
        let json = schema_to_json::<EnvelopeSchema>();
        assert!(json.contains("message"));
        assert!(json.contains("data"));
    }

    #[test]
    fn response_code_schema_lists_fixed_codes() {
        let json = schema_to_json::<ResponseCodeSchema>();
        for code in [
            "OK",
            "INVALID_PARAMS",
            "INVALID_REQUEST",
            "INVALID_REQUEST_BODY",
            "DATA_NOT_FOUND",
            "USER_SYNC_FAILED",
            "USER_ASSIGN_FAILED",
            "INTERNAL_SERVER_ERROR",
        ] {
            assert!(json.contains(code), "missing {code}");
        }
    }
}
