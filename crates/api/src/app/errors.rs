use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use onboard_core::DomainError;

/// Map a domain validation failure onto its HTTP response.
///
/// The error bodies form a fixed set: presence failures read the same as
/// an undeserializable payload (the client gets no field-level detail),
/// while a bad email gets its own status and message.
pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::MissingField(_) => json_error(StatusCode::BAD_REQUEST, "Invalid request"),
        DomainError::InvalidEmail => {
            json_error(StatusCode::UNPROCESSABLE_ENTITY, "Invalid email format")
        }
    }
}

pub fn json_error(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": message.into(),
        })),
    )
        .into_response()
}
