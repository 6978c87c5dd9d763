use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use onboard_core::Registration;

use crate::app::{dto, errors};

/// `POST /register`: validate and acknowledge a user registration.
///
/// The body is taken as a `Result` so a payload that fails to
/// deserialize (malformed JSON, missing key, wrong type) maps to the
/// same 400 as a presence failure instead of axum's default rejection.
pub async fn register_user(
    payload: Result<Json<dto::RegisterUserRequest>, JsonRejection>,
) -> axum::response::Response {
    let Ok(Json(body)) = payload else {
        return errors::json_error(StatusCode::BAD_REQUEST, "Invalid request");
    };

    let dto::RegisterUserRequest {
        name,
        email,
        password,
    } = body;

    let registration = match Registration::new(name, &email, password) {
        Ok(r) => r,
        Err(e) => return errors::domain_error_to_response(e),
    };

    (
        StatusCode::OK,
        Json(dto::registration_to_json(&registration)),
    )
        .into_response()
}
