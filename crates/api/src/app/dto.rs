use serde::Deserialize;

use onboard_core::Registration;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct RegisterUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

// -------------------------
// Response mapping
// -------------------------

/// Success body for `POST /register`.
///
/// Echoes `name` and `email` verbatim; the password is deliberately
/// excluded (never reflect credentials).
pub fn registration_to_json(reg: &Registration) -> serde_json::Value {
    serde_json::json!({
        "message": "User registered successfully",
        "user": {
            "name": reg.name(),
            "email": reg.email().as_str(),
        },
    })
}
