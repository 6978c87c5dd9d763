use axum::{
    routing::{get, post},
    Router,
};

pub mod register;
pub mod system;

/// Router for all endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/", get(system::hello))
        .route("/hello/:name", get(system::greet))
        .route("/register", post(register::register_user))
}
