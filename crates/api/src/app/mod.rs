//! HTTP API application wiring (Axum router construction).
//!
//! This folder is structured like:
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request/response DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use axum::Router;
use tower::ServiceBuilder;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
///
/// The router is an explicit value constructed once at process start and
/// handed to the listener; nothing here relies on ambient globals.
pub fn build_app() -> Router {
    routes::router().layer(ServiceBuilder::new().layer(axum::middleware::from_fn(middleware::log_requests)))
}
