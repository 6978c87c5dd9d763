//! `onboard-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no HTTP/framework concerns).

pub mod email;
pub mod error;
pub mod registration;

pub use email::EmailAddress;
pub use error::{DomainError, DomainResult};
pub use registration::Registration;
