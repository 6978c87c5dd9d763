//! Registration record: one validated signup request.
//!
//! The record has no identity and is never stored; it exists only for the
//! duration of a single request.

use crate::email::EmailAddress;
use crate::error::{DomainError, DomainResult};

/// A registration that passed all field validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    name: String,
    email: EmailAddress,
    password: String,
}

impl Registration {
    /// Validate the three required fields and build the record.
    ///
    /// Fields are checked in declaration order: `name` presence, `email`
    /// format, `password` presence. Presence means non-empty after
    /// trimming, so whitespace-only values are rejected too.
    pub fn new(name: String, email: &str, password: String) -> DomainResult<Self> {
        if name.trim().is_empty() {
            return Err(DomainError::missing_field("name"));
        }
        let email = EmailAddress::parse(email)?;
        if password.trim().is_empty() {
            return Err(DomainError::missing_field("password"));
        }

        Ok(Self {
            name,
            email,
            password,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// The password is held for the lifetime of the request only and must
    /// never appear in a response body.
    pub fn password(&self) -> &str {
        &self.password
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_registration_echoes_fields_verbatim() {
        let reg = Registration::new(
            "Melisa Acar".to_string(),
            "melisacar@example.com",
            "secret".to_string(),
        )
        .unwrap();

        assert_eq!(reg.name(), "Melisa Acar");
        assert_eq!(reg.email().as_str(), "melisacar@example.com");
        assert_eq!(reg.password(), "secret");
    }

    #[test]
    fn rejects_empty_name() {
        let err = Registration::new(String::new(), "a@example.com", "x".to_string()).unwrap_err();
        assert_eq!(err, DomainError::MissingField("name"));
    }

    #[test]
    fn rejects_whitespace_only_name() {
        let err = Registration::new("   ".to_string(), "a@example.com", "x".to_string())
            .unwrap_err();
        assert_eq!(err, DomainError::MissingField("name"));
    }

    #[test]
    fn rejects_empty_password() {
        let err = Registration::new("A".to_string(), "a@example.com", String::new()).unwrap_err();
        assert_eq!(err, DomainError::MissingField("password"));
    }

    #[test]
    fn rejects_invalid_email() {
        let err = Registration::new("A".to_string(), "not-an-email", "x".to_string()).unwrap_err();
        assert_eq!(err, DomainError::InvalidEmail);
    }

    #[test]
    fn name_presence_is_checked_before_email_format() {
        let err = Registration::new(String::new(), "not-an-email", "x".to_string()).unwrap_err();
        assert_eq!(err, DomainError::MissingField("name"));
    }

    #[test]
    fn same_input_builds_equal_records() {
        let a = Registration::new("A".to_string(), "a@example.com", "x".to_string()).unwrap();
        let b = Registration::new("A".to_string(), "a@example.com", "x".to_string()).unwrap();
        assert_eq!(a, b);
    }
}
