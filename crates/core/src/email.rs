//! Email address value object.
//!
//! Syntactic validation only: a whole-string pattern match, no DNS or
//! mailbox verification, no internationalized-domain support.

use core::fmt;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{DomainError, DomainResult};

static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_REGEX.get_or_init(|| {
        // local-part @ domain . tld (tld: two or more letters).
        Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
            .expect("email pattern must compile")
    })
}

/// A syntactically valid email address.
///
/// Can only be constructed via [`EmailAddress::parse`], so holding one is
/// proof the format check passed. Compared by value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate `raw` against the email pattern.
    ///
    /// The match is anchored on both ends: a valid address embedded in a
    /// longer string does not pass.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        if email_regex().is_match(raw) {
            Ok(Self(raw.to_string()))
        } else {
            Err(DomainError::InvalidEmail)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
