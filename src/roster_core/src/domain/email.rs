//! Validated email address value object.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// Local part, an `@`, and a domain containing at least one dot.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern must compile")
});

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EmailError {
    #[error("Email cannot be empty.")]
    Empty,
    #[error("Invalid email format.")]
    InvalidFormat,
}

/// An email address that is known to be well-formed.
///
/// Equality and hashing are structural over the wrapped string. Deserialization
/// goes through [`Email::parse`], so a persisted or inbound value cannot bypass
/// validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    pub fn parse(raw: &str) -> Result<Self, EmailError> {
        if raw.trim().is_empty() {
            return Err(EmailError::Empty);
        }

        if !EMAIL_PATTERN.is_match(raw) {
            return Err(EmailError::InvalidFormat);
        }

        Ok(Self(raw.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Email {
    type Error = EmailError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Email::parse(&value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}
