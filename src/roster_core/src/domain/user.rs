//! The user entity and its staged builder.

use thiserror::Error;

use crate::domain::email::{Email, EmailError};
use crate::domain::entity::Entity;
use crate::{define_id, impl_identity_eq};

define_id! {
    /// Identifier for [`User`] entities.
    pub struct UserId;
}

/// A registered user.
///
/// Constructed through [`UserBuilder`], which guarantees a non-blank name and
/// a well-formed email before the entity exists.
#[derive(Debug, Clone)]
pub struct User {
    id: UserId,
    name: String,
    email: Email,
}

impl User {
    /// Reassemble a user from persisted fields, bypassing the builder.
    ///
    /// For persistence adapters only: the stored row already satisfied the
    /// construction invariants when it was written.
    pub fn hydrate(id: UserId, name: String, email: Email) -> Self {
        Self { id, name, email }
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    /// Replace the email address.
    ///
    /// The replacement is a pre-validated [`Email`], so this cannot fail;
    /// callers validate raw input with [`Email::parse`] first.
    pub fn change_email(&mut self, new_email: Email) {
        self.email = new_email;
    }
}

impl Entity for User {
    type Id = UserId;

    fn id(&self) -> &UserId {
        &self.id
    }
}

impl_identity_eq!(User);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BuildUserError {
    #[error("Name cannot be null or empty.")]
    NameEmpty,
    #[error(transparent)]
    InvalidEmail(#[from] EmailError),
}

impl BuildUserError {
    /// Machine-readable code, surfaced next to the display message at the API
    /// boundary.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NameEmpty => "UserBuilder.NameEmpty",
            Self::InvalidEmail(_) => "UserBuilder.InvalidEmail",
        }
    }
}

/// Staged construction of a [`User`].
///
/// Setters defer all validation to [`UserBuilder::build`]; an omitted id is
/// generated there.
#[derive(Debug, Default)]
pub struct UserBuilder {
    id: Option<UserId>,
    name: Option<String>,
    email: Option<String>,
}

impl UserBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: UserId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Validate and construct.
    ///
    /// The name check runs strictly before the email check: a request with
    /// both problems reports the name error.
    pub fn build(self) -> Result<User, BuildUserError> {
        let id = self.id.unwrap_or_else(UserId::new);

        let name = match self.name {
            Some(name) if !name.trim().is_empty() => name,
            _ => return Err(BuildUserError::NameEmpty),
        };

        let email = match self.email.as_deref() {
            Some(raw) => Email::parse(raw)?,
            None => return Err(EmailError::Empty.into()),
        };

        Ok(User { id, name, email })
    }
}
