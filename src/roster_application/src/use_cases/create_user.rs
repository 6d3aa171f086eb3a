use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use roster_core::{BuildUserError, StoreError, UnitOfWork, User, UserBuilder, UserRepository};

/// Inbound command carrying the raw request fields.
#[derive(Debug, Clone)]
pub struct CreateUserCommand {
    pub name: String,
    pub email: String,
}

/// Response DTO returned once the user is committed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().as_uuid(),
            name: user.name().to_owned(),
            email: user.email().as_str().to_owned(),
        }
    }
}

#[derive(Debug, Error)]
pub enum CreateUserError {
    #[error("The email is already in use.")]
    EmailNotUnique,
    #[error(transparent)]
    InvalidUser(#[from] BuildUserError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl CreateUserError {
    /// Machine-readable code paired with the display message at the boundary.
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmailNotUnique => "User.EmailNotUnique",
            Self::InvalidUser(inner) => inner.code(),
            Self::Store(_) => "Server.Unexpected",
        }
    }
}

/// Create-user use case - uniqueness check, build, persist, respond.
pub struct CreateUserUseCase<'a, R, U>
where
    R: UserRepository,
    U: UnitOfWork,
{
    repository: &'a R,
    unit_of_work: &'a U,
}

impl<'a, R, U> CreateUserUseCase<'a, R, U>
where
    R: UserRepository,
    U: UnitOfWork,
{
    pub fn new(repository: &'a R, unit_of_work: &'a U) -> Self {
        Self {
            repository,
            unit_of_work,
        }
    }

    /// Execute the create-user use case.
    ///
    /// The uniqueness pre-check completes before anything is staged, so a
    /// taken email leaves the store untouched. Builder failures propagate
    /// unchanged. The staged insert becomes visible only once the unit of
    /// work commits; store faults surface as [`CreateUserError::Store`].
    #[tracing::instrument(name = "CreateUserUseCase::execute", skip(self))]
    pub async fn execute(
        &self,
        command: CreateUserCommand,
    ) -> Result<UserResponse, CreateUserError> {
        if !self.repository.is_email_unique(&command.email).await? {
            return Err(CreateUserError::EmailNotUnique);
        }

        let user = UserBuilder::new()
            .name(command.name)
            .email(command.email)
            .build()?;

        let response = UserResponse::from(&user);

        self.repository.add(user).await;
        self.unit_of_work.save_changes().await?;

        Ok(response)
    }
}
