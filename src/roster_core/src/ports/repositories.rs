use async_trait::async_trait;
use thiserror::Error;

use crate::domain::user::{User, UserId};

// Store port traits and errors

/// Faults raised by the persistence layer itself.
///
/// These are infrastructure errors, not domain failures: the core never
/// recovers from them, and the HTTP boundary translates them into a generic
/// server-error response.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("unique constraint `{constraint}` violated")]
    UniqueViolation { constraint: String },
    #[error("unexpected store error: {0}")]
    Unexpected(String),
}

/// Persistence port for [`User`] entities.
///
/// Mutations (`add`, `update`, `remove`) only stage a change; nothing reaches
/// the backing store until [`UnitOfWork::save_changes`] commits the batch.
/// Reads always observe committed state.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn get_by_id(&self, id: UserId) -> Result<Option<User>, StoreError>;
    async fn get_all(&self) -> Result<Vec<User>, StoreError>;
    async fn get_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;
    async fn is_email_unique(&self, email: &str) -> Result<bool, StoreError>;
    async fn add(&self, user: User);
    async fn update(&self, user: User);
    async fn remove(&self, user: &User);
}

/// Commits the staged changes of one request as an atomic batch.
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    /// Apply every staged change, returning the number of affected rows.
    async fn save_changes(&self) -> Result<u64, StoreError>;
}
