//! In-memory user store for development and tests.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use roster_core::{StoreError, UnitOfWork, User, UserId, UserRepository};

/// A staged mutation, applied on commit.
#[derive(Debug, Clone)]
enum PendingChange {
    Insert(User),
    Update(User),
    Delete(UserId),
}

/// Shared-state store implementing both persistence ports.
///
/// Mutations are staged until [`UnitOfWork::save_changes`] applies the whole
/// batch; reads observe committed state only. Commit enforces the primary-key
/// and unique-email constraints the way the relational schema would, so the
/// store remains the safety net behind the use case's uniqueness pre-check.
#[derive(Default, Clone)]
pub struct InMemoryUserStore {
    committed: Arc<RwLock<HashMap<UserId, User>>>,
    pending: Arc<RwLock<Vec<PendingChange>>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

/// True when another user already holds this user's email, case-insensitively.
fn email_taken(users: &HashMap<UserId, User>, candidate: &User) -> bool {
    users.values().any(|existing| {
        existing.id() != candidate.id()
            && existing
                .email()
                .as_str()
                .eq_ignore_ascii_case(candidate.email().as_str())
    })
}

#[async_trait]
impl UserRepository for InMemoryUserStore {
    async fn get_by_id(&self, id: UserId) -> Result<Option<User>, StoreError> {
        Ok(self.committed.read().await.get(&id).cloned())
    }

    async fn get_all(&self) -> Result<Vec<User>, StoreError> {
        Ok(self.committed.read().await.values().cloned().collect())
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let users = self.committed.read().await;
        Ok(users
            .values()
            .find(|user| user.email().as_str().eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn is_email_unique(&self, email: &str) -> Result<bool, StoreError> {
        Ok(self.get_by_email(email).await?.is_none())
    }

    async fn add(&self, user: User) {
        self.pending.write().await.push(PendingChange::Insert(user));
    }

    async fn update(&self, user: User) {
        self.pending.write().await.push(PendingChange::Update(user));
    }

    async fn remove(&self, user: &User) {
        self.pending
            .write()
            .await
            .push(PendingChange::Delete(user.id()));
    }
}

#[async_trait]
impl UnitOfWork for InMemoryUserStore {
    async fn save_changes(&self) -> Result<u64, StoreError> {
        let changes: Vec<PendingChange> = self.pending.write().await.drain(..).collect();
        let mut users = self.committed.write().await;

        // Apply against a copy so a failed batch leaves committed state intact.
        let mut next = users.clone();
        let mut affected = 0u64;

        for change in changes {
            match change {
                PendingChange::Insert(user) => {
                    if next.contains_key(&user.id()) {
                        return Err(StoreError::UniqueViolation {
                            constraint: "users_pkey".to_owned(),
                        });
                    }
                    if email_taken(&next, &user) {
                        return Err(StoreError::UniqueViolation {
                            constraint: "users_email_key".to_owned(),
                        });
                    }
                    next.insert(user.id(), user);
                    affected += 1;
                }
                PendingChange::Update(user) => {
                    if next.contains_key(&user.id()) {
                        if email_taken(&next, &user) {
                            return Err(StoreError::UniqueViolation {
                                constraint: "users_email_key".to_owned(),
                            });
                        }
                        next.insert(user.id(), user);
                        affected += 1;
                    }
                }
                PendingChange::Delete(id) => {
                    if next.remove(&id).is_some() {
                        affected += 1;
                    }
                }
            }
        }

        *users = next;
        tracing::info!(affected, "committed staged changes");
        Ok(affected)
    }
}
