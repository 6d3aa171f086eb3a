pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    email::{Email, EmailError},
    entity::Entity,
    user::{BuildUserError, User, UserBuilder, UserId},
};

pub use ports::repositories::{StoreError, UnitOfWork, UserRepository};
