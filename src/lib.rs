//! # Roster - user registration service library
//!
//! This is a facade crate that re-exports the public APIs of the roster
//! service components.
//!
//! ## Structure
//!
//! - **Core domain types**: `Email`, `User`, `UserBuilder`, `UserId`
//! - **Persistence ports**: `UserRepository`, `UnitOfWork`
//! - **Use cases**: `CreateUserUseCase`
//! - **Adapters**: `InMemoryUserStore`, `PostgresUserStore`, `Settings`
//! - **Service**: `UserService` - the router assembly and entry point

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and persistence ports
pub mod core {
    pub use roster_core::*;
}

// Re-export most commonly used core types at the root level
pub use roster_core::{
    BuildUserError, Email, EmailError, Entity, StoreError, UnitOfWork, User, UserBuilder, UserId,
    UserRepository,
};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use roster_application::*;
}

pub use roster_application::{CreateUserCommand, CreateUserError, CreateUserUseCase, UserResponse};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// HTTP route handlers
    pub mod http {
        pub use roster_adapters::http::*;
    }

    /// Persistence implementations
    pub mod persistence {
        pub use roster_adapters::persistence::*;
    }

    /// Configuration
    pub mod config {
        pub use roster_adapters::config::*;
    }
}

pub use roster_adapters::{InMemoryUserStore, PostgresUserStore, Settings};

// ============================================================================
// Service (Main Entry Point)
// ============================================================================

pub use roster_service::UserService;

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing the persistence ports
pub use async_trait::async_trait;

pub use axum;
pub use tokio;
pub use uuid;
