pub mod config;
pub mod http;
pub mod persistence;

// Re-export commonly used adapters for convenience
pub use config::Settings;
pub use persistence::{InMemoryUserStore, PostgresUserStore};
