pub mod api;
pub mod auth;
pub mod config;
pub mod constants;
pub mod core;
pub mod infrastructure;

pub use api::{AppState, app};
pub use auth::{AuthGate, CredentialStore, SecurityRules};
pub use crate::core::errors::AppError;
pub use crate::core::models::user::User;
pub use crate::core::services::HelloWorldService;
pub use infrastructure::storage::{UserRepository, in_memory::InMemoryUserRepository};

#[cfg(test)]
mod tests; // Include integration tests
