use crate::core::errors::AppError;
use crate::core::models::user::{User, UserId};
use async_trait::async_trait;

/// Generic CRUD over [`User`], keyed by its surrogate id.
///
/// Implementations must run [`User::validate`] before every write and reject
/// the write with [`AppError::ValidationFailed`] when it reports violations.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert when `user.id` is absent (assigning a fresh id), replace when it
    /// names a stored user. Returns the stored entity.
    async fn save(&self, user: User) -> Result<User, AppError>;
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, AppError>;
    /// All users, ordered by id.
    async fn find_all(&self) -> Result<Vec<User>, AppError>;
    /// Returns true if a user was removed.
    async fn delete_by_id(&self, id: UserId) -> Result<bool, AppError>;
    async fn exists_by_id(&self, id: UserId) -> Result<bool, AppError>;
    async fn count(&self) -> Result<usize, AppError>;
}

pub mod in_memory;
