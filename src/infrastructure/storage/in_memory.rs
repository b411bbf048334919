use crate::core::errors::AppError;
use crate::core::models::user::{User, UserId};
use crate::infrastructure::storage::UserRepository;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;
use tracing::{debug, info};

#[derive(Clone)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<BTreeMap<UserId, User>>>,
    next_id: Arc<AtomicI64>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        InMemoryUserRepository {
            users: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn save(&self, user: User) -> Result<User, AppError> {
        let violations = user.validate();
        if !violations.is_empty() {
            debug!(?violations, "Rejecting invalid user");
            return Err(AppError::ValidationFailed(violations));
        }

        let mut users = self.users.write().await;
        match user.id {
            Some(id) => {
                let stored = users.get_mut(&id).ok_or(AppError::UserNotFound(id))?;
                *stored = user.clone();
                debug!(user_id = id, "User updated");
                Ok(user)
            }
            None => {
                let id = self.next_id.fetch_add(1, Ordering::SeqCst);
                let created = User { id: Some(id), ..user };
                users.insert(id, created.clone());
                info!(user_id = id, "User created");
                Ok(created)
            }
        }
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, AppError> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<User>, AppError> {
        let users = self.users.read().await;
        Ok(users.values().cloned().collect())
    }

    async fn delete_by_id(&self, id: UserId) -> Result<bool, AppError> {
        let removed = self.users.write().await.remove(&id).is_some();
        if removed {
            info!(user_id = id, "User deleted");
        }
        Ok(removed)
    }

    async fn exists_by_id(&self, id: UserId) -> Result<bool, AppError> {
        Ok(self.users.read().await.contains_key(&id))
    }

    async fn count(&self) -> Result<usize, AppError> {
        Ok(self.users.read().await.len())
    }
}
