//! In-memory user store.
//!
//! Backs the API in tests and single-node deployments. Uniqueness of email
//! is enforced here the way a database unique index would be.

use std::collections::HashMap;
use tokio::sync::Mutex;
use uuid::Uuid;

use super::error::StorageError;
use super::traits::UserStore;
use crate::models::User;

/// HashMap-backed `UserStore`.
#[derive(Default)]
pub struct MemoryUserStore {
    users: Mutex<HashMap<Uuid, User>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn not_found(id: Uuid) -> StorageError {
        StorageError::NotFound {
            entity_type: "user".to_string(),
            entity_id: id.to_string(),
        }
    }
}

#[async_trait::async_trait]
impl UserStore for MemoryUserStore {
    async fn list(&self) -> Result<Vec<User>, StorageError> {
        let users = self.users.lock().await;
        let mut all: Vec<User> = users.values().cloned().collect();
        all.sort_by_key(|u| u.created_at);
        Ok(all)
    }

    async fn get(&self, id: Uuid) -> Result<User, StorageError> {
        let users = self.users.lock().await;
        users.get(&id).cloned().ok_or_else(|| Self::not_found(id))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StorageError> {
        let users = self.users.lock().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn insert(&self, user: User) -> Result<User, StorageError> {
        let mut users = self.users.lock().await;
        if users.contains_key(&user.id) {
            return Err(StorageError::InvalidUsage(format!(
                "insert called with existing id {}",
                user.id
            )));
        }
        if users.values().any(|u| u.email == user.email) {
            return Err(StorageError::IntegrityViolation(format!(
                "email {} already exists",
                user.email
            )));
        }
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, StorageError> {
        let mut users = self.users.lock().await;
        if users.values().any(|u| u.email == user.email && u.id != user.id) {
            return Err(StorageError::IntegrityViolation(format!(
                "email {} already exists",
                user.email
            )));
        }
        match users.get_mut(&user.id) {
            Some(existing) => {
                *existing = user.clone();
                Ok(user)
            }
            None => Err(Self::not_found(user.id)),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<(), StorageError> {
        let mut users = self.users.lock().await;
        users.remove(&id).map(|_| ()).ok_or_else(|| Self::not_found(id))
    }
}
