//! Storage trait definitions for the API storage backends.

use uuid::Uuid;

use super::StorageError;
use crate::models::User;

/// Storage backend trait for user persistence.
///
/// Lookup misses fail with `StorageError::NotFound`; uniqueness breaches
/// fail with `StorageError::IntegrityViolation`.
#[async_trait::async_trait]
pub trait UserStore: Send + Sync {
    /// List all users.
    async fn list(&self) -> Result<Vec<User>, StorageError>;

    /// Get a user by id.
    async fn get(&self, id: Uuid) -> Result<User, StorageError>;

    /// Find a user by email, if one exists.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StorageError>;

    /// Insert a new user.
    async fn insert(&self, user: User) -> Result<User, StorageError>;

    /// Replace an existing user.
    async fn update(&self, user: User) -> Result<User, StorageError>;

    /// Delete a user by id.
    async fn delete(&self, id: Uuid) -> Result<(), StorageError>;
}
