//! Application state management.
//!
//! Defines the AppState struct that holds all shared application state:
//! the user store and the authentication session store.

use std::sync::Arc;

use super::auth::{SessionStore, new_session_store};
use crate::storage::{MemoryUserStore, UserStore};

/// Application state shared across all route handlers.
#[derive(Clone)]
pub struct AppState {
    /// User storage backend
    pub store: Arc<dyn UserStore>,
    /// Session store for authentication
    pub session_store: SessionStore,
}

impl AppState {
    /// Create a new application state with the in-memory backend.
    pub fn new() -> Self {
        Self {
            store: Arc::new(MemoryUserStore::new()),
            session_store: new_session_store(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
