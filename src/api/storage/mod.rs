//! Storage module for the API.
//!
//! Persistence proper is out of scope for this service; the `UserStore`
//! trait stands in for it, with an in-memory backend as the only
//! implementation.

pub mod error;
pub mod memory;
pub mod traits;

pub use error::StorageError;
pub use memory::MemoryUserStore;
pub use traits::UserStore;
