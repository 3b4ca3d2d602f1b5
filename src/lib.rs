// API module for the Rust backend
pub mod api;

// Re-export api modules at crate root so the binary and library tests can use
// crate::routes, crate::models, crate::services directly.
pub use api::middleware;
pub use api::models;
pub use api::routes;
pub use api::services;
pub use api::storage;
