//! Services module - authentication support consumed by the routes.

pub mod jwt_service;

pub use jwt_service::{Claims, JwtService, SharedJwtService, TokenPair, TokenType};
