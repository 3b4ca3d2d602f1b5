// Models module - user resource and its request shapes

pub mod user;

pub use user::{CreateUserRequest, UpdateUserRequest, User};
