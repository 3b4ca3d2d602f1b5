//! API routes module - organizes all route handlers.

pub mod app_state;
pub mod auth;
pub mod auth_context;
pub mod error;
pub mod openapi;
pub mod users;

use axum::Router;
pub use app_state::AppState;

/// Create the main API router combining all route modules.
///
/// Note: State is applied by callers (e.g. `TestServer` setups call
/// `.with_state(app_state)` after creating the router).
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/users", users::users_router())
        .nest("/auth", auth::auth_router())
        // OpenAPI documentation endpoints
        .merge(openapi::openapi_router())
}

/// Create the application state.
pub fn create_app_state() -> AppState {
    AppState::new()
}
