//! Authentication context extractor.
//!
//! Guards mutating routes: a handler taking `AuthContext` only runs when a
//! valid bearer token backed by a live session is presented. The rejection
//! is a bare 401 - authentication failures never reach the error responder.

use axum::extract::FromRequestParts;
use axum::http::{StatusCode, request::Parts};

use super::app_state::AppState;
use crate::services::jwt_service::JwtService;

/// Authentication context extracted from the request
#[derive(Clone, Debug)]
pub struct AuthContext {
    pub username: String,
    pub session_id: String,
}

impl FromRequestParts<AppState> for AuthContext {
    type Rejection = StatusCode;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jwt_service = JwtService::from_env();

        let token = parts
            .headers
            .get("authorization")
            .and_then(|h| h.to_str().ok())
            .and_then(JwtService::extract_bearer_token)
            .ok_or_else(|| {
                tracing::warn!("No authorization token provided");
                StatusCode::UNAUTHORIZED
            })?;

        let claims = jwt_service.validate_access_token(token).map_err(|e| {
            tracing::warn!("JWT validation failed: {}", e);
            StatusCode::UNAUTHORIZED
        })?;

        let sessions = state.session_store.lock().await;
        if !sessions.contains_key(&claims.session_id) {
            tracing::warn!("Session {} not found in store", claims.session_id);
            return Err(StatusCode::UNAUTHORIZED);
        }
        drop(sessions);

        Ok(AuthContext {
            username: claims.sub,
            session_id: claims.session_id,
        })
    }
}
