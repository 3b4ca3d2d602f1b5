//! Authentication routes issuing JWT token pairs.
//!
//! Credentials are checked against env-configured admin settings; a
//! successful login registers a server-side session so tokens can be
//! revoked before expiry via logout.

use axum::{Router, extract::State, response::Json, routing::post};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;
use utoipa::ToSchema;
use uuid::Uuid;

use super::app_state::AppState;
use super::auth_context::AuthContext;
use super::error::{ApiJson, RequestError};
use crate::services::jwt_service::{JwtService, TokenPair};

/// Session storage - keeps track of active sessions for revocation.
/// Key: session_id (from JWT), Value: session metadata
pub type SessionStore = Arc<Mutex<HashMap<String, SessionMetadata>>>;

/// Session metadata stored server-side (for revocation and tracking)
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionMetadata {
    pub username: String,
    pub created_at: DateTime<Utc>,
    pub last_activity: DateTime<Utc>,
}

pub fn new_session_store() -> SessionStore {
    Arc::new(Mutex::new(HashMap::new()))
}

#[derive(Deserialize, ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Deserialize, ToSchema)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

#[derive(Serialize, ToSchema)]
pub struct LogoutResponse {
    pub message: String,
}

/// Create the auth router
pub fn auth_router() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/refresh", post(refresh_token))
        .route("/logout", post(logout))
}

fn admin_credentials() -> (String, String) {
    let username = std::env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".to_string());
    let password = std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "adminPass".to_string());
    (username, password)
}

/// POST /auth/login - Exchange admin credentials for a JWT token pair
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Token pair issued", body = TokenPair),
        (status = 403, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<LoginRequest>,
) -> Result<Json<TokenPair>, RequestError> {
    let (admin_username, admin_password) = admin_credentials();
    if payload.username != admin_username || payload.password != admin_password {
        return Err(RequestError::Forbidden("invalid credentials".to_string()));
    }

    let session_id = Uuid::new_v4().to_string();
    let jwt_service = JwtService::from_env();
    let tokens = jwt_service
        .generate_token_pair(&payload.username, &session_id)
        .map_err(anyhow::Error::from)?;

    let now = Utc::now();
    let mut sessions = state.session_store.lock().await;
    sessions.insert(
        session_id.clone(),
        SessionMetadata {
            username: payload.username.clone(),
            created_at: now,
            last_activity: now,
        },
    );
    drop(sessions);

    info!("Session {} created for {}", session_id, payload.username);
    Ok(Json(tokens))
}

/// POST /auth/refresh - Exchange a refresh token for a new token pair
#[utoipa::path(
    post,
    path = "/auth/refresh",
    tag = "Authentication",
    request_body = RefreshRequest,
    responses(
        (status = 200, description = "New token pair issued", body = TokenPair),
        (status = 403, description = "Refresh token invalid or session revoked")
    )
)]
pub async fn refresh_token(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<RefreshRequest>,
) -> Result<Json<TokenPair>, RequestError> {
    let jwt_service = JwtService::from_env();
    let claims = jwt_service
        .validate_refresh_token(&payload.refresh_token)
        .map_err(RequestError::Forbidden)?;

    let mut sessions = state.session_store.lock().await;
    let session = sessions
        .get_mut(&claims.session_id)
        .ok_or_else(|| RequestError::Forbidden("session revoked".to_string()))?;
    session.last_activity = Utc::now();
    drop(sessions);

    let tokens = jwt_service
        .generate_token_pair(&claims.sub, &claims.session_id)
        .map_err(anyhow::Error::from)?;
    Ok(Json(tokens))
}

/// POST /auth/logout - Revoke the caller's session
#[utoipa::path(
    post,
    path = "/auth/logout",
    tag = "Authentication",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Session revoked", body = LogoutResponse),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn logout(
    auth: AuthContext,
    State(state): State<AppState>,
) -> Result<Json<LogoutResponse>, RequestError> {
    let mut sessions = state.session_store.lock().await;
    sessions.remove(&auth.session_id);
    drop(sessions);

    info!("Session {} revoked for {}", auth.session_id, auth.username);
    Ok(Json(LogoutResponse {
        message: "logged out".to_string(),
    }))
}
