//! User CRUD routes.
//!
//! Reads are open; mutations require a valid bearer token. Failures are
//! raised as `RequestError` signals and turned into responses by the
//! error responder.

use axum::{
    Router,
    extract::{Path, State},
    http::{HeaderMap, StatusCode, header},
    response::Json,
    routing::get,
};
use tracing::info;
use uuid::Uuid;

use super::app_state::AppState;
use super::auth_context::AuthContext;
use super::error::{ApiError, ApiJson, RequestError};
use crate::models::{CreateUserRequest, UpdateUserRequest, User};

/// Create the users router
pub fn users_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route(
            "/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
}

/// GET /users - List all users
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "All users", body = Vec<User>)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, RequestError> {
    let users = state.store.list().await?;
    Ok(Json(users))
}

/// GET /users/{id} - Get a user by id
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = Uuid, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "The user", body = User),
        (status = 404, description = "No user with that id")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<User>, RequestError> {
    let user = state.store.get(id).await?;
    Ok(Json(user))
}

/// POST /users - Create a user
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    security(("bearer_auth" = [])),
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Malformed payload or validation failure", body = ApiError),
        (status = 401, description = "Not authenticated"),
        (status = 409, description = "Email already in use")
    )
)]
pub async fn create_user(
    auth: AuthContext,
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateUserRequest>,
) -> Result<(StatusCode, Json<User>), RequestError> {
    payload.validate().map_err(RequestError::Validation)?;

    if state.store.find_by_email(&payload.email).await?.is_some() {
        return Err(RequestError::Conflict(format!(
            "user with email {} already exists",
            payload.email
        )));
    }

    let user = state
        .store
        .insert(User::new(payload.name, payload.email, payload.age))
        .await?;
    info!("User {} created by {}", user.id, auth.username);
    Ok((StatusCode::CREATED, Json(user)))
}

/// PUT /users/{id} - Update a user
///
/// An `If-Match` header carrying the expected version enables optimistic
/// concurrency; a mismatch fails with 412.
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "Users",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "User id"),
        ("If-Match" = Option<String>, Header, description = "Expected resource version")
    ),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = User),
        (status = 400, description = "Malformed payload or validation failure", body = ApiError),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "No user with that id"),
        (status = 412, description = "Version precondition failed")
    )
)]
pub async fn update_user(
    auth: AuthContext,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
    ApiJson(payload): ApiJson<UpdateUserRequest>,
) -> Result<Json<User>, RequestError> {
    payload.validate().map_err(RequestError::Validation)?;

    let mut user = state.store.get(id).await?;

    if let Some(value) = headers.get(header::IF_MATCH) {
        let expected: i32 = value
            .to_str()
            .ok()
            .map(|v| v.trim().trim_matches('"'))
            .and_then(|v| v.parse().ok())
            .ok_or_else(|| RequestError::BadRequest("invalid If-Match header".to_string()))?;
        if expected != user.version {
            return Err(RequestError::PreconditionFailed(format!(
                "version mismatch: expected {expected}, resource is at {}",
                user.version
            )));
        }
    }

    user.apply_update(&payload);
    let user = state.store.update(user).await?;
    info!("User {} updated by {}", user.id, auth.username);
    Ok(Json(user))
}

/// DELETE /users/{id} - Delete a user
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "Users",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "User id")
    ),
    responses(
        (status = 204, description = "User deleted"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "No user with that id")
    )
)]
pub async fn delete_user(
    auth: AuthContext,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, RequestError> {
    state.store.delete(id).await?;
    info!("User {} deleted by {}", id, auth.username);
    Ok(StatusCode::NO_CONTENT)
}
