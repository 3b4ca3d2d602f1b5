//! Centralized error-to-response mapping for the API.
//!
//! Every route handler returns `Result<_, RequestError>`. The `IntoResponse`
//! impl below is the single terminal handler: it classifies the failure,
//! writes exactly one log record, and builds the HTTP response. 400-class
//! responses carry the real message plus a root-cause string; every other
//! class gets a fixed placeholder body so internal state never leaks to
//! clients.

use axum::extract::FromRequest;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use thiserror::Error;
use tracing::{error, info};
use utoipa::ToSchema;

use crate::storage::StorageError;

/// Body returned for failure classes that must not expose error detail.
///
/// Deployments are expected to replace this with domain-appropriate text.
pub const GENERIC_BODY: &str = "This should be application specific";

/// The HTTP class a request failure resolves to.
///
/// The mapping to status codes is fixed at compile time; classification is a
/// pure function of the error kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    BadRequest,
    Forbidden,
    NotFound,
    Conflict,
    PreconditionFailed,
    Internal,
}

impl Classification {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Classification::BadRequest => StatusCode::BAD_REQUEST,
            Classification::Forbidden => StatusCode::FORBIDDEN,
            Classification::NotFound => StatusCode::NOT_FOUND,
            Classification::Conflict => StatusCode::CONFLICT,
            Classification::PreconditionFailed => StatusCode::PRECONDITION_FAILED,
            Classification::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error body returned for 400-class failures.
///
/// `message` is safe for client display; `developer_message` carries the
/// root-cause chain for debugging.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiError {
    pub status: u16,
    pub message: String,
    pub developer_message: String,
}

/// Any failure raised during request handling.
///
/// Storage failures keep their own taxonomy and are sub-classified in
/// [`RequestError::classify`]; anything the API does not recognize is wrapped
/// in `Internal` via `anyhow` so classification stays total.
#[derive(Debug, Error)]
pub enum RequestError {
    /// Request body could not be read as the expected JSON shape
    #[error("{0}")]
    UnreadablePayload(#[from] JsonRejection),
    /// Field-level validation failure
    #[error("{0}")]
    Validation(String),
    /// Application-declared bad request
    #[error("{0}")]
    BadRequest(String),
    /// Application-declared forbidden signal
    #[error("forbidden: {0}")]
    Forbidden(String),
    /// Application-declared not-found signal
    #[error("{entity_type} with id {entity_id} not found")]
    NotFound {
        entity_type: &'static str,
        entity_id: String,
    },
    /// Application-declared conflict signal
    #[error("{0}")]
    Conflict(String),
    /// Precondition (e.g. If-Match version) not satisfied
    #[error("{0}")]
    PreconditionFailed(String),
    /// Failure surfaced by the storage layer
    #[error(transparent)]
    Storage(#[from] StorageError),
    /// Unclassified runtime fault
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl RequestError {
    /// Classify the failure. Total: every variant maps to exactly one class,
    /// with `Internal` as the exhaustive default.
    ///
    /// Rules are ordered; the first match wins:
    /// 1. unreadable payload -> 400
    /// 2. validation failure -> 400
    /// 3. integrity violation or declared bad request -> 400
    /// 4. forbidden -> 403
    /// 5. not found (including storage lookup misses) -> 404
    /// 6. storage misuse, generic storage failure, or conflict -> 409
    /// 7. precondition failed -> 412
    /// 8. everything else -> 500
    pub fn classify(&self) -> Classification {
        match self {
            RequestError::UnreadablePayload(_)
            | RequestError::Validation(_)
            | RequestError::BadRequest(_)
            | RequestError::Storage(StorageError::IntegrityViolation(_)) => {
                Classification::BadRequest
            }
            RequestError::Forbidden(_) => Classification::Forbidden,
            RequestError::NotFound { .. } | RequestError::Storage(StorageError::NotFound { .. }) => {
                Classification::NotFound
            }
            RequestError::Conflict(_) | RequestError::Storage(_) => Classification::Conflict,
            RequestError::PreconditionFailed(_) => Classification::PreconditionFailed,
            RequestError::Internal(_) => Classification::Internal,
        }
    }

    /// Short name of the error kind, used when the message itself is empty.
    pub fn kind_name(&self) -> &'static str {
        match self {
            RequestError::UnreadablePayload(_) => "UnreadablePayload",
            RequestError::Validation(_) => "Validation",
            RequestError::BadRequest(_) => "BadRequest",
            RequestError::Forbidden(_) => "Forbidden",
            RequestError::NotFound { .. } => "NotFound",
            RequestError::Conflict(_) => "Conflict",
            RequestError::PreconditionFailed(_) => "PreconditionFailed",
            RequestError::Storage(_) => "Storage",
            RequestError::Internal(_) => "Internal",
        }
    }

    /// Client-safe message: the error's display text, or the kind name when
    /// the message is absent.
    fn user_message(&self) -> String {
        let message = self.to_string();
        if message.is_empty() {
            self.kind_name().to_string()
        } else {
            message
        }
    }

    /// Best-effort root cause: walk the source chain to its end.
    fn root_cause(&self) -> String {
        let mut cause: &dyn StdError = self;
        while let Some(source) = cause.source() {
            cause = source;
        }
        cause.to_string()
    }
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        let classification = self.classify();
        let status = classification.status_code();

        match classification {
            Classification::BadRequest => {
                info!("Bad Request: {}", self);
                let body = ApiError {
                    status: status.as_u16(),
                    message: self.user_message(),
                    developer_message: self.root_cause(),
                };
                (status, Json(body)).into_response()
            }
            Classification::Internal => {
                error!("500 Status Code: {:?}", self);
                (status, GENERIC_BODY).into_response()
            }
            _ => {
                info!("{}: {}", status.as_u16(), self);
                (status, GENERIC_BODY).into_response()
            }
        }
    }
}

/// JSON extractor whose rejection is routed through the error responder
/// instead of axum's default plain-text reply, so malformed payloads come
/// back as a 400 with an [`ApiError`] body.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(RequestError))]
pub struct ApiJson<T>(pub T);
