//! Error types for the kennel API.
//!
//! ## Status Mapping
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Source                                   Status   message             │
//! │  ──────                                   ──────   ───────             │
//! │  UserNotFound / PetNotFound / OwnerNotFound  404   Entity is not found │
//! │  DuplicateUser / DuplicatePet                400   Wrong request ...   │
//! │  ForeignPet / ValidationError                400   Wrong request ...   │
//! │  Malformed JSON body / path id               400   Wrong request ...   │
//! │  StoreError::Invariant                       500   Server error        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every error is rendered as `{"message", "detail", "timestamp"}`.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{DateTime, Utc};
use kennel_core::{ErrorKind, ValidationError};
use kennel_store::StoreError;
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

/// Result type for handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// API errors.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The request could not be decoded (body or path).
    #[error("{0}")]
    BadRequest(String),
}

/// Uniform error body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
    pub detail: String,
    pub timestamp: DateTime<Utc>,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Store(err) => match err.kind() {
                Some(ErrorKind::NotFound) => StatusCode::NOT_FOUND,
                Some(ErrorKind::Conflict) | Some(ErrorKind::InvalidArgument) => {
                    StatusCode::BAD_REQUEST
                }
                None => StatusCode::INTERNAL_SERVER_ERROR,
            },
            ApiError::Validation(_) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn summary(status: StatusCode) -> &'static str {
        match status {
            StatusCode::NOT_FOUND => "Entity is not found",
            StatusCode::BAD_REQUEST => "Wrong request parameters",
            _ => "Server error",
        }
    }

    /// Builds the body a client sees for this error.
    pub fn body(&self) -> ErrorBody {
        ErrorBody {
            message: Self::summary(self.status()).to_string(),
            detail: self.to_string(),
            timestamp: Utc::now(),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(status = status.as_u16(), error = %self, "Request failed");
        } else {
            warn!(status = status.as_u16(), error = %self, "Request rejected");
        }

        (status, Json(self.body())).into_response()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
