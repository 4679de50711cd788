// Error handling types for the API

use axum::{
    extract::{multipart::MultipartRejection, rejection::FormRejection},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use serde::Serialize;
use std::fmt;
use tracing::{error, warn};

use super::validation::ValidationResult;
use crate::services::scoring::ScoringError;
use crate::services::selection::SelectionError;
use crate::storage::StoreError;

/// API error types
#[derive(Debug)]
pub enum ApiError {
    /// Login rejected: unknown account or wrong password
    InvalidCredentials(String),
    /// Guard failure; answered with a redirect to the scope's login page
    NotAuthenticated { login: &'static str },
    UnreadableDocument(String),
    InvalidSkillWeight(String),
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    InternalServer(String),
    DatabaseError(sqlx::Error),
    ValidationError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::InvalidCredentials(msg) => write!(f, "Invalid Credentials: {}", msg),
            ApiError::NotAuthenticated { login } => {
                write!(f, "Not Authenticated: login at {}", login)
            }
            ApiError::UnreadableDocument(msg) => write!(f, "Unreadable Document: {}", msg),
            ApiError::InvalidSkillWeight(msg) => write!(f, "Invalid Skill Weight: {}", msg),
            ApiError::BadRequest(msg) => write!(f, "Bad Request: {}", msg),
            ApiError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            ApiError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            ApiError::InternalServer(msg) => write!(f, "Internal Server Error: {}", msg),
            ApiError::DatabaseError(e) => write!(f, "Database Error: {}", e),
            ApiError::ValidationError(msg) => write!(f, "Validation Error: {}", msg),
        }
    }
}

/// JSON error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_message, code) = match self {
            ApiError::NotAuthenticated { login } => {
                return Redirect::to(login).into_response();
            }
            ApiError::InvalidCredentials(msg) => {
                (StatusCode::UNAUTHORIZED, msg, "INVALID_CREDENTIALS")
            }
            ApiError::UnreadableDocument(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                msg,
                "UNREADABLE_DOCUMENT",
            ),
            ApiError::InvalidSkillWeight(msg) => {
                (StatusCode::BAD_REQUEST, msg, "INVALID_SKILL_WEIGHT")
            }
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, "BAD_REQUEST"),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, "NOT_FOUND"),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg, "CONFLICT"),
            ApiError::InternalServer(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                msg,
                "INTERNAL_SERVER_ERROR",
            ),
            ApiError::DatabaseError(e) => {
                error!(error = %e, "Database error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database operation failed".to_string(),
                    "DATABASE_ERROR",
                )
            }
            ApiError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg, "VALIDATION_ERROR"),
        };

        let error_response = ErrorResponse {
            error: error_message,
            code: code.to_string(),
        };

        (status, Json(error_response)).into_response()
    }
}

/// Helper function to convert ValidationResult to ApiError
impl From<ValidationResult> for ApiError {
    fn from(result: ValidationResult) -> Self {
        if result.is_valid {
            ApiError::InternalServer(
                "Validation result was valid but converted to error".to_string(),
            )
        } else {
            let error_messages: Vec<String> = result
                .errors
                .iter()
                .map(|e| format!("{}: {}", e.field, e.message))
                .collect();
            ApiError::ValidationError(error_messages.join(", "))
        }
    }
}

/// Body rejections are surfaced only after the session guard has passed
impl From<FormRejection> for ApiError {
    fn from(rejection: FormRejection) -> Self {
        warn!(error = %rejection, "Rejected form body");
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<MultipartRejection> for ApiError {
    fn from(rejection: MultipartRejection) -> Self {
        warn!(error = %rejection, "Rejected multipart body");
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Database(e) => ApiError::DatabaseError(e),
            StoreError::DuplicateEmail => {
                ApiError::Conflict("Email is already registered".to_string())
            }
            StoreError::NotFound(what) => ApiError::NotFound(what),
        }
    }
}

impl From<ScoringError> for ApiError {
    fn from(err: ScoringError) -> Self {
        ApiError::InvalidSkillWeight(err.to_string())
    }
}

impl From<SelectionError> for ApiError {
    fn from(err: SelectionError) -> Self {
        match err {
            SelectionError::UnreadableDocuments(_) => {
                ApiError::UnreadableDocument(err.to_string())
            }
            SelectionError::Scoring(e) => e.into(),
            SelectionError::Store(e) => e.into(),
        }
    }
}
