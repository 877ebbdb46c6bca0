//! Typed error handling for the employee API
//!
//! Store operations return these errors as ordinary values. The HTTP layer
//! turns them into responses through [`IntoResponse`], so handlers only need
//! `?`.
//!
//! # Error Categories
//!
//! - [`EntityError`]: the requested employee does not exist
//! - [`ValidationError`]: one or more field rules failed
//! - [`RequestError`]: the request could not be turned into fields at all
//! - [`ApiError::Internal`]: anything nobody anticipated
//!
//! # Example
//!
//! ```rust,ignore
//! match store.get_by_id(42).await {
//!     Ok(employee) => println!("Found: {:?}", employee),
//!     Err(ApiError::Entity(EntityError::NotFound { id })) => {
//!         println!("Employee {} not found", id);
//!     }
//!     Err(e) => eprintln!("Other error: {}", e),
//! }
//! ```

use crate::core::employee::EmployeeId;
use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::any::Any;

/// Message carried by every response for an unanticipated failure
pub const UNEXPECTED_FAILURE_MESSAGE: &str = "An unexpected error occurred.";

/// Result alias used across the store and handlers
pub type Result<T, E = ApiError> = std::result::Result<T, E>;

/// The main error type of the API
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Entity lookups
    #[error(transparent)]
    Entity(#[from] EntityError),

    /// Field validation failures
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Malformed requests
    #[error(transparent)]
    Request(#[from] RequestError),

    /// Unanticipated failures
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Entity(e) => e.status_code(),
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Request(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Entity(e) => e.error_code(),
            ApiError::Validation(_) => "VALIDATION_ERROR",
            ApiError::Request(e) => e.error_code(),
            ApiError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        let message = match self {
            ApiError::Internal(_) => UNEXPECTED_FAILURE_MESSAGE.to_string(),
            other => other.to_string(),
        };

        ErrorResponse {
            code: self.error_code().to_string(),
            message,
            details: self.details(),
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            ApiError::Entity(EntityError::NotFound { id }) => {
                Some(serde_json::json!({ "id": id }))
            }
            ApiError::Validation(ValidationError::FieldErrors(errors)) => {
                Some(serde_json::json!({ "fields": errors }))
            }
            ApiError::Request(e) => Some(serde_json::Value::String(e.detail().to_string())),
            ApiError::Internal(detail) => Some(serde_json::Value::String(detail.clone())),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed unexpectedly");
        }
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

/// Build the fallback response for a handler that panicked
///
/// Plugged into `tower_http::catch_panic::CatchPanicLayer`, so a panic turns
/// into the same 500 body as [`ApiError::Internal`].
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "handler panicked".to_string()
    };

    ApiError::Internal(detail).into_response()
}

// =============================================================================
// Entity Errors
// =============================================================================

/// Errors related to employee lookups
#[derive(Debug, thiserror::Error)]
pub enum EntityError {
    /// No employee carries this id
    #[error("Employee not found")]
    NotFound { id: EmployeeId },
}

impl EntityError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            EntityError::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            EntityError::NotFound { .. } => "EMPLOYEE_NOT_FOUND",
        }
    }
}

impl ApiError {
    /// Shorthand for a missing employee
    pub fn not_found(id: EmployeeId) -> Self {
        ApiError::Entity(EntityError::NotFound { id })
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Errors related to input validation
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// One or more field rules failed
    #[error("Validation errors: {}", join_field_errors(.0))]
    FieldErrors(Vec<FieldValidationError>),
}

/// A single field validation error
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldValidationError {
    pub field: String,
    pub message: String,
}

fn join_field_errors(errors: &[FieldValidationError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join(", ")
}

impl ValidationError {
    /// Fields that failed, in rule order, with duplicates kept
    pub fn fields(&self) -> Vec<&str> {
        match self {
            ValidationError::FieldErrors(errors) => {
                errors.iter().map(|e| e.field.as_str()).collect()
            }
        }
    }
}

// =============================================================================
// Request Errors
// =============================================================================

/// The request could not be turned into employee fields
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error("Invalid query string")]
    InvalidQuery { message: String },

    #[error("Invalid request body")]
    InvalidBody { message: String },

    #[error("Invalid path")]
    InvalidPath { message: String },
}

impl RequestError {
    pub fn error_code(&self) -> &'static str {
        match self {
            RequestError::InvalidQuery { .. } => "INVALID_QUERY",
            RequestError::InvalidBody { .. } => "INVALID_BODY",
            RequestError::InvalidPath { .. } => "INVALID_PATH",
        }
    }

    /// Diagnostic text from the extractor that rejected the request
    pub fn detail(&self) -> &str {
        match self {
            RequestError::InvalidQuery { message }
            | RequestError::InvalidBody { message }
            | RequestError::InvalidPath { message } => message,
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::Request(RequestError::InvalidQuery {
            message: rejection.body_text(),
        })
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Request(RequestError::InvalidBody {
            message: rejection.body_text(),
        })
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::Request(RequestError::InvalidPath {
            message: rejection.body_text(),
        })
    }
}
