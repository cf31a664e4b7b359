//! Application error type and HTTP response mapping.
//!
//! Every failure surfaced to a caller is one of the variants below. The JSON
//! body shape is `{ "error": { "code", "message", "details" } }` so clients
//! can distinguish "resource absent" (`not_found`) from a failing dependency
//! (`dependency_failure`) without parsing messages.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
    details: Value,
}

/// Unified application error.
///
/// Variants map 1:1 to HTTP status codes in [`IntoResponse`]. Services and
/// repositories return this type directly so handlers can use `?` end to end.
#[derive(Debug)]
pub enum AppError {
    /// Request payload or parameters failed validation (400).
    Validation { message: String, details: Value },
    /// Caller identity is missing or unparseable (401).
    Unauthorized { message: String, details: Value },
    /// Caller identity is valid but not allowed to perform the operation (403).
    Forbidden { message: String, details: Value },
    /// A referenced listing, category, or user does not exist (404).
    NotFound { message: String, details: Value },
    /// A downstream dependency (database, media store) failed (502).
    Dependency { message: String, details: Value },
    /// Unexpected internal failure (500).
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn unauthorized(message: impl Into<String>, details: Value) -> Self {
        Self::Unauthorized {
            message: message.into(),
            details,
        }
    }
    pub fn forbidden(message: impl Into<String>, details: Value) -> Self {
        Self::Forbidden {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn dependency(message: impl Into<String>, details: Value) -> Self {
        Self::Dependency {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (code, message) = match self {
            AppError::Validation { message, .. } => ("validation_error", message),
            AppError::Unauthorized { message, .. } => ("unauthorized", message),
            AppError::Forbidden { message, .. } => ("forbidden", message),
            AppError::NotFound { message, .. } => ("not_found", message),
            AppError::Dependency { message, .. } => ("dependency_failure", message),
            AppError::Internal { message, .. } => ("internal_error", message),
        };
        write!(f, "{code}: {message}")
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match self {
            AppError::Validation { message, details } => (
                StatusCode::BAD_REQUEST,
                "validation_error",
                message,
                details,
            ),
            AppError::Unauthorized { message, details } => {
                (StatusCode::UNAUTHORIZED, "unauthorized", message, details)
            }
            AppError::Forbidden { message, details } => {
                (StatusCode::FORBIDDEN, "forbidden", message, details)
            }
            AppError::NotFound { message, details } => {
                (StatusCode::NOT_FOUND, "not_found", message, details)
            }
            AppError::Dependency { message, details } => (
                StatusCode::BAD_GATEWAY,
                "dependency_failure",
                message,
                details,
            ),
            AppError::Internal { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                message,
                details,
            ),
        };

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error() {
            // Validation is mostly delegated to storage constraints: a
            // foreign-key violation means the referenced category or user
            // row is absent.
            if db.is_foreign_key_violation() {
                return AppError::not_found(
                    "Referenced resource does not exist",
                    json!({ "constraint": db.constraint() }),
                );
            }
            if db.is_check_violation() || db.is_unique_violation() {
                return AppError::bad_request(
                    "Storage constraint violation",
                    json!({ "constraint": db.constraint() }),
                );
            }
        }

        tracing::error!(error = %e, "Storage operation failed");
        AppError::dependency("Storage operation failed", json!({}))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        AppError::bad_request(
            "Request validation failed",
            serde_json::to_value(&e).unwrap_or_else(|_| json!({})),
        )
    }
}
