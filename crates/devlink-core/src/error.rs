//! Unified application error types for DevLink.
//!
//! All crates map their internal errors into [`AppError`] for consistent
//! propagation through the ? operator. The HTTP mapping lives here as well so
//! that handlers can return `Result<_, AppError>` directly.

use std::fmt;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message returned to clients for every 500-class failure.
const INTERNAL_MESSAGE: &str = "Internal server error";

/// Top-level error kind categorization used across the entire application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Malformed input. No state was changed.
    Validation,
    /// A uniqueness rule was violated (duplicate email).
    Conflict,
    /// Missing, invalid, or expired credentials.
    Unauthorized,
    /// The entity does not exist or the caller may not see it.
    NotFound,
    /// An internal server error occurred (hashing, signing, etc.).
    Internal,
    /// A storage error occurred.
    Database,
    /// A configuration error occurred.
    Configuration,
}

impl ErrorKind {
    /// Machine-readable code used in response bodies.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation => "VALIDATION_ERROR",
            Self::Conflict => "CONFLICT",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::NotFound => "NOT_FOUND",
            Self::Internal | Self::Database | Self::Configuration => "INTERNAL_ERROR",
        }
    }

    /// HTTP status this kind maps to at the boundary.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation => StatusCode::BAD_REQUEST,
            Self::Conflict => StatusCode::CONFLICT,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Internal | Self::Database | Self::Configuration => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Whether the detail of this kind must stay server-side.
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Database | Self::Configuration)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation => write!(f, "VALIDATION"),
            Self::Conflict => write!(f, "CONFLICT"),
            Self::Unauthorized => write!(f, "UNAUTHORIZED"),
            Self::NotFound => write!(f, "NOT_FOUND"),
            Self::Internal => write!(f, "INTERNAL"),
            Self::Database => write!(f, "DATABASE"),
            Self::Configuration => write!(f, "CONFIGURATION"),
        }
    }
}

/// The unified application error used throughout DevLink.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message.
    pub message: String,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new application error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Create a new application error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// Create a conflict error.
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Conflict, message)
    }

    /// Create an unauthorized error.
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unauthorized, message)
    }

    /// Create a not-found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    /// Create a database error.
    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Database, message)
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            source: None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(
            ErrorKind::Validation,
            format!("Invalid JSON: {err}"),
            err,
        )
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::with_source(ErrorKind::Internal, format!("I/O error: {err}"), err)
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        Self::with_source(ErrorKind::Database, format!("Database error: {err}"), err)
    }
}

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.kind.status();

        let message = if self.kind.is_internal() {
            match &self.source {
                Some(source) => tracing::error!(
                    kind = %self.kind,
                    error = %self.message,
                    source = %source,
                    "Internal server error"
                ),
                None => tracing::error!(kind = %self.kind, error = %self.message, "Internal server error"),
            }
            INTERNAL_MESSAGE.to_string()
        } else {
            self.message
        };

        let body = ApiErrorResponse {
            error: self.kind.code().to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(AppError::validation("x").kind.status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::conflict("x").kind.status(), StatusCode::CONFLICT);
        assert_eq!(
            AppError::unauthorized("x").kind.status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(AppError::not_found("x").kind.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::database("x").kind.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_internal_detail_is_not_exposed() {
        let response = AppError::database("relation \"resources\" does not exist").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), 1024)
            .await
            .expect("body");
        let body: ApiErrorResponse = serde_json::from_slice(&bytes).expect("json");
        assert_eq!(body.error, "INTERNAL_ERROR");
        assert_eq!(body.message, INTERNAL_MESSAGE);
    }

    #[tokio::test]
    async fn test_client_errors_keep_message() {
        let response = AppError::not_found("Resource not found").into_response();
        let bytes = axum::body::to_bytes(response.into_body(), 1024)
            .await
            .expect("body");
        let body: ApiErrorResponse = serde_json::from_slice(&bytes).expect("json");
        assert_eq!(body.error, "NOT_FOUND");
        assert_eq!(body.message, "Resource not found");
    }
}
