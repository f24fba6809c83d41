//! HTTP-facing error type.
//!
//! Every failure is scoped to one request and rendered as
//! `{"error": {"code", "message", "details"}}`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

use crate::domain::errors::MappingError;
use crate::infrastructure::qr::RenderError;

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error payload.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },

    #[error("{message}")]
    NotFound { message: String, details: Value },

    /// Alias collisions. Reported as 400 like every other create failure.
    #[error("{message}")]
    Conflict { message: String, details: Value },

    /// The generator ran out of attempts; the caller may simply retry.
    #[error("{message}")]
    Exhausted { message: String, details: Value },

    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
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
    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }
    pub fn exhausted(message: impl Into<String>, details: Value) -> Self {
        Self::Exhausted {
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

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } | AppError::Conflict { .. } | AppError::Exhausted { .. } => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Converts into the serializable payload without the status code.
    pub fn to_error_info(&self) -> ErrorInfo {
        let (code, message, details) = match self {
            AppError::Validation { message, details } => ("validation_error", message, details),
            AppError::NotFound { message, details } => ("not_found", message, details),
            AppError::Conflict { message, details } => ("conflict", message, details),
            AppError::Exhausted { message, details } => ("code_space_exhausted", message, details),
            AppError::Internal { message, details } => ("internal_error", message, details),
        };

        ErrorInfo {
            code,
            message: message.clone(),
            details: details.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<MappingError> for AppError {
    fn from(e: MappingError) -> Self {
        match e {
            MappingError::InvalidUrl(reason) => {
                AppError::bad_request("Invalid URL format", json!({ "reason": reason }))
            }
            MappingError::InvalidAlias(reason) => AppError::bad_request(
                format!("Invalid custom alias: {}", reason),
                json!({ "reason": reason.to_string() }),
            ),
            MappingError::AliasTaken(alias) => AppError::conflict(
                format!("Alias {} is already taken. Pick another alias.", alias),
                json!({ "alias": alias }),
            ),
            MappingError::CodeSpaceExhausted { attempts } => AppError::exhausted(
                "Failed to generate a unique short code. Try again.",
                json!({ "attempts": attempts }),
            ),
            MappingError::InvalidPage(reason) => AppError::bad_request(reason, json!({})),
            MappingError::NotFound(code) => AppError::not_found(
                format!("URL '{}' doesn't exist.", code),
                json!({ "code": code }),
            ),
            MappingError::Expired(code) => AppError::not_found(
                format!("URL '{}' is expired.", code),
                json!({ "code": code, "reason": "expired" }),
            ),
            MappingError::Storage(e) => {
                tracing::error!(error = %e, "Storage failure");
                AppError::internal("Database error", json!({}))
            }
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        let fields: Vec<String> = e.field_errors().keys().map(|k| k.to_string()).collect();

        AppError::bad_request(
            "Request validation failed",
            json!({ "fields": fields, "errors": e }),
        )
    }
}

impl From<RenderError> for AppError {
    fn from(e: RenderError) -> Self {
        tracing::error!(error = %e, "QR rendering failed");
        AppError::internal("Failed to render QR code", json!({}))
    }
}
