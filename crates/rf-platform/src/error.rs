//! Platform Error Types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::error;

use crate::api::common::ApiError;

/// Longest error message echoed back to clients on server errors.
pub const MAX_ERROR_MESSAGE_LEN: usize = 120;

#[derive(Error, Debug)]
pub enum PlatformError {
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        details: Option<serde_json::Value>,
    },

    #[error("Database not available")]
    DatabaseUnavailable,

    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] bson::ser::Error),

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl PlatformError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal { message: message.into() }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::DatabaseUnavailable
            | Self::Database(_)
            | Self::Serialization(_)
            | Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::DatabaseUnavailable => "DATABASE_UNAVAILABLE",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Serialization(_) | Self::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

impl From<validator::ValidationErrors> for PlatformError {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self::Validation {
            message: "Request payload failed validation".to_string(),
            details: serde_json::to_value(&errors).ok(),
        }
    }
}

impl IntoResponse for PlatformError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match self {
            Self::Validation { message, details } => ApiError {
                error: "VALIDATION_ERROR".to_string(),
                message,
                details,
            },
            other => {
                error!(error = %other, "Request failed");
                ApiError {
                    error: other.error_code().to_string(),
                    message: truncate_message(&other.to_string(), MAX_ERROR_MESSAGE_LEN),
                    details: None,
                }
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Cut `message` to at most `max_chars` characters.
pub fn truncate_message(message: &str, max_chars: usize) -> String {
    message.chars().take(max_chars).collect()
}

pub type Result<T> = std::result::Result<T, PlatformError>;
