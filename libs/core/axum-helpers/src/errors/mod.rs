pub mod handlers;
pub mod responses;

pub use responses::{DataResponse, DeleteResponse};

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Standard error response body.
///
/// Every failed request renders this shape:
/// - `error`: short human-readable description of what failed
/// - `details`: optional underlying cause (driver message, parse error)
///
/// # JSON Example
///
/// ```json
/// {
///   "error": "Failed to create event",
///   "details": "null value in column \"name\" violates not-null constraint"
/// }
/// ```
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// What failed
    pub error: String,
    /// Underlying cause, when one is worth passing through
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}

/// Application error type that converts into HTTP responses.
///
/// Domain error enums convert into this via `From` impls; the
/// `IntoResponse` impl picks the status code, logs at the appropriate
/// level, and renders the [`ErrorResponse`] envelope.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// A storage operation failed; `message` is the caller-facing summary
    /// and `details` carries the driver message verbatim. `expose_details`
    /// controls whether the driver message goes into the response body or
    /// only into the log.
    #[error("{message}")]
    Storage {
        message: String,
        details: String,
        expose_details: bool,
    },

    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("JSON extraction error: {0}")]
    JsonRejection(#[from] JsonRejection),

    #[error("Query extraction error: {0}")]
    QueryRejection(#[from] QueryRejection),
}

impl AppError {
    /// Storage failure whose driver message is returned as `details`.
    pub fn storage(message: impl Into<String>, source: &DbErr) -> Self {
        AppError::Storage {
            message: message.into(),
            details: source.to_string(),
            expose_details: true,
        }
    }

    /// Storage failure logged in full but reported to the client by the
    /// summary message only.
    pub fn storage_opaque(message: impl Into<String>, source: &DbErr) -> Self {
        AppError::Storage {
            message: message.into(),
            details: source.to_string(),
            expose_details: false,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::BadRequest(msg) => {
                tracing::info!("Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, ErrorResponse::new(msg))
            }
            AppError::NotFound(msg) => {
                tracing::info!("Not found: {}", msg);
                (StatusCode::NOT_FOUND, ErrorResponse::new(msg))
            }
            AppError::Storage {
                message,
                details,
                expose_details,
            } => {
                tracing::error!(details = %details, "{}", message);
                let body = if expose_details {
                    ErrorResponse::with_details(message, details)
                } else {
                    ErrorResponse::new(message)
                };
                (StatusCode::INTERNAL_SERVER_ERROR, body)
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::with_details("Database error", e.to_string()),
                )
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal server error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::with_details("Internal server error", msg),
                )
            }
            AppError::JsonRejection(e) => {
                tracing::warn!("JSON extraction error: {:?}", e);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::with_details("Invalid request body", e.body_text()),
                )
            }
            AppError::QueryRejection(e) => {
                tracing::warn!("Query extraction error: {:?}", e);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::with_details("Invalid query parameters", e.body_text()),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
